//! Task List View Component
//!
//! Owns the page state, loads the collection on mount and renders one
//! `TaskCard` per task in backend order.

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTaskApi;
use crate::components::{TaskCard, TaskForm};
use crate::models::Task;
use crate::notify::BrowserNotifier;
use crate::state::ViewState;
use crate::workflow::TaskListModel;

/// List model as wired in the browser
pub type BrowserTaskList = TaskListModel<HttpTaskApi, BrowserNotifier, RwSignal<ViewState>>;

/// Indexed tasks, notifying only when the fetched collection changes
///
/// Field edits replace the whole `ViewState`; the memo keeps them from
/// re-rendering the list.
fn task_rows(state: RwSignal<ViewState>) -> Memo<Vec<(usize, Task)>> {
    Memo::new(move |_| state.with(|s| s.tasks().iter().cloned().enumerate().collect()))
}

#[component]
pub fn TaskListView(api: HttpTaskApi) -> impl IntoView {
    let state = RwSignal::new(ViewState::default());
    let model = StoredValue::new_local(BrowserTaskList::new(api, BrowserNotifier, state));

    // Load tasks on mount
    Effect::new(move |_| {
        let model = model.get_value();
        spawn_local(async move { model.mount().await });
    });

    let refresh = UnsyncCallback::new(move |()| {
        let model = model.get_value();
        spawn_local(async move { model.refresh().await });
    });
    let on_edit = UnsyncCallback::new(move |title: String| {
        let model = model.get_value();
        spawn_local(async move { model.load_task(&title).await });
    });
    // Validate in the click handler so the warning is not deferred
    let on_add = UnsyncCallback::new(move |()| {
        let model = model.get_value();
        if model.validated_draft().is_some() {
            spawn_local(async move { model.add_task().await });
        }
    });
    let on_update = UnsyncCallback::new(move |()| {
        let model = model.get_value();
        if model.validated_draft().is_some() {
            spawn_local(async move { model.update_task().await });
        }
    });
    let on_title = UnsyncCallback::new(move |value: String| model.with_value(|m| m.set_title_input(value)));
    let on_description =
        UnsyncCallback::new(move |value: String| model.with_value(|m| m.set_description_input(value)));

    let rows = task_rows(state);
    let render_task = move |task: Task, index: usize| {
        let api = model.with_value(|m| m.api().clone());
        view! {
            <li data-index=index.to_string()>
                <TaskCard task=task api=api refresh=refresh on_edit=on_edit />
            </li>
        }
    };

    view! {
        <div class="card-body">
            <TaskForm
                state=state
                on_title=on_title
                on_description=on_description
                on_add=on_add
                on_update=on_update
            />
            <h5 class="card text-white bg-secondary mb-3">"Your Tasks"</h5>
            <ol class="task-list">
                <For
                    each=move || rows.get()
                    key=|(index, task)| (*index, task.clone())
                    children=move |(index, task)| render_task(task, index)
                />
            </ol>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use leptos::reactive::effect::ImmediateEffect;

    use super::*;
    use crate::state::StateCell;

    #[test]
    fn test_rows_ignore_field_edits() {
        let owner = Owner::new();
        owner.set();

        let state = RwSignal::new(ViewState::default());
        let rows = task_rows(state);
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let _effect = ImmediateEffect::new(move || {
            rows.track();
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        for typed in ["W", "Wa", "Was", "Wash"] {
            state.transition(|s| s.with_title_input(typed.to_string()));
        }
        state.transition(|s| s.with_description_input("car".to_string()));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        state.transition(|s| s.with_tasks(vec![Task::new("Wash", "car")]));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
        assert_eq!(rows.get_untracked(), vec![(0, Task::new("Wash", "car"))]);

        // Same payload again: no re-render
        state.transition(|s| s.with_tasks(vec![Task::new("Wash", "car")]));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
