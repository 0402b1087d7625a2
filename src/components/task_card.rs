//! Task Card Component
//!
//! One task with its edit and delete actions.

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTaskApi;
use crate::models::Task;
use crate::notify::BrowserNotifier;
use crate::workflow::TaskCardModel;

/// A single task in the list
///
/// `refresh` reloads the owning list after a successful delete.
#[component]
pub fn TaskCard(
    task: Task,
    api: HttpTaskApi,
    refresh: UnsyncCallback<()>,
    on_edit: UnsyncCallback<String>,
) -> impl IntoView {
    let title = task.title.clone();
    let description = task.description.clone();
    let card = StoredValue::new_local(TaskCardModel::new(task, api, BrowserNotifier));

    let edit_title = title.clone();

    view! {
        <div class="card mb-3">
            <div class="card-body">
                <h5 class="card-title">{title}</h5>
                <p class="card-text">{description}</p>
                <button class="btn btn-outline-primary mx-2" on:click=move |_| on_edit.run(edit_title.clone())>
                    "Edit"
                </button>
                <button class="btn btn-danger" on:click=move |_| {
                    let card = card.get_value();
                    spawn_local(async move {
                        card.delete_task(move || refresh.run(())).await;
                    });
                }>
                    "Delete Task"
                </button>
            </div>
        </div>
    }
}
