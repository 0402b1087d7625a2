//! Task Form Component
//!
//! Title and description fields with the add and update actions.

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;

use crate::state::ViewState;

/// Form feeding the task list; every change is routed back to the list model
#[component]
pub fn TaskForm(
    state: RwSignal<ViewState>,
    on_title: UnsyncCallback<String>,
    on_description: UnsyncCallback<String>,
    on_add: UnsyncCallback<()>,
    on_update: UnsyncCallback<()>,
) -> impl IntoView {
    view! {
        <h5 class="card text-white bg-info mb-3">"Add Your Tasks Here"</h5>
        <span class="card-text">
            <input
                class="mb-2 form-control title-input"
                placeholder="Task Title..."
                prop:value=move || state.with(|s| s.title_input().to_string())
                on:input=move |ev| on_title.run(event_target_value(&ev))
            />
            <textarea
                class="mb-2 form-control description-input"
                placeholder="Task Description..."
                prop:value=move || state.with(|s| s.description_input().to_string())
                on:input=move |ev| on_description.run(event_target_value(&ev))
            ></textarea>
            <button class="btn btn-outline-success add-task-btn mx-2 mb-lg-4" on:click=move |_| on_add.run(())>
                "Add Task"
            </button>
            <br />
            <button class="btn btn-outline-warning update-task-btn mx-2 mb-lg-4" on:click=move |_| on_update.run(())>
                "Update Task"
            </button>
        </span>
    }
}
