//! Task Manager App
//!
//! Page shell around the task list.

use leptos::prelude::*;

use crate::api::HttpTaskApi;
use crate::components::TaskListView;
use crate::config::ApiConfig;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    log::debug!("[App] using backend at {}", config.base_url());
    let api = HttpTaskApi::new(config);

    view! {
        <main class="App">
            <div class="app-panel list-group-item justify-content-center align-items-center mx-auto">
                <h1 class="card text-white bg-primary mb-1">"Task Manager"</h1>
                <h6 class="card text-white bg-secondary mb-3">"Leptos + REST"</h6>
                <TaskListView api=api />
            </div>
        </main>
    }
}
