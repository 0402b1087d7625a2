//! Task List Workflow
//!
//! Fetch, add and update for the task list page. Local state only ever
//! reflects a confirmed backend collection: every successful mutation is
//! followed by a full reload, never by patching `tasks` in place.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::TaskApi;
use crate::models::{Notice, Task};
use crate::notify::Notifier;
use crate::state::{StateCell, ViewState};

#[derive(Debug, Clone, Copy)]
enum Submission {
    Create,
    Update,
}

impl Submission {
    fn verb(self) -> &'static str {
        match self {
            Submission::Create => "adding",
            Submission::Update => "updating",
        }
    }
}

/// Behaviour of the task list view
#[derive(Clone)]
pub struct TaskListModel<A, N, S> {
    api: A,
    notifier: N,
    state: S,
    /// Shared by clones so a view mounts at most once
    mounted: Rc<Cell<bool>>,
}

impl<A, N, S> TaskListModel<A, N, S>
where
    A: TaskApi,
    N: Notifier,
    S: StateCell,
{
    pub fn new(api: A, notifier: N, state: S) -> Self {
        Self {
            api,
            notifier,
            state,
            mounted: Rc::new(Cell::new(false)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    #[cfg(test)]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    #[cfg(test)]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Initial load; later calls are ignored
    pub async fn mount(&self) {
        if self.mounted.replace(true) {
            log::debug!("[TaskList] already mounted");
            return;
        }
        self.refresh().await;
    }

    /// Reload the whole collection
    ///
    /// On failure the previous tasks stay on screen.
    pub async fn refresh(&self) {
        log::debug!("[TaskList] fetching tasks");
        match self.api.list_tasks().await {
            Ok(tasks) => {
                log::info!("[TaskList] loaded {} tasks", tasks.len());
                self.state.transition(|state| state.with_tasks(tasks));
            }
            Err(err) if err.status() == Some(404) => {
                log::warn!("[TaskList] backend reports no task collection: {}", err)
            }
            Err(err) => log::error!("[TaskList] error fetching tasks: {}", err),
        }
    }

    pub fn set_title_input(&self, value: String) {
        self.state.transition(|state| state.with_title_input(value));
    }

    pub fn set_description_input(&self, value: String) {
        self.state.transition(|state| state.with_description_input(value));
    }

    /// Create a task from the two fields, then reload
    pub async fn add_task(&self) {
        self.submit(Submission::Create).await;
    }

    /// Overwrite the task whose title matches the title field, then reload
    pub async fn update_task(&self) {
        self.submit(Submission::Update).await;
    }

    /// The trimmed draft, or `None` after warning the user
    ///
    /// Synchronous so click handlers can warn before any request is spawned.
    pub fn validated_draft(&self) -> Option<Task> {
        match self.state.snapshot().draft() {
            Ok(draft) => Some(draft),
            Err(reason) => {
                log::warn!("[TaskList] submission rejected: {}", reason);
                self.notifier.notify(Notice::IncompleteDraft);
                None
            }
        }
    }

    async fn submit(&self, kind: Submission) {
        let Some(draft) = self.validated_draft() else {
            return;
        };

        let result = match kind {
            Submission::Create => self.api.create_task(&draft).await,
            Submission::Update => self.api.update_task(&draft).await,
        };

        match result {
            Ok(status) => {
                log::info!("[TaskList] {} task {:?} succeeded (HTTP {})", kind.verb(), draft.title, status);
                self.state.transition(ViewState::with_inputs_cleared);
                self.refresh().await;
            }
            // Fields keep their contents so the user can retry.
            Err(err) => log::error!("[TaskList] error {} task: {}", kind.verb(), err),
        }
    }

    /// Fetch one task by title and load it into the fields for editing
    pub async fn load_task(&self, title: &str) {
        match self.api.get_task(title).await {
            Ok(task) => {
                log::debug!("[TaskList] editing task {:?}", task.title);
                self.state.transition(|state| state.with_inputs_from(task));
            }
            Err(err) => log::error!("[TaskList] error loading task {:?}: {}", title, err),
        }
    }
}
