//! Task Card Workflow
//!
//! Delete for a single task. The card owns no mutable state; after a
//! confirmed delete it hands control back through the refresh callback.

use crate::api::TaskApi;
use crate::models::{Notice, Task};
use crate::notify::Notifier;

/// Behaviour of one task card
#[derive(Clone)]
pub struct TaskCardModel<A, N> {
    task: Task,
    api: A,
    notifier: N,
}

impl<A, N> TaskCardModel<A, N>
where
    A: TaskApi,
    N: Notifier,
{
    pub fn new(task: Task, api: A, notifier: N) -> Self {
        Self { task, api, notifier }
    }

    #[cfg(test)]
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Delete this task by title and run `refresh` once it is gone
    pub async fn delete_task(&self, refresh: impl FnOnce()) {
        match self.api.delete_task(&self.task.title).await {
            Ok(status) => {
                log::info!("[TaskCard] deleted task {:?} (HTTP {})", self.task.title, status);
                refresh();
            }
            Err(err) => {
                self.notifier.notify(Notice::DeleteFailed);
                log::error!("[TaskCard] error deleting task {:?}: {}", self.task.title, err);
            }
        }
    }
}
