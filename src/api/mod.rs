//! Task Backend API
//!
//! Client-side bindings to the REST task collection, organized by concern.

mod error;
mod http;

use async_trait::async_trait;

use crate::models::Task;

pub use error::{ApiError, ApiResult};
pub use http::HttpTaskApi;

/// The remote task collection
///
/// Mutations resolve to the HTTP status of the accepted request; their
/// response bodies are not inspected. Futures are not `Send` because the
/// browser fetch API is single-threaded.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /api/todos`, in backend order
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    /// `GET /api/get_todo/{title}`
    async fn get_task(&self, title: &str) -> ApiResult<Task>;

    /// `POST /api/todo`
    async fn create_task(&self, task: &Task) -> ApiResult<u16>;

    /// `PUT /api/update_todo`, matched by the title inside the body
    async fn update_task(&self, task: &Task) -> ApiResult<u16>;

    /// `DELETE /api/remove_todo/{title}`
    async fn delete_task(&self, title: &str) -> ApiResult<u16>;
}
