//! Task Workflows
//!
//! The request choreography behind the components: validate, issue one
//! backend call, then reload the collection. Generic over the backend,
//! the notifier and the state holder so it runs natively under test.

mod card;
mod list;

#[cfg(test)]
mod mock;

pub use card::TaskCardModel;
pub use list::TaskListModel;
