//! UI Components
//!
//! Leptos components for the task list page.

mod task_card;
mod task_form;
mod task_list_view;

pub use task_card::TaskCard;
pub use task_form::TaskForm;
pub use task_list_view::TaskListView;
