//! View State
//!
//! The client-local state behind the task list page. Fields are private:
//! every change goes through a transition that consumes the old state and
//! returns the next one, which is then written back wholesale.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use thiserror::Error;

use crate::models::Task;

/// Why a draft cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is empty")]
    EmptyTitle,
    #[error("description is empty")]
    EmptyDescription,
}

/// Task list page state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Last confirmed backend collection, in backend order
    tasks: Vec<Task>,
    /// Raw title field contents (untrimmed while typing)
    title_input: String,
    /// Raw description field contents (untrimmed while typing)
    description_input: String,
}

impl ViewState {
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn title_input(&self) -> &str {
        &self.title_input
    }

    pub fn description_input(&self) -> &str {
        &self.description_input
    }

    /// Replace the whole collection with a freshly fetched one
    pub(crate) fn with_tasks(self, tasks: Vec<Task>) -> Self {
        Self { tasks, ..self }
    }

    pub(crate) fn with_title_input(self, title_input: String) -> Self {
        Self { title_input, ..self }
    }

    pub(crate) fn with_description_input(self, description_input: String) -> Self {
        Self { description_input, ..self }
    }

    /// Load a task into both fields for editing
    pub(crate) fn with_inputs_from(self, task: Task) -> Self {
        Self {
            title_input: task.title,
            description_input: task.description,
            ..self
        }
    }

    pub(crate) fn with_inputs_cleared(self) -> Self {
        Self {
            title_input: String::new(),
            description_input: String::new(),
            ..self
        }
    }

    /// The trimmed task the fields currently describe
    pub fn draft(&self) -> Result<Task, ValidationError> {
        let title = self.title_input.trim();
        let description = self.description_input.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Task::new(title, description))
    }
}

/// Holder the workflow reads `ViewState` from and writes it back to
pub trait StateCell {
    fn snapshot(&self) -> ViewState;

    fn replace(&self, next: ViewState);

    /// Compute the next state from the current one and store it
    fn transition(&self, f: impl FnOnce(ViewState) -> ViewState) {
        self.replace(f(self.snapshot()));
    }
}

/// Reactive holder used by the components
impl StateCell for RwSignal<ViewState> {
    fn snapshot(&self) -> ViewState {
        self.get_untracked()
    }

    fn replace(&self, next: ViewState) {
        self.set(next);
    }
}

/// Plain holder for code running outside a reactive owner
impl StateCell for Rc<RefCell<ViewState>> {
    fn snapshot(&self) -> ViewState {
        RefCell::borrow(self).clone()
    }

    fn replace(&self, next: ViewState) {
        *RefCell::borrow_mut(self) = next;
    }
}
