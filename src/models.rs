//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
///
/// The title doubles as the record key: update and delete address a task
/// by title alone. Extra fields the backend sends (such as `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// User-facing messages raised as blocking browser alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Add/update attempted with an empty title or description
    IncompleteDraft,
    /// A delete request failed
    DeleteFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::IncompleteDraft => "Please fill in both title and description before adding.",
            Notice::DeleteFailed => "Error deleting task. Please try again.",
        }
    }
}
