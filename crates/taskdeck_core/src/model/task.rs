//! Task domain model.
//!
//! # Responsibility
//! - Define the persisted task record and its closed enumerations.
//! - Provide the status toggle used by the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is non-empty for every stored task (enforced at creation).
//! - `status` changes only through `toggle_status`, never implicitly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task owned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Urgency weight, fixed once a task is created.
///
/// No edit operation exists, so a task keeps its priority for its whole
/// lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Sorts ahead of everything else.
    High,
    /// Default middle band.
    Medium,
    /// Sorts last.
    Low,
}

/// Completion state, toggled explicitly by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Still needs attention.
    Active,
    /// Marked done; kept in the collection until archived.
    Completed,
}

/// Canonical persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id assigned at creation.
    pub id: TaskId,
    /// Display title; never empty for a stored task.
    pub title: String,
    /// Free-form notes; may be empty.
    pub details: String,
    /// Urgency weight used as the primary ranking key.
    pub priority: Priority,
    /// Normalized tag tokens in input order; duplicates are kept.
    pub tags: Vec<String>,
    /// Completion state.
    pub status: TaskStatus,
    /// Creation time in epoch milliseconds, fixed at creation.
    pub created_at: i64,
    /// Optional deadline in epoch milliseconds. Older payloads may omit the
    /// field entirely, which deserializes as `None`.
    #[serde(default)]
    pub due_date: Option<i64>,
}

impl Task {
    /// Flips between active and completed.
    pub fn toggle_status(&mut self) {
        self.status = match self.status {
            TaskStatus::Active => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Active,
        };
    }

    /// Returns whether this task still needs attention.
    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }
}
