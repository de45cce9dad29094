//! Tracker use-case facade.
//!
//! # Responsibility
//! - Expose the presentation-facing API over one task store.
//! - Combine view filtering, list ranking, focus selection, and stats.
//!
//! # Invariants
//! - The service never hands out a mutable view of the collection.
//! - Focus selection considers active tasks only, whatever view is shown.

use crate::model::task::{Task, TaskId};
use crate::rank;
use crate::stats::{aggregate, TaskStats};
use crate::store::backend::StorageBackend;
use crate::store::task_store::{StoreResult, TaskDraft, TaskStore};
use crate::view::{filter_view, View};

/// Presentation-facing facade over one task store.
pub struct TrackerService<S: StorageBackend> {
    store: TaskStore<S>,
}

impl<S: StorageBackend> TrackerService<S> {
    /// Loads persisted state through the given backend, or starts empty.
    pub fn load(backend: S) -> StoreResult<Self> {
        Ok(Self {
            store: TaskStore::load(backend)?,
        })
    }

    /// Creates a task from submitted form values.
    ///
    /// Returns `Ok(None)` when the title trims to empty; nothing is stored
    /// in that case.
    pub fn create_task(&mut self, draft: &TaskDraft) -> StoreResult<Option<TaskId>> {
        self.store.create(draft)
    }

    /// Flips a task between active and completed; unknown ids are a no-op.
    pub fn toggle_status(&mut self, id: TaskId) -> StoreResult<()> {
        self.store.toggle_status(id)
    }

    /// Permanently removes a task; unknown ids are a no-op.
    pub fn archive(&mut self, id: TaskId) -> StoreResult<()> {
        self.store.archive(id)
    }

    /// Returns the selected view, ranked for display.
    pub fn list_view(&self, view: View) -> Vec<Task> {
        rank::sort_for_list(filter_view(self.store.tasks(), view))
    }

    /// Returns the single focus task, when any task is active.
    pub fn focus_task(&self) -> Option<Task> {
        rank::focus_task(self.store.tasks()).cloned()
    }

    /// Returns aggregate completion statistics for the whole collection.
    pub fn stats(&self) -> TaskStats {
        aggregate(self.store.tasks())
    }

    /// Read-only snapshot of the raw collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }
}
