//! Named projections of the task collection.
//!
//! # Responsibility
//! - Project the full collection into the view selected by the caller.
//!
//! # Invariants
//! - Filtering never reorders tasks; ranking is applied afterwards.
//! - The input collection is read-only; the projection is an owned copy.

use crate::model::task::Task;

/// View selector chosen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Tasks still needing attention.
    Active,
    /// Tasks marked done.
    Completed,
    /// The whole collection, unfiltered.
    All,
}

/// Projects the collection into the selected view.
pub fn filter_view(tasks: &[Task], view: View) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| match view {
            View::Active => task.is_active(),
            View::Completed => !task.is_active(),
            View::All => true,
        })
        .cloned()
        .collect()
}
