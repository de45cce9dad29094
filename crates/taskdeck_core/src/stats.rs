//! Aggregate completion statistics.
//!
//! # Responsibility
//! - Derive counters from a read-only snapshot of the collection.
//!
//! # Invariants
//! - `active + completed == total`.
//! - `completion_rate` stays within `[0, 100]` and is `0` for an empty
//!   collection.

use crate::model::task::Task;

/// Aggregate counters derived from the current collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Collection size.
    pub total: usize,
    /// Tasks still needing attention.
    pub active: usize,
    /// Tasks marked done.
    pub completed: usize,
    /// Rounded completion percentage.
    pub completion_rate: u8,
}

/// Derives stats from a read-only snapshot.
pub fn aggregate(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| !task.is_active()).count();
    let completion_rate = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    TaskStats {
        total,
        active: total - completed,
        completed,
        completion_rate,
    }
}
