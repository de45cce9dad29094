//! Task ranking policies.
//!
//! # Responsibility
//! - Order view projections for list display.
//! - Select the single focus task among active tasks.
//!
//! # Invariants
//! - Both orders use the same priority primary key.
//! - The two comparators stay separate: list ordering ignores due dates
//!   entirely, focus ordering weighs them ahead of recency. They answer
//!   different questions and must not be unified.
//! - Full ties keep the store's insertion order (newest-created first):
//!   list sorting is stable and focus selection takes the first minimum.

use crate::model::task::{Priority, Task};
use std::cmp::Ordering;

/// Numeric ordering weight for a priority; lower sorts first.
pub fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 0,
        Priority::Medium => 1,
        Priority::Low => 2,
    }
}

/// List order: priority first, then most recently created.
pub fn compare_for_list(a: &Task, b: &Task) -> Ordering {
    priority_rank(a.priority)
        .cmp(&priority_rank(b.priority))
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Focus order: priority first, then imminent deadlines, then recency.
///
/// At equal priority a task with a due date outranks one without; two dated
/// tasks compare by earlier deadline.
pub fn compare_for_focus(a: &Task, b: &Task) -> Ordering {
    let by_priority = priority_rank(a.priority).cmp(&priority_rank(b.priority));
    if by_priority != Ordering::Equal {
        return by_priority;
    }

    let by_deadline = match (a.due_date, b.due_date) {
        (Some(a_due), Some(b_due)) => a_due.cmp(&b_due),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_deadline.then_with(|| b.created_at.cmp(&a.created_at))
}

/// Sorts a view projection for display.
pub fn sort_for_list(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(compare_for_list);
    tasks
}

/// Picks the focus task among active tasks, independent of the current view.
///
/// Returns `None` when nothing is active; an all-completed collection has no
/// focus task and that is not an error.
pub fn focus_task(tasks: &[Task]) -> Option<&Task> {
    tasks
        .iter()
        .filter(|task| task.is_active())
        .min_by(|a, b| compare_for_focus(a, b))
}
