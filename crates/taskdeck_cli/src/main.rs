//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Run one in-memory create/focus/stats pass for quick sanity checks.

use taskdeck_core::{MemoryStorage, Priority, TaskDraft, TrackerService, View};

fn main() {
    println!("taskdeck_core version={}", taskdeck_core::core_version());

    // Why: keep a tiny probe that exercises the full core surface without
    // touching the on-disk store.
    let mut tracker = match TrackerService::load(MemoryStorage::default()) {
        Ok(tracker) => tracker,
        Err(err) => {
            eprintln!("failed to initialize tracker: {err}");
            std::process::exit(1);
        }
    };

    let draft = TaskDraft {
        title: "Smoke-test the tracker".to_string(),
        details: String::new(),
        priority: Priority::High,
        raw_tags: "probe, Smoke Test".to_string(),
        due_date: None,
    };
    if let Err(err) = tracker.create_task(&draft) {
        eprintln!("failed to create probe task: {err}");
        std::process::exit(1);
    }

    let stats = tracker.stats();
    println!(
        "tasks={} active={} completed={} rate={}%",
        stats.total, stats.active, stats.completed, stats.completion_rate
    );
    match tracker.focus_task() {
        Some(task) => println!("focus={}", task.title),
        None => println!("focus=none"),
    }
    for task in tracker.list_view(View::All) {
        println!("- [{:?}] {} tags={:?}", task.priority, task.title, task.tags);
    }
}
