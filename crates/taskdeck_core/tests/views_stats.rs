use taskdeck_core::{
    aggregate, filter_view, MemoryStorage, Priority, Task, TaskDraft, TaskStatus, TrackerService,
    View,
};
use uuid::Uuid;

#[test]
fn views_partition_the_collection() {
    let tasks = collection(2, 3);

    assert_eq!(filter_view(&tasks, View::Active).len(), 2);
    assert_eq!(filter_view(&tasks, View::Completed).len(), 3);
    assert_eq!(filter_view(&tasks, View::All).len(), 5);
}

#[test]
fn view_filter_keeps_insertion_order() {
    let tasks = collection(2, 3);

    let active = filter_view(&tasks, View::Active);
    let positions: Vec<_> = active
        .iter()
        .map(|task| tasks.iter().position(|t| t.id == task.id).unwrap())
        .collect();
    let mut sorted_positions = positions.clone();
    sorted_positions.sort_unstable();
    assert_eq!(positions, sorted_positions);
}

#[test]
fn stats_count_active_completed_and_rate() {
    let stats = aggregate(&collection(2, 3));

    assert_eq!(stats.total, 5);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.completion_rate, 60);
}

#[test]
fn stats_rate_is_zero_for_empty_collection() {
    let stats = aggregate(&[]);

    assert_eq!(stats.total, 0);
    assert_eq!(stats.completion_rate, 0);
}

#[test]
fn stats_rate_rounds_to_nearest_percent() {
    assert_eq!(aggregate(&collection(2, 1)).completion_rate, 33);
    assert_eq!(aggregate(&collection(1, 2)).completion_rate, 67);
    assert_eq!(aggregate(&collection(0, 4)).completion_rate, 100);
}

#[test]
fn service_combines_views_ranking_focus_and_stats() {
    let mut tracker = TrackerService::load(MemoryStorage::default()).unwrap();

    let low = tracker
        .create_task(&draft("low one", Priority::Low))
        .unwrap()
        .unwrap();
    let high = tracker
        .create_task(&draft("high one", Priority::High))
        .unwrap()
        .unwrap();
    let medium = tracker
        .create_task(&draft("medium one", Priority::Medium))
        .unwrap()
        .unwrap();

    tracker.toggle_status(medium).unwrap();

    let active = tracker.list_view(View::Active);
    let ids: Vec<_> = active.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![high, low]);

    let completed = tracker.list_view(View::Completed);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, medium);

    // Focus does not depend on which view the caller is showing.
    let focus = tracker.focus_task().unwrap();
    assert_eq!(focus.id, high);

    let stats = tracker.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.completion_rate, 33);

    tracker.archive(high).unwrap();
    let focus = tracker.focus_task().unwrap();
    assert_eq!(focus.id, low);
}

fn draft(title: &str, priority: Priority) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        details: String::new(),
        priority,
        raw_tags: String::new(),
        due_date: None,
    }
}

fn collection(active: usize, completed: usize) -> Vec<Task> {
    let mut tasks = Vec::new();
    for index in 0..active + completed {
        let status = if index < active {
            TaskStatus::Active
        } else {
            TaskStatus::Completed
        };
        tasks.push(Task {
            id: Uuid::new_v4(),
            title: format!("task {index}"),
            details: String::new(),
            priority: Priority::Medium,
            tags: Vec::new(),
            status,
            created_at: 1_000 + index as i64,
            due_date: None,
        });
    }
    tasks
}
