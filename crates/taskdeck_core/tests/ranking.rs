use taskdeck_core::{focus_task, priority_rank, sort_for_list, Priority, Task, TaskStatus};
use uuid::Uuid;

#[test]
fn priority_rank_puts_high_first() {
    assert!(priority_rank(Priority::High) < priority_rank(Priority::Medium));
    assert!(priority_rank(Priority::Medium) < priority_rank(Priority::Low));
}

#[test]
fn list_orders_by_priority_then_most_recent() {
    let a = task("01", Priority::Low, 1_000);
    let b = task("02", Priority::High, 2_000);
    let c = task("03", Priority::High, 3_000);

    let sorted = sort_for_list(vec![a.clone(), b.clone(), c.clone()]);
    let ids: Vec<_> = sorted.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![c.id, b.id, a.id]);
}

#[test]
fn list_ordering_ignores_due_dates() {
    let dated = task_due("01", Priority::High, 1_000, Some(5_000));
    let recent = task("02", Priority::High, 2_000);

    let sorted = sort_for_list(vec![dated.clone(), recent.clone()]);
    assert_eq!(sorted[0].id, recent.id);
    assert_eq!(sorted[1].id, dated.id);
}

#[test]
fn focus_prefers_deadline_over_recency_at_equal_priority() {
    let x = task_due("01", Priority::High, 1_000, Some(5 * 86_400_000));
    let y = task("02", Priority::High, 2_000);

    let tasks = [x.clone(), y];
    let focus = focus_task(&tasks).unwrap();
    assert_eq!(focus.id, x.id);
}

#[test]
fn focus_picks_earlier_deadline() {
    let p = task_due("01", Priority::Medium, 1_000, Some(3 * 86_400_000));
    let q = task_due("02", Priority::Medium, 1_000, Some(86_400_000));

    let tasks = [p, q.clone()];
    let focus = focus_task(&tasks).unwrap();
    assert_eq!(focus.id, q.id);
}

#[test]
fn focus_priority_outweighs_any_deadline() {
    let dated_low = task_due("01", Priority::Low, 1_000, Some(1));
    let open_high = task("02", Priority::High, 2_000);

    let tasks = [dated_low, open_high.clone()];
    let focus = focus_task(&tasks).unwrap();
    assert_eq!(focus.id, open_high.id);
}

#[test]
fn focus_without_deadlines_picks_most_recent() {
    let older = task("01", Priority::Medium, 1_000);
    let newer = task("02", Priority::Medium, 2_000);

    let tasks = [older, newer.clone()];
    let focus = focus_task(&tasks).unwrap();
    assert_eq!(focus.id, newer.id);
}

#[test]
fn focus_skips_completed_tasks() {
    let mut done_high = task("01", Priority::High, 2_000);
    done_high.status = TaskStatus::Completed;
    let open_low = task("02", Priority::Low, 1_000);

    let tasks = [done_high, open_low.clone()];
    let focus = focus_task(&tasks).unwrap();
    assert_eq!(focus.id, open_low.id);
}

#[test]
fn focus_is_absent_when_nothing_is_active() {
    let mut done = task("01", Priority::High, 1_000);
    done.status = TaskStatus::Completed;

    assert!(focus_task(&[done]).is_none());
    assert!(focus_task(&[]).is_none());
}

fn task(id_suffix: &str, priority: Priority, created_at: i64) -> Task {
    task_due(id_suffix, priority, created_at, None)
}

fn task_due(id_suffix: &str, priority: Priority, created_at: i64, due_date: Option<i64>) -> Task {
    let id = format!("00000000-0000-4000-8000-0000000000{id_suffix}");
    Task {
        id: Uuid::parse_str(&id).unwrap(),
        title: format!("task {id_suffix}"),
        details: String::new(),
        priority,
        tags: Vec::new(),
        status: TaskStatus::Active,
        created_at,
        due_date,
    }
}
