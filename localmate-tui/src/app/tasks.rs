use localmate_api::domain::Task;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Today's calendar date in the user's local time zone.
pub fn local_today() -> Date {
    OffsetDateTime::now_utc()
        .to_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
        .date()
}

/// Calendar-date equality; time of day is ignored.
pub fn is_due_today(due: PrimitiveDateTime, today: Date) -> bool {
    due.date() == today
}

/// Date-only comparison; a task due earlier today is not overdue.
pub fn is_overdue(due: PrimitiveDateTime, today: Date) -> bool {
    due.date() < today
}

/// The two render-time task groupings. Recomputed from a fresh fetch on every
/// reload; never persisted.
#[derive(Debug, Default, Clone)]
pub struct Buckets {
    pub today: Vec<Task>,
    pub pending: Vec<Task>,
}

/// Partition tasks per the display rules, evaluated in order per task:
/// incomplete and due today or earlier goes to "today"; any other incomplete
/// task goes to "pending"; a completed task is shown under "today" only on
/// its due date and is dropped otherwise.
pub fn partition(tasks: Vec<Task>, today: Date) -> Buckets {
    let mut buckets = Buckets::default();

    for task in tasks {
        if !task.is_completed && (is_due_today(task.due_date, today) || is_overdue(task.due_date, today)) {
            buckets.today.push(task);
        } else if !task.is_completed {
            buckets.pending.push(task);
        } else if is_due_today(task.due_date, today) {
            buckets.today.push(task);
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn task(id: i64, due: PrimitiveDateTime, is_completed: bool) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            description: None,
            due_date: due,
            is_completed,
        }
    }

    const TODAY: Date = date!(2024 - 06 - 15);

    #[test]
    fn overdue_incomplete_lands_in_today() {
        // Past due date and incomplete: the overdue rule pulls it into today.
        let buckets = partition(vec![task(1, datetime!(2024-01-01 09:00:00), false)], TODAY);
        assert_eq!(buckets.today.len(), 1);
        assert!(buckets.pending.is_empty());
    }

    #[test]
    fn tomorrow_incomplete_lands_in_pending() {
        let buckets = partition(vec![task(2, datetime!(2024-06-16 09:00:00), false)], TODAY);
        assert!(buckets.today.is_empty());
        assert_eq!(buckets.pending.len(), 1);
    }

    #[test]
    fn completed_today_stays_visible_in_today() {
        let buckets = partition(vec![task(3, datetime!(2024-06-15 22:00:00), true)], TODAY);
        assert_eq!(buckets.today.len(), 1);
        assert!(buckets.today[0].is_completed);
    }

    #[test]
    fn completed_not_due_today_is_dropped() {
        let tasks = vec![
            task(4, datetime!(2024-06-14 09:00:00), true),
            task(5, datetime!(2024-06-20 09:00:00), true),
        ];
        let buckets = partition(tasks, TODAY);
        assert!(buckets.today.is_empty());
        assert!(buckets.pending.is_empty());
    }

    #[test]
    fn every_task_appears_in_at_most_one_bucket() {
        let tasks: Vec<Task> = (0..6)
            .map(|i| {
                task(
                    i,
                    datetime!(2024-06-13 12:00:00) + time::Duration::days(i),
                    i % 2 == 0,
                )
            })
            .collect();
        let buckets = partition(tasks, TODAY);

        let mut seen = std::collections::HashSet::new();
        for t in buckets.today.iter().chain(buckets.pending.iter()) {
            assert!(seen.insert(t.id), "task {} appears twice", t.id);
        }
    }

    #[test]
    fn due_later_today_is_not_overdue() {
        let due = datetime!(2024-06-15 23:59:00);
        assert!(is_due_today(due, TODAY));
        assert!(!is_overdue(due, TODAY));
    }
}
