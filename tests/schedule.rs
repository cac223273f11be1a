#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use duely::libs::schedule::{bucketed, categorize, compare, describe_deadline, Bucket, Urgency};
    use duely::libs::task::{Priority, Task};
    use std::cmp::Ordering;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn task_due(offset_days: i64) -> Task {
        task(&(today() + Duration::days(offset_days)).format("%Y-%m-%d").to_string(), Priority::Medium, 0)
    }

    fn task(due: &str, priority: Priority, created_at: i64) -> Task {
        Task {
            id: format!("{}-{}", due, created_at),
            title: "Task".to_string(),
            due_date: due.to_string(),
            priority,
            completed: false,
            created_at,
            activated_at: Some(created_at),
            completed_at: None,
            time_spent_ms: 0,
        }
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(categorize(&task_due(-1), today()), Bucket::Overdue);
        assert_eq!(categorize(&task_due(0), today()), Bucket::Today);
        assert_eq!(categorize(&task_due(1), today()), Bucket::Soon);
        assert_eq!(categorize(&task_due(7), today()), Bucket::Soon);
        assert_eq!(categorize(&task_due(8), today()), Bucket::Upcoming);
        assert_eq!(categorize(&task_due(365), today()), Bucket::Upcoming);
    }

    #[test]
    fn test_completed_wins_over_any_due_date() {
        for offset in [-30, -1, 0, 3, 30] {
            let mut task = task_due(offset);
            task.completed = true;
            task.activated_at = None;
            task.completed_at = Some(1_000);
            assert_eq!(categorize(&task, today()), Bucket::Completed);
        }
    }

    #[test]
    fn test_invalid_due_date_fails_open() {
        // Bad data never blocks categorization.
        for due in ["", "not-a-date", "2025-13-01", "2025-02-31", "2025/06/10"] {
            let task = task(due, Priority::Medium, 0);
            assert_eq!(categorize(&task, today()), Bucket::Upcoming);
            let deadline = describe_deadline(&task, today());
            assert_eq!(deadline.text, "Due date invalid");
            assert_eq!(deadline.urgency, Urgency::Safe);
        }
    }

    #[test]
    fn test_deadline_descriptors() {
        let cases = [
            (-3, "Overdue by 3 days", Urgency::Overdue),
            (-1, "Overdue by 1 day", Urgency::Overdue),
            (0, "Due today", Urgency::Warning),
            (1, "Due tomorrow", Urgency::Warning),
            (2, "Due in 2 days", Urgency::Warning),
            (3, "Due in 3 days", Urgency::Warning),
            (4, "Due in 4 days", Urgency::Safe),
            (14, "Due in 14 days", Urgency::Safe),
        ];
        for (offset, text, urgency) in cases {
            let deadline = describe_deadline(&task_due(offset), today());
            assert_eq!(deadline.text, text, "offset {}", offset);
            assert_eq!(deadline.urgency, urgency, "offset {}", offset);
        }
    }

    #[test]
    fn test_completed_descriptor() {
        let mut task = task_due(0);
        task.completed = true;
        let deadline = describe_deadline(&task, today());
        assert_eq!(deadline.text, "Completed");
        assert_eq!(deadline.urgency, Urgency::Done);
    }

    #[test]
    fn test_ordering_priority_then_due_date() {
        let high_later = task("2025-06-15", Priority::High, 1);
        let high_sooner = task("2025-06-12", Priority::High, 2);
        let medium_soonest = task("2025-06-11", Priority::Medium, 3);

        let mut tasks = vec![high_later.clone(), high_sooner.clone(), medium_soonest.clone()];
        tasks.sort_by(|a, b| compare(a, b));
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec![high_sooner.id.as_str(), high_later.id.as_str(), medium_soonest.id.as_str()]);
    }

    #[test]
    fn test_ordering_valid_due_date_before_none() {
        let dated = task("2025-06-20", Priority::Low, 5);
        let dateless = task("garbage", Priority::Low, 1);
        assert_eq!(compare(&dated, &dateless), Ordering::Less);
        assert_eq!(compare(&dateless, &dated), Ordering::Greater);
    }

    #[test]
    fn test_ordering_created_at_tie_break() {
        let older = task("2025-06-20", Priority::Low, 100);
        let newer = task("2025-06-20", Priority::Low, 200);
        assert_eq!(compare(&older, &newer), Ordering::Less);

        // Two dateless tasks are also tied until creation order decides.
        let dateless_older = task("", Priority::Low, 100);
        let dateless_newer = task("", Priority::Low, 200);
        assert_eq!(compare(&dateless_older, &dateless_newer), Ordering::Less);
    }

    #[test]
    fn test_bucketed_groups_and_sorts() {
        let overdue = task("2025-06-09", Priority::Low, 1);
        let due_today_high = task("2025-06-10", Priority::High, 2);
        let due_today_low = task("2025-06-10", Priority::Low, 3);
        let mut done = task("2025-06-10", Priority::Medium, 4);
        done.completed = true;

        let tasks = vec![due_today_low.clone(), overdue.clone(), done.clone(), due_today_high.clone()];
        let groups = bucketed(&tasks, today());

        assert_eq!(groups.len(), Bucket::ALL.len());
        assert_eq!(groups[0].0, Bucket::Overdue);
        assert_eq!(groups[0].1.len(), 1);
        assert_eq!(groups[1].0, Bucket::Today);
        // Within a bucket: high priority first.
        let today_ids: Vec<&str> = groups[1].1.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(today_ids, vec![due_today_high.id.as_str(), due_today_low.id.as_str()]);
        assert_eq!(groups[4].0, Bucket::Completed);
        assert_eq!(groups[4].1.len(), 1);
    }

    #[test]
    fn test_bucket_advances_with_the_calendar() {
        // Same stored task, different query day: the bucket moves without
        // any field mutation.
        let task = task_due(1);
        assert_eq!(categorize(&task, today()), Bucket::Soon);
        assert_eq!(categorize(&task, today() + Duration::days(1)), Bucket::Today);
        assert_eq!(categorize(&task, today() + Duration::days(2)), Bucket::Overdue);
    }
}
