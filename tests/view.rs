#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use duely::libs::task::{Priority, Task};
    use duely::libs::view::{short_id, View};

    fn task_with_id(id: &str) -> Task {
        Task {
            id: id.to_string(),
            title: "Task".to_string(),
            due_date: "2025-06-10".to_string(),
            priority: Priority::Medium,
            completed: false,
            created_at: 1_000,
            activated_at: Some(1_000),
            completed_at: None,
            time_spent_ms: 0,
        }
    }

    #[test]
    fn test_short_id_truncates_generated_uuid() {
        assert_eq!(short_id("e4c7a1b2-0000-4000-8000-000000000001"), "e4c7a1b2");
    }

    #[test]
    fn test_short_id_keeps_short_ids_whole() {
        assert_eq!(short_id("id-1"), "id-1");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_short_id_truncates_on_char_boundaries() {
        // A store file is free to carry non-ASCII ids; truncation must
        // fall on character boundaries, never inside a code point.
        assert_eq!(short_id("日本語タスク"), "日本語タスク");
        assert_eq!(short_id("締め切りタスク一覧表示"), "締め切りタスク一");
    }

    #[test]
    fn test_render_survives_foreign_ids() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let tasks = vec![task_with_id("日本語タスク"), task_with_id("id-2")];
        assert!(View::buckets(&tasks, today, 2_000).is_ok());
    }
}
