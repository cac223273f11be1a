#[cfg(test)]
mod tests {
    use duely::db::tasks::TaskStore;
    use duely::libs::lifecycle::{create, elapsed};
    use duely::libs::schedule::{categorize, Bucket};
    use duely::libs::task::{Priority, Task, TaskInput};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl StoreTestContext {
        fn store_path(&self) -> PathBuf {
            self.temp_dir.path().join("tasks.json")
        }
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            StoreTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn sample_task(now: i64) -> Task {
        let input = TaskInput::validated("Ship release", "2025-06-10", Priority::High, false).unwrap();
        create(input, "e4c7a1b2-0000-4000-8000-000000000001".to_string(), now)
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_file_loads_empty(ctx: &mut StoreTestContext) {
        let store = TaskStore::with_path(ctx.store_path());
        assert!(store.load().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_round_trip_preserves_categorization_and_elapsed(ctx: &mut StoreTestContext) {
        let now = 1_000_000;
        let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let original = sample_task(now);

        let store = TaskStore::with_path(ctx.store_path());
        store.save(&[original.clone()]).unwrap();
        let restored = store.load_normalized(now);
        assert_eq!(restored.len(), 1);
        let restored = &restored[0];

        assert_eq!(restored.id, original.id);
        assert_eq!(restored.due_date, original.due_date);
        assert_eq!(categorize(restored, today), categorize(&original, today));
        assert_eq!(categorize(restored, today), Bucket::Today);
        assert_eq!(elapsed(restored, now + 5_000), elapsed(&original, now + 5_000));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_serialized_field_names(ctx: &mut StoreTestContext) {
        let store = TaskStore::with_path(ctx.store_path());
        store.save(&[sample_task(42)]).unwrap();

        let raw = fs::read_to_string(ctx.store_path()).unwrap();
        for field in ["\"id\"", "\"title\"", "\"dueDate\"", "\"priority\"", "\"completed\"", "\"createdAt\"", "\"activatedAt\"", "\"completedAt\"", "\"timeSpentMs\""] {
            assert!(raw.contains(field), "missing field {} in {}", field, raw);
        }
        // The due date string round-trips verbatim.
        assert!(raw.contains("\"2025-06-10\""));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupt_file_degrades_to_empty(ctx: &mut StoreTestContext) {
        fs::write(ctx.store_path(), "{not json").unwrap();

        let store = TaskStore::with_path(ctx.store_path());
        assert!(store.load().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_old_schema_is_normalized_on_load(ctx: &mut StoreTestContext) {
        // A record written before the metrics fields existed: no
        // timeSpentMs, no activatedAt/completedAt, no priority.
        fs::write(
            ctx.store_path(),
            r#"[{"id":"legacy-1","title":"Old task","dueDate":"2025-06-12","completed":false,"createdAt":500}]"#,
        )
        .unwrap();

        let store = TaskStore::with_path(ctx.store_path());
        let tasks = store.load_normalized(9_000);
        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.time_spent_ms, 0);
        assert_eq!(task.priority, Priority::Medium);
        // Active task without a session start is repaired to "now".
        assert_eq!(task.activated_at, Some(9_000));
        assert_eq!(task.completed_at, None);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_preserves_insertion_order(ctx: &mut StoreTestContext) {
        let store = TaskStore::with_path(ctx.store_path());
        let mut tasks = Vec::new();
        for i in 0..5 {
            let input = TaskInput::validated(&format!("Task {}", i), "2025-06-10", Priority::Low, false).unwrap();
            tasks.push(create(input, format!("id-{}", i), i));
        }
        store.save(&tasks).unwrap();

        let restored = store.load();
        let ids: Vec<&str> = restored.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["id-0", "id-1", "id-2", "id-3", "id-4"]);
    }
}
