#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use taskbox::db::db::Db;
    use taskbox::db::store::SqliteStore;
    use taskbox::libs::registry::TaskRegistry;
    use taskbox::libs::repository::TaskRepository;
    use taskbox::libs::task::{Priority, Task};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StoreTestContext {
        temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl StoreTestContext {
        fn store(&self) -> SqliteStore {
            SqliteStore::new(&self.db_path)
        }

        fn count(&self, sql: &str) -> i64 {
            let db = Db::open(&self.db_path).unwrap();
            db.conn.query_row(sql, [], |row| row.get(0)).unwrap()
        }

        /// Inserts a task row into section "Work" bypassing validation.
        /// `priority` and `due_date` are SQL literals.
        fn insert_raw(&self, name: &str, priority: &str, due_date: &str) {
            let db = Db::open(&self.db_path).unwrap();
            let sql = format!(
                "INSERT INTO tasks (name, priority, due_date, section_id) SELECT ?1, {}, {}, id FROM sections WHERE name = 'Work'",
                priority, due_date
            );
            assert_eq!(db.conn.execute(&sql, [name]).unwrap(), 1);
        }
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("taskbox.db");
            StoreTestContext {
                temp_dir,
                db_path,
            }
        }
    }

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_and_load_sections(ctx: &mut StoreTestContext) {
        let store = ctx.store();

        assert!(store.save_section("Work").is_some());
        assert!(store.save_section("Home").is_some());

        let names: Vec<String> = store.load_all_sections().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Work", "Home"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_duplicate_section_is_rejected(ctx: &mut StoreTestContext) {
        let store = ctx.store();

        assert!(store.save_section("Work").is_some());
        assert!(store.save_section("Work").is_none());
        assert_eq!(ctx.count("SELECT COUNT(*) FROM sections"), 1);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_task_needs_existing_section(ctx: &mut StoreTestContext) {
        let store = ctx.store();

        assert!(store.save_task(&Task::new("Report", Priority::High, due()), "Missing").is_none());
        assert_eq!(ctx.count("SELECT COUNT(*) FROM tasks"), 0);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_task_round_trip(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save_section("Work").unwrap();

        let id = store.save_task(&Task::new("Report", Priority::High, due()), "Work").unwrap();
        let tasks = store.load_tasks_for_section("Work").unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, Some(id));
        assert_eq!(tasks[0].name, "Report");
        assert_eq!(tasks[0].priority, Priority::High);
        assert_eq!(tasks[0].due_date, due());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_deleting_section_cascades_to_tasks(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save_section("Work").unwrap();
        store.save_section("Home").unwrap();
        store.save_task(&Task::new("Report", Priority::High, due()), "Work").unwrap();
        store.save_task(&Task::new("Laundry", Priority::Low, due()), "Home").unwrap();

        assert!(store.delete_section("Work"));

        assert_eq!(ctx.count("SELECT COUNT(*) FROM tasks"), 1);
        store.save_section("Work").unwrap();
        assert!(store.load_tasks_for_section("Work").unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_deleting_missing_rows_reports_failure(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save_section("Work").unwrap();

        assert!(!store.delete_section("Missing"));
        assert!(!store.delete_task("Ghost", "Work"));
        assert!(!store.delete_task("Ghost", "Missing"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_delete_task_removes_only_oldest_same_named_row(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save_section("Work").unwrap();
        store.save_task(&Task::new("Sync", Priority::Low, due()), "Work").unwrap();
        let newer = store.save_task(&Task::new("Sync", Priority::High, due()), "Work").unwrap();

        assert!(store.delete_task("Sync", "Work"));

        let tasks = store.load_tasks_for_section("Work").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, Some(newer));
        assert_eq!(tasks[0].priority, Priority::High);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_malformed_rows_are_skipped(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save_section("Work").unwrap();
        store.save_task(&Task::new("Report", Priority::High, due()), "Work").unwrap();

        let db = Db::open(&ctx.db_path).unwrap();
        db.conn
            .execute(
                "INSERT INTO tasks (name, priority, due_date, section_id) SELECT 'Bad', 'URGENT', '2024-05-01', id FROM sections WHERE name = 'Work'",
                [],
            )
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO tasks (name, priority, due_date, section_id) SELECT 'Worse', 'LOW', 'someday', id FROM sections WHERE name = 'Work'",
                [],
            )
            .unwrap();
        drop(db);

        let names: Vec<String> = store.load_tasks_for_section("Work").unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Report"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_numeric_due_date_skips_only_that_row(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save_section("Work").unwrap();
        store.save_task(&Task::new("Good1", Priority::High, due()), "Work").unwrap();
        ctx.insert_raw("Numeric", "'LOW'", "'20240501'");
        ctx.insert_raw("Real", "'LOW'", "2024.5");
        store.save_task(&Task::new("Good2", Priority::Low, due()), "Work").unwrap();

        let names: Vec<String> = store.load_tasks_for_section("Work").unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Good1", "Good2"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_stored_priority_must_match_exactly(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save_section("Work").unwrap();
        ctx.insert_raw("Padded", "' HIGH '", "'2024-05-01'");
        ctx.insert_raw("Lowercase", "'high'", "'2024-05-01'");
        ctx.insert_raw("Numeric", "3", "'2024-05-01'");
        ctx.insert_raw("Exact", "'HIGH'", "'2024-05-01'");

        let tasks = store.load_tasks_for_section("Work").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Exact");
        assert_eq!(tasks[0].priority, Priority::High);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_registry_loads_around_malformed_rows(ctx: &mut StoreTestContext) {
        let store = ctx.store();
        store.save_section("Work").unwrap();
        store.save_task(&Task::new("Report", Priority::High, due()), "Work").unwrap();
        ctx.insert_raw("Broken", "'LOW'", "'20240501'");

        let registry = TaskRegistry::load(ctx.store());

        let work: Vec<String> = registry.list_tasks("Work").into_iter().map(|t| t.name).collect();
        assert_eq!(work, vec!["Report"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_unopenable_database_fails_softly(ctx: &mut StoreTestContext) {
        let store = SqliteStore::new(ctx.temp_dir.path().join("missing").join("dir").join("taskbox.db"));

        assert!(store.load_all_sections().is_none());
        assert!(store.save_section("Work").is_none());
        assert!(!store.delete_section("Work"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_registry_state_survives_reload(ctx: &mut StoreTestContext) {
        {
            let mut registry = TaskRegistry::load(ctx.store());
            registry.add_task("Work", Task::new("Report", Priority::High, due()));
            registry.add_task("Work", Task::new("Email", Priority::Low, due()));
            registry.add_task("Home", Task::new("Laundry", Priority::Moderate, due()));
            registry.add_section("Someday");

            let email = registry.list_tasks("Work")[1].clone();
            assert!(registry.remove_task("Work", &email));
            assert!(registry.remove_section("Home"));
        }

        let registry = TaskRegistry::load(ctx.store());

        assert_eq!(registry.list_section_names(), vec!["Work", "Someday"]);
        let work: Vec<String> = registry.list_tasks("Work").into_iter().map(|t| t.name).collect();
        assert_eq!(work, vec!["Report"]);
        assert_eq!(registry.task_count(), 1);
    }
}
