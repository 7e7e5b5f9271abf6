/// Unit tests for the state containers and their invariants
use chrono::NaiveDate;
use focusflow::*;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn draft(name: &str, category: Category) -> HabitDraft {
    HabitDraft::new(
        name.to_string(),
        category,
        format!("{} every day", name),
        "Target".to_string(),
        category.accent_hex().to_string(),
        Frequency::Daily,
        false,
        None,
        Difficulty::Medium,
    )
    .expect("valid draft")
}

#[cfg(test)]
mod habit_store_properties {
    use super::*;

    /// The "Drink Water" walkthrough: create, complete, then un-complete on
    /// the same day.
    #[test]
    fn test_create_toggle_untoggle_scenario() {
        let mut store = HabitStore::new(IdSource::starting_at(1), fixed_today());
        let before = store.habits().len();

        let id = store.add_habit(draft("Drink Water", Category::Health)).id;
        assert_eq!(store.habits().len(), before + 1);
        let habit = store.get_habit_by_id(id).unwrap();
        assert_eq!(habit.streak, 0);
        assert!(!habit.completed);

        store.toggle_habit(id).unwrap();
        let habit = store.get_habit_by_id(id).unwrap();
        assert!(habit.completed);
        assert_eq!(habit.streak, 1);
        assert_eq!(habit.total_completions, 1);
        assert_eq!(habit.completion_history.len(), 1);
        assert_eq!(habit.completion_history[0].date, fixed_today());
        assert!(habit.completion_history[0].completed);

        store.toggle_habit(id).unwrap();
        let habit = store.get_habit_by_id(id).unwrap();
        assert!(!habit.completed);
        assert_eq!(habit.streak, 0);
        assert_eq!(habit.total_completions, 1, "lifetime counter is not retracted");
        assert_eq!(habit.completion_history.len(), 1, "same day updates the entry");
        assert!(!habit.completion_history[0].completed);
    }

    /// longest_streak >= streak after arbitrary toggle/reset interleavings
    #[test]
    fn test_longest_streak_invariant_across_operations() {
        let mut store = HabitStore::new(IdSource::starting_at(1), fixed_today());
        let id = store.add_habit(draft("Meditate", Category::Mind)).id;

        for day in 0..20 {
            store.toggle_habit(id).unwrap();
            if day % 5 == 4 {
                store.reset_streak(id);
            }
            if day % 3 == 2 {
                // Un-toggle and re-toggle within the same day
                store.toggle_habit(id).unwrap();
                store.toggle_habit(id).unwrap();
            }
            let habit = store.get_habit_by_id(id).unwrap();
            assert!(
                habit.longest_streak >= habit.streak,
                "day {}: longest {} < streak {}",
                day,
                habit.longest_streak,
                habit.streak
            );
            store.set_today(store.today().succ_opt().unwrap());
        }
    }

    /// completion_history never holds two entries for one date
    #[test]
    fn test_history_has_one_entry_per_date() {
        let mut store = HabitStore::new(IdSource::starting_at(1), fixed_today());
        let id = store.add_habit(draft("Journal", Category::Mind)).id;

        for _ in 0..4 {
            store.toggle_habit(id).unwrap();
        }
        store.set_today(store.today().succ_opt().unwrap());
        for _ in 0..3 {
            store.toggle_habit(id).unwrap();
        }

        let habit = store.get_habit_by_id(id).unwrap();
        let mut dates: Vec<NaiveDate> =
            habit.completion_history.iter().map(|e| e.date).collect();
        dates.sort();
        let len_before = dates.len();
        dates.dedup();
        assert_eq!(dates.len(), len_before);
        assert_eq!(habit.completion_history.len(), 2);
    }

    #[test]
    fn test_streak_milestone_at_multiples_of_seven() {
        let mut store = HabitStore::new(IdSource::starting_at(1), fixed_today());
        let id = store.add_habit(draft("Code", Category::Learning)).id;

        let mut milestones = Vec::new();
        for _ in 0..15 {
            let outcome = store.toggle_habit(id).unwrap();
            if outcome.milestone {
                milestones.push(outcome.streak);
            }
            store.set_today(store.today().succ_opt().unwrap());
        }
        assert_eq!(milestones, vec![7, 14]);
    }

    #[test]
    fn test_delete_is_terminal_from_both_lists() {
        let mut store = HabitStore::new(IdSource::starting_at(1), fixed_today());
        let active = store.add_habit(draft("Active", Category::Health)).id;
        let archived = store.add_habit(draft("Archived", Category::Social)).id;
        store.add_note(active, "keep hydrated".to_string(), None);
        store.archive_habit(archived);

        assert!(store.delete_habit(active).is_some());
        assert!(store.delete_habit(archived).is_some());

        assert!(store.get_habit_by_id(active).is_none());
        assert!(store.get_habit_by_id(archived).is_none());
        assert!(store.notes().is_empty());
        assert!(!store.restore_habit(archived));
    }
}

#[cfg(test)]
mod activity_log_properties {
    use super::*;

    #[test]
    fn test_cap_evicts_oldest_after_fifty_one_inserts() {
        let mut log = ActivityLog::new(IdSource::starting_at(1));
        for i in 1..=51u32 {
            log.add(ActivityKind::HabitCompleted, &format!("habit-{}", i), None);
        }

        assert_eq!(log.activities().len(), MAX_ACTIVITIES);
        assert_eq!(log.activities()[0].habit_name, "habit-51");
        assert_eq!(log.activities()[49].habit_name, "habit-2");
        assert!(log.activities().iter().all(|a| a.habit_name != "habit-1"));
    }

    #[test]
    fn test_unread_count_matches_read_flags() {
        let mut log = ActivityLog::new(IdSource::starting_at(1));
        log.add(ActivityKind::HabitCreated, "A", None);
        log.add(ActivityKind::HabitCompleted, "B", None);
        log.add(ActivityKind::HabitArchived, "C", None);

        let unread = log.activities().iter().filter(|a| !a.read).count();
        assert_eq!(log.unread_count(), unread);

        let id = log.activities()[1].id;
        log.mark_as_read(id);
        assert_eq!(log.unread_count(), 2);

        log.mark_all_as_read();
        assert_eq!(log.unread_count(), 0);
    }

    #[test]
    fn test_records_survive_habit_deletion() {
        let mut store = HabitStore::new(IdSource::starting_at(1), fixed_today());
        let mut log = ActivityLog::new(IdSource::starting_at(1));

        let id = store.add_habit(draft("Ephemeral", Category::Health)).id;
        log.add(ActivityKind::HabitCreated, "Ephemeral", None);
        store.delete_habit(id);
        log.add(ActivityKind::HabitDeleted, "Ephemeral", None);

        assert_eq!(log.activities().len(), 2);
        assert_eq!(log.activities()[1].habit_name, "Ephemeral");
    }
}

#[cfg(test)]
mod server_assembly {
    use super::*;

    #[test]
    fn test_server_seeds_demo_state() {
        let dir = tempfile::tempdir().unwrap();
        let server = FocusFlowServer::new(dir.path().to_path_buf(), 7);

        assert_eq!(server.store().habits().len(), 12);
        assert_eq!(server.store().archived_habits().len(), 2);
        assert!(!server.store().notes().is_empty());
        // The feed starts empty; only live operations populate it
        assert!(server.activity().activities().is_empty());
        assert!(!server.gate().is_authenticated());
    }

    #[test]
    fn test_live_ids_start_above_seeded_ones() {
        let dir = tempfile::tempdir().unwrap();
        let mut server = FocusFlowServer::new(dir.path().to_path_buf(), 7);

        let max_seeded = server
            .store()
            .habits()
            .iter()
            .chain(server.store().archived_habits().iter())
            .map(|h| h.id.0)
            .max()
            .unwrap();

        let draft = HabitDraft::new(
            "Fresh".to_string(),
            Category::Social,
            String::new(),
            "Phone".to_string(),
            "#ec4899".to_string(),
            Frequency::Daily,
            false,
            None,
            Difficulty::Easy,
        )
        .unwrap();
        let new_id = server.store_mut().add_habit(draft).id;
        assert!(new_id.0 > max_seeded);
    }
}
