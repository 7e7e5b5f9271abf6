/// End-to-end flows through the tool layer, the way the serving surface
/// drives the two containers together
use chrono::NaiveDate;
use focusflow::tools::{self, CreateHabitParams, HabitIdParams, ToggleHabitParams};
use focusflow::*;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn containers() -> (HabitStore, ActivityLog) {
    (
        HabitStore::new(IdSource::starting_at(1), fixed_today()),
        ActivityLog::new(IdSource::starting_at(1)),
    )
}

fn create_params(name: &str, category: &str) -> CreateHabitParams {
    CreateHabitParams {
        name: name.to_string(),
        category: category.to_string(),
        goal: Some(format!("{} regularly", name)),
        icon: None,
        color: None,
        frequency: None,
        frequency_days: None,
        frequency_every_days: None,
        reminder_enabled: None,
        reminder_time: None,
        difficulty: None,
    }
}

#[cfg(test)]
mod habit_journeys {
    use super::*;

    /// Create a habit, complete it for a week, and watch the feed pick the
    /// milestone over the plain completion on day seven.
    #[test]
    fn test_week_long_completion_journey() {
        let (mut store, mut log) = containers();

        let created =
            tools::create_habit(&mut store, &mut log, create_params("Drink Water", "health"))
                .unwrap();
        let id = created.habit_id;

        for day in 1..=7u32 {
            let response = tools::toggle_habit(
                &mut store,
                &mut log,
                ToggleHabitParams { habit_id: id.0 },
            );
            assert!(response.success);
            assert_eq!(response.streak, Some(day));
            store.set_today(store.today().succ_opt().unwrap());
        }

        let habit = store.get_habit_by_id(id).unwrap();
        assert_eq!(habit.streak, 7);
        assert_eq!(habit.longest_streak, 7);
        assert_eq!(habit.total_completions, 7);
        assert_eq!(habit.completion_history.len(), 7);

        // Feed: newest first - milestone, six completions, creation
        let feed = log.activities();
        assert_eq!(feed.len(), 8);
        assert_eq!(feed[0].kind, ActivityKind::StreakMilestone);
        assert_eq!(feed[0].message, "🎉 Reached a streak milestone on \"Drink Water\"!");
        assert!(feed[1..7]
            .iter()
            .all(|a| a.kind == ActivityKind::HabitCompleted));
        assert_eq!(feed[7].kind, ActivityKind::HabitCreated);
        assert_eq!(log.unread_count(), 8);
    }

    /// A habit at streak six completes once more: the mediator logs a
    /// milestone, not a plain completion.
    #[test]
    fn test_streak_six_to_seven_is_distinguishable() {
        let (mut store, mut log) = containers();
        let id = tools::create_habit(&mut store, &mut log, create_params("Stretch", "fitness"))
            .unwrap()
            .habit_id;

        for _ in 0..6 {
            tools::toggle_habit(&mut store, &mut log, ToggleHabitParams { habit_id: id.0 });
            store.set_today(store.today().succ_opt().unwrap());
        }
        assert_eq!(store.get_habit_by_id(id).unwrap().streak, 6);

        let response =
            tools::toggle_habit(&mut store, &mut log, ToggleHabitParams { habit_id: id.0 });
        assert!(response.milestone);
        assert_eq!(log.activities()[0].kind, ActivityKind::StreakMilestone);
        assert_ne!(
            log.activities()[0].message,
            ActivityKind::HabitCompleted.default_message("Stretch")
        );
    }

    /// Archive, delete from the archive, then confirm restore finds nothing.
    #[test]
    fn test_archive_delete_restore_flow() {
        let (mut store, mut log) = containers();
        let id = tools::create_habit(&mut store, &mut log, create_params("Inbox Zero", "productivity"))
            .unwrap()
            .habit_id;
        tools::add_note(
            &mut store,
            tools::AddNoteParams {
                habit_id: id.0,
                content: "cleared 40 emails".to_string(),
                mood: Some("happy".to_string()),
            },
        );

        let archived = tools::archive_habit(&mut store, &mut log, HabitIdParams { habit_id: id.0 });
        assert!(archived.success);
        assert!(store.habits().is_empty());
        assert_eq!(store.archived_habits().len(), 1);

        let deleted = tools::delete_habit(&mut store, &mut log, HabitIdParams { habit_id: id.0 });
        assert!(deleted.success);
        assert!(store.archived_habits().is_empty());
        assert!(store.notes().is_empty());
        assert!(store.get_habit_by_id(id).is_none());

        let restored = tools::restore_habit(&mut store, &mut log, HabitIdParams { habit_id: id.0 });
        assert!(!restored.success);
        assert!(store.habits().is_empty());

        // Feed still remembers the habit by name
        assert_eq!(log.activities()[0].message, "Deleted \"Inbox Zero\" permanently");
    }

    /// The feed caps at 50 even under a long toggle session.
    #[test]
    fn test_feed_cap_under_sustained_toggling() {
        let (mut store, mut log) = containers();
        let id = tools::create_habit(&mut store, &mut log, create_params("Meditate", "mind"))
            .unwrap()
            .habit_id;

        for _ in 0..60 {
            tools::toggle_habit(&mut store, &mut log, ToggleHabitParams { habit_id: id.0 });
        }

        assert_eq!(log.activities().len(), MAX_ACTIVITIES);
        // The creation record fell off the end long ago
        assert!(log
            .activities()
            .iter()
            .all(|a| a.kind != ActivityKind::HabitCreated));
    }
}

#[cfg(test)]
mod seeded_session {
    use super::*;

    fn seeded_store() -> HabitStore {
        let data = seed::demo_data(7, fixed_today());
        HabitStore::from_parts(
            data.habits,
            data.archived,
            data.notes,
            IdSource::starting_at(data.next_id),
            fixed_today(),
        )
    }

    #[test]
    fn test_listing_matches_seeded_collections() {
        let store = seeded_store();

        let active = tools::list_habits(&store, tools::ListHabitsParams::default());
        assert_eq!(active.habits.len(), 12);
        assert_eq!(active.total, 12);

        let archived = tools::list_habits(
            &store,
            tools::ListHabitsParams { archived: Some(true), ..Default::default() },
        );
        assert_eq!(archived.habits.len(), 2);
    }

    #[test]
    fn test_status_reads_seeded_notes_and_history() {
        let store = seeded_store();
        let reading = store
            .habits()
            .iter()
            .find(|h| h.name == "Read 20 Pages")
            .unwrap();

        let status = tools::habit_status(
            &store,
            tools::HabitStatusParams { habit_id: reading.id.0, recent_days: Some(30) },
        );
        let detail = status.habit.unwrap();
        assert_eq!(detail.note_count, 1);
        assert!(!detail.recent_history.is_empty());
        assert!(detail.summary.completion_rate > 0);
    }

    #[test]
    fn test_insights_over_seeded_state() {
        let store = seeded_store();
        let response = tools::insights(&store, tools::InsightsParams::default());

        assert_eq!(response.days.len(), 7);
        assert!(response.today.total == 12);
        assert!(response.today.completed > 0);
        assert!(response.aggregate_rate > 0);
        // "Learn Language" holds both streak records in the demo data
        assert_eq!(response.current_streak_leader.as_deref(), Some("Learn Language"));
        assert_eq!(response.longest_streak_leader.as_deref(), Some("Learn Language"));

        let by_category: usize = response.categories.iter().map(|c| c.count).sum();
        assert_eq!(by_category, 12);
    }

    #[test]
    fn test_toggling_seeded_habit_updates_live_counters() {
        let mut store = seeded_store();
        let mut log = ActivityLog::new(IdSource::starting_at(1));

        // "Meditate 10 min" is seeded incomplete with streak 15
        let meditate = store
            .habits()
            .iter()
            .find(|h| h.name == "Meditate 10 min")
            .unwrap();
        let id = meditate.id;
        let (streak_before, total_before) = (meditate.streak, meditate.total_completions);

        let response =
            tools::toggle_habit(&mut store, &mut log, ToggleHabitParams { habit_id: id.0 });
        assert_eq!(response.completed, Some(true));
        assert_eq!(response.streak, Some(streak_before + 1));

        let habit = store.get_habit_by_id(id).unwrap();
        assert_eq!(habit.total_completions, total_before + 1);
        assert_eq!(log.activities()[0].kind, ActivityKind::HabitCompleted);
    }
}
