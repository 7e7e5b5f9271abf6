/// ActivityLog: bounded, newest-first audit trail of user-visible events
///
/// The log is independent of the habit store; records carry a denormalized
/// habit name and survive habit deletion. Insertion prepends and evicts
/// beyond the cap.

use chrono::Utc;

use crate::domain::{Activity, ActivityId, ActivityKind, IdSource};

/// Most-recent entries retained
pub const MAX_ACTIVITIES: usize = 50;

pub struct ActivityLog {
    activities: Vec<Activity>,
    ids: IdSource,
}

impl ActivityLog {
    pub fn new(ids: IdSource) -> Self {
        Self { activities: Vec::new(), ids }
    }

    /// All entries, newest first
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Append an event record
    ///
    /// The message falls back to the kind's default template unless the
    /// caller supplies one. The oldest entry is evicted past the cap.
    pub fn add(
        &mut self,
        kind: ActivityKind,
        habit_name: &str,
        custom_message: Option<String>,
    ) -> &Activity {
        let activity = Activity {
            id: ActivityId(self.ids.next_id()),
            kind,
            habit_name: habit_name.to_string(),
            message: custom_message.unwrap_or_else(|| kind.default_message(habit_name)),
            timestamp: Utc::now(),
            read: false,
        };
        self.activities.insert(0, activity);
        self.activities.truncate(MAX_ACTIVITIES);
        &self.activities[0]
    }

    /// Mark one entry as read; no-op if the ID matches nothing
    pub fn mark_as_read(&mut self, id: ActivityId) -> bool {
        match self.activities.iter_mut().find(|a| a.id == id) {
            Some(activity) => {
                activity.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every entry as read
    pub fn mark_all_as_read(&mut self) {
        for activity in &mut self.activities {
            activity.read = true;
        }
    }

    /// Empty the log entirely; irreversible
    pub fn clear(&mut self) {
        self.activities.clear();
    }

    /// Count of unread entries, recomputed on every call
    pub fn unread_count(&self) -> usize {
        self.activities.iter().filter(|a| !a.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> ActivityLog {
        ActivityLog::new(IdSource::starting_at(1))
    }

    #[test]
    fn test_add_prepends_with_default_message() {
        let mut log = log();
        log.add(ActivityKind::HabitCreated, "Drink Water", None);
        log.add(ActivityKind::HabitCompleted, "Drink Water", None);

        let entries = log.activities();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, ActivityKind::HabitCompleted);
        assert_eq!(entries[0].message, "Completed \"Drink Water\" ✓");
        assert_eq!(entries[1].message, "Created new habit \"Drink Water\"");
        assert!(!entries[0].read);
    }

    #[test]
    fn test_custom_message_overrides_default() {
        let mut log = log();
        log.add(
            ActivityKind::StreakMilestone,
            "Meditate",
            Some("🎉 7 day streak!".to_string()),
        );
        assert_eq!(log.activities()[0].message, "🎉 7 day streak!");
    }

    #[test]
    fn test_log_is_capped_at_fifty() {
        let mut log = log();
        for i in 0..(MAX_ACTIVITIES + 1) {
            log.add(ActivityKind::HabitCompleted, &format!("habit-{}", i), None);
        }

        assert_eq!(log.activities().len(), MAX_ACTIVITIES);
        // Newest first; the very first insertion fell off the end
        assert_eq!(log.activities()[0].habit_name, format!("habit-{}", MAX_ACTIVITIES));
        assert!(log.activities().iter().all(|a| a.habit_name != "habit-0"));
    }

    #[test]
    fn test_unread_count_and_mark_all() {
        let mut log = log();
        log.add(ActivityKind::HabitCreated, "A", None);
        let id = log.add(ActivityKind::HabitCompleted, "B", None).id;
        log.add(ActivityKind::HabitArchived, "C", None);
        assert_eq!(log.unread_count(), 3);

        assert!(log.mark_as_read(id));
        assert_eq!(log.unread_count(), 2);

        log.mark_all_as_read();
        assert_eq!(log.unread_count(), 0);
    }

    #[test]
    fn test_mark_unknown_id_is_noop() {
        let mut log = log();
        log.add(ActivityKind::HabitCreated, "A", None);
        assert!(!log.mark_as_read(ActivityId(404)));
        assert_eq!(log.unread_count(), 1);
    }

    #[test]
    fn test_clear_empties_the_log() {
        let mut log = log();
        log.add(ActivityKind::HabitCreated, "A", None);
        log.clear();
        assert!(log.activities().is_empty());
        assert_eq!(log.unread_count(), 0);
    }
}
