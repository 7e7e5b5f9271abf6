/// Activity records for the user-visible event feed
///
/// An activity is an immutable snapshot of something the user did: it keeps
/// the habit name as a plain string so the record survives habit deletion.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::ActivityId;

/// The kind of event an activity records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    HabitCreated,
    HabitCompleted,
    HabitUncompleted,
    HabitUpdated,
    HabitDeleted,
    HabitArchived,
    HabitRestored,
    StreakMilestone,
    StreakReset,
}

impl ActivityKind {
    /// Default human-readable message for this kind of event
    pub fn default_message(&self, habit_name: &str) -> String {
        match self {
            ActivityKind::HabitCreated => format!("Created new habit \"{}\"", habit_name),
            ActivityKind::HabitCompleted => format!("Completed \"{}\" ✓", habit_name),
            ActivityKind::HabitUncompleted => format!("Marked \"{}\" as incomplete", habit_name),
            ActivityKind::HabitUpdated => format!("Updated \"{}\"", habit_name),
            ActivityKind::HabitDeleted => format!("Deleted \"{}\" permanently", habit_name),
            ActivityKind::HabitArchived => format!("Archived \"{}\"", habit_name),
            ActivityKind::HabitRestored => format!("Restored \"{}\" from archive", habit_name),
            ActivityKind::StreakMilestone => {
                format!("🎉 Reached a streak milestone on \"{}\"!", habit_name)
            }
            ActivityKind::StreakReset => format!("Reset streak for \"{}\"", habit_name),
        }
    }
}

/// An immutable log record of a user-visible event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for this record
    pub id: ActivityId,
    pub kind: ActivityKind,
    /// Denormalized habit name, not a live reference
    pub habit_name: String,
    /// Human-readable message; either the kind's default or a caller override
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Whether the user has seen this record
    pub read: bool,
}
