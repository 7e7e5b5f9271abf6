/// HabitNote entity for free-text journal entries
///
/// A note is attached to a habit by ID. Notes are never edited after creation
/// and are removed only as a cascade of deleting the owning habit.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use crate::domain::{HabitId, Mood, NoteId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitNote {
    /// Unique identifier for this note
    pub id: NoteId,
    /// Which habit this note belongs to
    pub habit_id: HabitId,
    /// Which day the note is about
    pub date: NaiveDate,
    /// Free-form journal text
    pub content: String,
    /// Optional mood recorded with the note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// When the note was written
    pub created_at: DateTime<Utc>,
}

impl HabitNote {
    pub fn new(
        id: NoteId,
        habit_id: HabitId,
        date: NaiveDate,
        content: String,
        mood: Option<Mood>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self { id, habit_id, date, content, mood, created_at }
    }
}
