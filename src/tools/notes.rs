/// Tools for habit journal notes

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{HabitId, Mood, NoteId};
use crate::store::HabitStore;

/// Parameters for adding a note
#[derive(Debug, Deserialize)]
pub struct AddNoteParams {
    pub habit_id: u64,
    pub content: String,
    pub mood: Option<String>,
}

/// Response from adding a note
#[derive(Debug, Serialize)]
pub struct AddNoteResponse {
    pub success: bool,
    pub message: String,
    pub note_id: Option<NoteId>,
}

/// Attach a journal note to a habit
///
/// Notes are immutable once written and disappear only with their habit.
pub fn add_note(store: &mut HabitStore, params: AddNoteParams) -> AddNoteResponse {
    let id = HabitId(params.habit_id);
    if store.get_habit_by_id(id).is_none() {
        return AddNoteResponse {
            success: false,
            message: format!("No habit with ID {}", id),
            note_id: None,
        };
    }

    let mood = match params.mood.as_deref() {
        Some(m) => match m.parse::<Mood>() {
            Ok(mood) => Some(mood),
            Err(e) => {
                return AddNoteResponse {
                    success: false,
                    message: e.to_string(),
                    note_id: None,
                }
            }
        },
        None => None,
    };

    let note = store.add_note(id, params.content, mood);
    AddNoteResponse {
        success: true,
        message: "Note added".to_string(),
        note_id: Some(note.id),
    }
}

/// Parameters for listing a habit's notes
#[derive(Debug, Deserialize)]
pub struct ListNotesParams {
    pub habit_id: u64,
}

/// One note as presented to the client
#[derive(Debug, Serialize)]
pub struct NoteView {
    pub id: NoteId,
    pub date: NaiveDate,
    pub content: String,
    pub mood: Option<Mood>,
    pub created_at: DateTime<Utc>,
}

/// Response from listing notes
#[derive(Debug, Serialize)]
pub struct ListNotesResponse {
    pub success: bool,
    pub notes: Vec<NoteView>,
}

/// All notes for a habit, newest first
pub fn list_notes(store: &HabitStore, params: ListNotesParams) -> ListNotesResponse {
    let notes = store
        .notes_by_habit(HabitId(params.habit_id))
        .into_iter()
        .map(|n| NoteView {
            id: n.id,
            date: n.date,
            content: n.content.clone(),
            mood: n.mood,
            created_at: n.created_at,
        })
        .collect();

    ListNotesResponse { success: true, notes }
}
