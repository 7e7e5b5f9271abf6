/// HabitStore: authoritative owner of the habit and note collections
///
/// The store enforces the progress invariants (longest streak never trails the
/// current streak, at most one history entry per date) and computes the
/// per-toggle streak updates. Operations on IDs that don't exist are silent
/// no-ops; there is no concurrent mutation, so nothing else can observe an
/// intermediate state.

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::domain::{
    CompletionEntry, Habit, HabitDraft, HabitId, HabitNote, HabitPatch, IdSource, Mood, NoteId,
};

/// Result of a completion toggle, handed back so the caller can decide what
/// to report (ordinary completion vs. streak milestone vs. un-completion)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub completed: bool,
    pub streak: u32,
    pub milestone: bool,
}

pub struct HabitStore {
    habits: Vec<Habit>,
    archived: Vec<Habit>,
    notes: Vec<HabitNote>,
    ids: IdSource,
    today: NaiveDate,
}

impl HabitStore {
    /// Create an empty store
    ///
    /// `today` anchors all completion toggles; the binary passes the current
    /// date, tests pass a fixed one.
    pub fn new(ids: IdSource, today: NaiveDate) -> Self {
        Self {
            habits: Vec::new(),
            archived: Vec::new(),
            notes: Vec::new(),
            ids,
            today,
        }
    }

    /// Create a store pre-populated with seeded collections
    ///
    /// `ids` must start above every seeded ID so live creates never collide.
    pub fn from_parts(
        habits: Vec<Habit>,
        archived: Vec<Habit>,
        notes: Vec<HabitNote>,
        ids: IdSource,
        today: NaiveDate,
    ) -> Self {
        Self { habits, archived, notes, ids, today }
    }

    /// The date completion toggles apply to
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Move the store's notion of "today" forward
    ///
    /// `completed` means "completed today", so rolling the date re-derives
    /// every flag from that date's history entry.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
        for habit in self.habits.iter_mut().chain(self.archived.iter_mut()) {
            habit.completed = habit
                .history_on(today)
                .map(|e| e.completed)
                .unwrap_or(false);
        }
    }

    /// Active habits, most recently created first
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Archived habits, most recently archived first
    pub fn archived_habits(&self) -> &[Habit] {
        &self.archived
    }

    /// All notes, newest first
    pub fn notes(&self) -> &[HabitNote] {
        &self.notes
    }

    /// Insert a new habit built from a validated draft
    ///
    /// The habit starts with zeroed progress and is prepended to the active
    /// list. Validation is the draft's job, not ours.
    pub fn add_habit(&mut self, draft: HabitDraft) -> &Habit {
        let id = HabitId(self.ids.next_id());
        let habit = Habit::from_draft(id, draft, self.today);
        debug!(habit_id = %id, name = %habit.name, "habit created");
        self.habits.insert(0, habit);
        &self.habits[0]
    }

    /// Merge a partial edit into the matching active habit
    ///
    /// Silent no-op if the ID is not on the active list; archived habits are
    /// not editable.
    pub fn update_habit(&mut self, id: HabitId, patch: HabitPatch) -> bool {
        match self.habits.iter_mut().find(|h| h.id == id) {
            Some(habit) => {
                habit.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Permanently remove a habit from whichever list holds it, along with
    /// every note that references it
    ///
    /// Irreversible. Returns the removed habit so the caller can report its
    /// name; `None` if the ID matched nothing.
    pub fn delete_habit(&mut self, id: HabitId) -> Option<Habit> {
        let removed = if let Some(pos) = self.habits.iter().position(|h| h.id == id) {
            Some(self.habits.remove(pos))
        } else if let Some(pos) = self.archived.iter().position(|h| h.id == id) {
            Some(self.archived.remove(pos))
        } else {
            None
        };

        if let Some(ref habit) = removed {
            self.notes.retain(|n| n.habit_id != id);
            debug!(habit_id = %id, name = %habit.name, "habit deleted");
        }

        removed
    }

    /// Move a habit from the active list to the archived list
    pub fn archive_habit(&mut self, id: HabitId) -> bool {
        let Some(pos) = self.habits.iter().position(|h| h.id == id) else {
            return false;
        };
        let mut habit = self.habits.remove(pos);
        habit.archived = true;
        self.archived.insert(0, habit);
        true
    }

    /// Move a habit from the archived list back to the front of the active list
    pub fn restore_habit(&mut self, id: HabitId) -> bool {
        let Some(pos) = self.archived.iter().position(|h| h.id == id) else {
            return false;
        };
        let mut habit = self.archived.remove(pos);
        habit.archived = false;
        self.habits.insert(0, habit);
        true
    }

    /// Flip today's completion flag for an active habit
    ///
    /// Completing bumps the streak and the lifetime counter; un-completing
    /// walks the streak back but leaves the lifetime counter alone (it is an
    /// achievement counter, not a derived sum). Today's history entry is
    /// updated in place when it exists, so a date never appears twice.
    pub fn toggle_habit(&mut self, id: HabitId) -> Option<ToggleOutcome> {
        let today = self.today;
        let habit = self.habits.iter_mut().find(|h| h.id == id)?;

        let completed = !habit.completed;
        let streak = if completed {
            habit.streak + 1
        } else {
            habit.streak.saturating_sub(1)
        };

        habit.completed = completed;
        habit.streak = streak;
        habit.longest_streak = habit.longest_streak.max(streak);
        if completed {
            habit.total_completions += 1;
        }

        match habit.completion_history.iter_mut().find(|e| e.date == today) {
            Some(entry) => entry.completed = completed,
            None => habit.completion_history.push(CompletionEntry::new(today, completed)),
        }

        // Every 7th consecutive completion is a milestone
        let milestone = completed && streak > 0 && streak % 7 == 0;

        Some(ToggleOutcome { completed, streak, milestone })
    }

    /// Set an active habit's current streak back to zero
    ///
    /// Longest streak, today's flag, and history are untouched.
    pub fn reset_streak(&mut self, id: HabitId) -> bool {
        match self.habits.iter_mut().find(|h| h.id == id) {
            Some(habit) => {
                habit.streak = 0;
                true
            }
            None => false,
        }
    }

    /// Move the active habit at `from` to position `to`
    ///
    /// Pure positional reorder of the active list; the archived list is
    /// unaffected. Out-of-range `from` is a no-op, `to` is clamped.
    pub fn reorder_habits(&mut self, from: usize, to: usize) -> bool {
        if from >= self.habits.len() {
            return false;
        }
        let habit = self.habits.remove(from);
        let to = to.min(self.habits.len());
        self.habits.insert(to, habit);
        true
    }

    /// Attach a journal note to a habit, newest first
    ///
    /// The habit ID is not checked: a note for an unknown habit is unreachable
    /// through reads and disappears with the next cascade, matching the
    /// no-validation contract of the store.
    pub fn add_note(&mut self, habit_id: HabitId, content: String, mood: Option<Mood>) -> &HabitNote {
        let note = HabitNote::new(
            NoteId(self.ids.next_id()),
            habit_id,
            self.today,
            content,
            mood,
            Utc::now(),
        );
        self.notes.insert(0, note);
        &self.notes[0]
    }

    /// Look up a habit by ID across both the active and archived lists
    pub fn get_habit_by_id(&self, id: HabitId) -> Option<&Habit> {
        self.habits
            .iter()
            .find(|h| h.id == id)
            .or_else(|| self.archived.iter().find(|h| h.id == id))
    }

    /// All notes for a habit, newest-timestamp-first
    pub fn notes_by_habit(&self, habit_id: HabitId) -> Vec<&HabitNote> {
        let mut notes: Vec<&HabitNote> =
            self.notes.iter().filter(|n| n.habit_id == habit_id).collect();
        // Stable sort: among equal timestamps the prepend order already has
        // the newest first
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notes
    }
}
