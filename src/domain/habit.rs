/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a trackable
/// recurring action, the validated form payload used to create one, and the
/// partial patch used to edit one.

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::{Category, Difficulty, DomainError, Frequency, HabitId};

/// Longest allowed habit name
pub const MAX_NAME_LEN: usize = 50;
/// Longest allowed goal/description
pub const MAX_GOAL_LEN: usize = 200;

/// One day in a habit's completion history
///
/// There is at most one entry per calendar date; re-toggling the same day
/// updates the existing entry instead of appending a second one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEntry {
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CompletionEntry {
    pub fn new(date: NaiveDate, completed: bool) -> Self {
        Self { date, completed, note: None }
    }
}

/// A habit represents something the user wants to do regularly
///
/// This is the core entity in the system. Progress state (today's completion
/// flag, streak counters, completion history) is mutated exclusively through
/// the store's toggle/reset operations; everything else is descriptive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name (e.g., "Morning Run 5K")
    pub name: String,
    /// Category for organization and analytics
    pub category: Category,
    /// What the user is aiming for (e.g., "Read at least 20 pages every day")
    pub goal: String,
    /// Symbolic icon name, resolved by the presentation layer
    pub icon: String,
    /// Accent color as a hex string
    pub color: String,
    /// How often this habit should be performed
    pub frequency: Frequency,
    /// Whether a reminder is enabled
    pub reminder_enabled: bool,
    /// Optional reminder time of day ("07:30")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_time: Option<String>,
    /// Subjective difficulty, descriptive only
    pub difficulty: Difficulty,
    /// Whether the habit was completed today
    pub completed: bool,
    /// Current consecutive-completion count
    pub streak: u32,
    /// Historical maximum of `streak`
    pub longest_streak: u32,
    /// Lifetime completion counter; never decremented
    pub total_completions: u32,
    /// One entry per calendar date, in insertion order
    pub completion_history: Vec<CompletionEntry>,
    /// Whether the habit lives on the archived list
    pub archived: bool,
    /// Date of creation
    pub created_at: NaiveDate,
}

impl Habit {
    /// Build a fresh habit from a validated draft
    ///
    /// Progress state starts zeroed: no streak, no completions, empty history.
    pub fn from_draft(id: HabitId, draft: HabitDraft, created_at: NaiveDate) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            goal: draft.goal,
            icon: draft.icon,
            color: draft.color,
            frequency: draft.frequency,
            reminder_enabled: draft.reminder_enabled,
            reminder_time: draft.reminder_time,
            difficulty: draft.difficulty,
            completed: false,
            streak: 0,
            longest_streak: 0,
            total_completions: 0,
            completion_history: Vec::new(),
            archived: false,
            created_at,
        }
    }

    /// Look up the history entry for a given date
    pub fn history_on(&self, date: NaiveDate) -> Option<&CompletionEntry> {
        self.completion_history.iter().find(|e| e.date == date)
    }

    /// Merge a partial edit into this habit
    ///
    /// The patch is assumed validated; only descriptive fields are touched,
    /// never progress state.
    pub fn apply(&mut self, patch: HabitPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(goal) = patch.goal {
            self.goal = goal;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = frequency;
        }
        if let Some(reminder_enabled) = patch.reminder_enabled {
            self.reminder_enabled = reminder_enabled;
        }
        if let Some(reminder_time) = patch.reminder_time {
            self.reminder_time = reminder_time;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }
    }
}

/// Validated form payload for creating a habit
///
/// This is the form-input boundary: all field-level validation happens here,
/// before anything reaches the store. The store itself trusts its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDraft {
    pub name: String,
    pub category: Category,
    pub goal: String,
    pub icon: String,
    pub color: String,
    pub frequency: Frequency,
    pub reminder_enabled: bool,
    pub reminder_time: Option<String>,
    pub difficulty: Difficulty,
}

impl HabitDraft {
    /// Create a draft with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        category: Category,
        goal: String,
        icon: String,
        color: String,
        frequency: Frequency,
        reminder_enabled: bool,
        reminder_time: Option<String>,
        difficulty: Difficulty,
    ) -> Result<Self, DomainError> {
        validate_name(&name)?;
        validate_goal(&goal)?;
        frequency.validate()?;

        Ok(Self {
            name,
            category,
            goal,
            icon,
            color,
            frequency,
            reminder_enabled,
            reminder_time,
            difficulty,
        })
    }
}

/// Partial edit of a habit's descriptive fields
///
/// `reminder_time` is doubly optional: `None` leaves it alone, `Some(None)`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HabitPatch {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub goal: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub frequency: Option<Frequency>,
    pub reminder_enabled: Option<bool>,
    pub reminder_time: Option<Option<String>>,
    pub difficulty: Option<Difficulty>,
}

impl HabitPatch {
    /// Validate the fields that are present
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(ref name) = self.name {
            validate_name(name)?;
        }
        if let Some(ref goal) = self.goal {
            validate_goal(goal)?;
        }
        if let Some(ref frequency) = self.frequency {
            frequency.validate()?;
        }
        Ok(())
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(DomainError::InvalidHabitName(
            "Habit name cannot be empty".to_string(),
        ));
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::InvalidHabitName(format!(
            "Habit name cannot be longer than {} characters",
            MAX_NAME_LEN
        )));
    }

    Ok(())
}

fn validate_goal(goal: &str) -> Result<(), DomainError> {
    if goal.chars().count() > MAX_GOAL_LEN {
        return Err(DomainError::Validation {
            message: format!("Goal cannot be longer than {} characters", MAX_GOAL_LEN),
        });
    }
    Ok(())
}
