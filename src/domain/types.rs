/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like Category, Frequency, and ID types
/// that are used by Habit, HabitNote, Activity, and the state containers.

use serde::{Deserialize, Serialize};
use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// This is a wrapper around a plain integer to provide type safety - you can't
/// accidentally pass a habit ID where a note ID is expected. IDs are handed out
/// by an [`IdSource`] owned by the store, so creation order fully determines them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HabitId(pub u64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a habit note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for an activity log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActivityId(pub u64);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Monotonic counter that hands out fresh IDs
///
/// The containers never mint IDs themselves; each one is constructed with its
/// own source. A plain counter keeps creation deterministic and collision-free
/// under rapid successive creates, which a timestamp-based scheme cannot
/// guarantee.
#[derive(Debug, Clone)]
pub struct IdSource {
    next: u64,
}

impl IdSource {
    /// Create a source whose first ID is `first`
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Hand out the next ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSource {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Categories for organizing habits into different life areas
///
/// This is a closed set: the UI offers exactly these six and the category
/// distribution chart iterates them in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Health,
    Learning,
    Mind,
    Fitness,
    Productivity,
    Social,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 6] = [
        Category::Health,
        Category::Learning,
        Category::Mind,
        Category::Fitness,
        Category::Productivity,
        Category::Social,
    ];

    /// Get the display name for this category
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Learning => "Learning",
            Category::Mind => "Mind",
            Category::Fitness => "Fitness",
            Category::Productivity => "Productivity",
            Category::Social => "Social",
        }
    }

    /// Default accent color (hex) associated with this category
    pub fn accent_hex(&self) -> &'static str {
        match self {
            Category::Health => "#22c55e",
            Category::Learning => "#3b82f6",
            Category::Mind => "#a78bfa",
            Category::Fitness => "#f97316",
            Category::Productivity => "#06b6d4",
            Category::Social => "#ec4899",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "health" => Ok(Category::Health),
            "learning" => Ok(Category::Learning),
            "mind" => Ok(Category::Mind),
            "fitness" => Ok(Category::Fitness),
            "productivity" => Ok(Category::Productivity),
            "social" => Ok(Category::Social),
            other => Err(DomainError::InvalidCategory(format!(
                "Invalid category '{}'. Valid options: health, learning, mind, fitness, productivity, social",
                other
            ))),
        }
    }
}

/// How often a habit should be performed
///
/// The schedule is purely descriptive for streak purposes - streaks advance on
/// every completion toggle regardless of frequency - but the weekly variant
/// must name at least one day and the custom interval must be positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Frequency {
    /// Every single day
    Daily,
    /// Specific days of the week (e.g., Monday, Wednesday, Friday)
    Weekly { days: Vec<Weekday> },
    /// Every N days (e.g., every 3 days)
    Custom { every_days: u32 },
}

impl Frequency {
    /// Validate that a frequency value is reasonable
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Frequency::Weekly { days } => {
                if days.is_empty() {
                    return Err(DomainError::InvalidFrequency(
                        "Weekly frequency must specify at least one day".to_string(),
                    ));
                }
                if days.len() > 7 {
                    return Err(DomainError::InvalidFrequency(
                        "Weekly frequency cannot have more than 7 days".to_string(),
                    ));
                }
            }
            Frequency::Custom { every_days } => {
                if *every_days == 0 {
                    return Err(DomainError::InvalidFrequency(
                        "Custom interval must be at least 1 day".to_string(),
                    ));
                }
                if *every_days > 365 {
                    return Err(DomainError::InvalidFrequency(
                        "Custom interval cannot be longer than 365 days".to_string(),
                    ));
                }
            }
            Frequency::Daily => {}
        }
        Ok(())
    }
}

/// Subjective difficulty of a habit
///
/// Purely descriptive; it has no effect on scheduling or streaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::InvalidValue {
                message: format!("Invalid difficulty '{}'. Valid options: easy, medium, hard", other),
            }),
        }
    }
}

/// Mood recorded alongside a journal note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl FromStr for Mood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "neutral" => Ok(Mood::Neutral),
            "sad" => Ok(Mood::Sad),
            other => Err(DomainError::InvalidValue {
                message: format!("Invalid mood '{}'. Valid options: happy, neutral, sad", other),
            }),
        }
    }
}
