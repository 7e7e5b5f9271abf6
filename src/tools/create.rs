/// Tool for creating new habits
///
/// Builds a validated draft from the raw form fields, inserts it, and
/// reports the creation to the activity feed.

use serde::{Deserialize, Serialize};

use crate::domain::{ActivityKind, Difficulty, DomainError, HabitDraft, HabitId};
use crate::store::{ActivityLog, HabitStore};

/// Parameters for creating a new habit
#[derive(Debug, Deserialize)]
pub struct CreateHabitParams {
    pub name: String,
    pub category: String,
    pub goal: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    /// "daily" (default), "weekly", or "custom"
    pub frequency: Option<String>,
    /// Weekday names for the weekly variant
    pub frequency_days: Option<Vec<String>>,
    /// Interval in days for the custom variant
    pub frequency_every_days: Option<u32>,
    pub reminder_enabled: Option<bool>,
    pub reminder_time: Option<String>,
    pub difficulty: Option<String>,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub success: bool,
    pub habit_id: HabitId,
    pub message: String,
}

/// Create a new habit
///
/// Validation failures surface here, at the form boundary; the store itself
/// never rejects input.
pub fn create_habit(
    store: &mut HabitStore,
    log: &mut ActivityLog,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, DomainError> {
    let category = params.category.parse()?;
    let frequency = super::parse_frequency(
        params.frequency.as_deref().unwrap_or("daily"),
        params.frequency_days.as_deref(),
        params.frequency_every_days,
    )?;
    let difficulty = match params.difficulty {
        Some(d) => d.parse()?,
        None => Difficulty::Medium,
    };

    let draft = HabitDraft::new(
        params.name,
        category,
        params.goal.unwrap_or_default(),
        params.icon.unwrap_or_else(|| "Target".to_string()),
        params.color.unwrap_or_else(|| category.accent_hex().to_string()),
        frequency,
        params.reminder_enabled.unwrap_or(false),
        params.reminder_time,
        difficulty,
    )?;

    let habit = store.add_habit(draft);
    let (id, name) = (habit.id, habit.name.clone());
    log.add(ActivityKind::HabitCreated, &name, None);

    Ok(CreateHabitResponse {
        success: true,
        habit_id: id,
        message: format!("🎉 New habit created! \"{}\" has been added to your habits.", name),
    })
}
