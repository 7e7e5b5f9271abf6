/// Tool for editing existing habits
///
/// Assembles a partial patch from the raw form fields, validates it, and
/// merges it into the matching active habit.

use serde::{Deserialize, Serialize};

use crate::domain::{ActivityKind, DomainError, HabitId, HabitPatch};
use crate::store::{ActivityLog, HabitStore};

/// Parameters for updating an existing habit
#[derive(Debug, Deserialize)]
pub struct UpdateHabitParams {
    pub habit_id: u64,
    pub name: Option<String>,
    pub category: Option<String>,
    pub goal: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub frequency: Option<String>,
    pub frequency_days: Option<Vec<String>>,
    pub frequency_every_days: Option<u32>,
    pub reminder_enabled: Option<bool>,
    /// Present-and-empty clears the reminder time
    pub reminder_time: Option<String>,
    pub difficulty: Option<String>,
}

/// Response from updating a habit
#[derive(Debug, Serialize)]
pub struct UpdateHabitResponse {
    pub success: bool,
    pub message: String,
}

/// Update an existing habit
///
/// Archived habits are not editable; an unknown ID is reported in the
/// response but raises nothing.
pub fn update_habit(
    store: &mut HabitStore,
    log: &mut ActivityLog,
    params: UpdateHabitParams,
) -> Result<UpdateHabitResponse, DomainError> {
    let id = HabitId(params.habit_id);

    let category = match params.category {
        Some(c) => Some(c.parse()?),
        None => None,
    };
    let frequency = match params.frequency {
        Some(f) => Some(super::parse_frequency(
            &f,
            params.frequency_days.as_deref(),
            params.frequency_every_days,
        )?),
        None => None,
    };
    let difficulty = match params.difficulty {
        Some(d) => Some(d.parse()?),
        None => None,
    };
    let reminder_time = params
        .reminder_time
        .map(|t| if t.trim().is_empty() { None } else { Some(t) });

    let patch = HabitPatch {
        name: params.name,
        category,
        goal: params.goal,
        icon: params.icon,
        color: params.color,
        frequency,
        reminder_enabled: params.reminder_enabled,
        reminder_time,
        difficulty,
    };
    patch.validate()?;

    if !store.update_habit(id, patch) {
        return Ok(UpdateHabitResponse {
            success: false,
            message: format!("No active habit with ID {}", id),
        });
    }

    // The patch may have renamed it; log the name the user sees now
    let name = store
        .get_habit_by_id(id)
        .map(|h| h.name.clone())
        .unwrap_or_default();
    log.add(ActivityKind::HabitUpdated, &name, None);

    Ok(UpdateHabitResponse {
        success: true,
        message: "Habit updated!".to_string(),
    })
}
