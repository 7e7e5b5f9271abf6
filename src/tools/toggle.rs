/// Tool for toggling today's completion
///
/// This is the one place that turns a toggle outcome into an activity:
/// an ordinary completion, a streak milestone, or an un-completion.

use serde::{Deserialize, Serialize};

use crate::domain::{ActivityKind, HabitId};
use crate::store::{ActivityLog, HabitStore};

/// Parameters for toggling a habit
#[derive(Debug, Deserialize)]
pub struct ToggleHabitParams {
    pub habit_id: u64,
}

/// Response from toggling a habit
#[derive(Debug, Serialize)]
pub struct ToggleHabitResponse {
    pub success: bool,
    pub message: String,
    pub completed: Option<bool>,
    pub streak: Option<u32>,
    pub milestone: bool,
}

/// Flip today's completion for an active habit
pub fn toggle_habit(
    store: &mut HabitStore,
    log: &mut ActivityLog,
    params: ToggleHabitParams,
) -> ToggleHabitResponse {
    let id = HabitId(params.habit_id);

    let name = match store.get_habit_by_id(id) {
        Some(habit) => habit.name.clone(),
        None => String::new(),
    };

    let Some(outcome) = store.toggle_habit(id) else {
        return ToggleHabitResponse {
            success: false,
            message: format!("No active habit with ID {}", id),
            completed: None,
            streak: None,
            milestone: false,
        };
    };

    let message = if outcome.milestone {
        log.add(ActivityKind::StreakMilestone, &name, None);
        format!(
            "🎉 {} day streak! Amazing! You've completed \"{}\" for {} days!",
            outcome.streak, name, outcome.streak
        )
    } else if outcome.completed {
        log.add(ActivityKind::HabitCompleted, &name, None);
        format!("✓ {} completed", name)
    } else {
        log.add(ActivityKind::HabitUncompleted, &name, None);
        format!("Marked \"{}\" as incomplete", name)
    };

    ToggleHabitResponse {
        success: true,
        message,
        completed: Some(outcome.completed),
        streak: Some(outcome.streak),
        milestone: outcome.milestone,
    }
}
