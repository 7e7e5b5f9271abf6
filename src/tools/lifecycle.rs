/// Tools for the habit lifecycle: archive, restore, delete, streak reset,
/// and manual reordering

use serde::{Deserialize, Serialize};

use crate::domain::{ActivityKind, HabitId};
use crate::store::{ActivityLog, HabitStore};

/// Parameters naming a single habit
#[derive(Debug, Deserialize)]
pub struct HabitIdParams {
    pub habit_id: u64,
}

/// Shared response shape for lifecycle operations
#[derive(Debug, Serialize)]
pub struct LifecycleResponse {
    pub success: bool,
    pub message: String,
}

impl LifecycleResponse {
    fn not_found(id: HabitId) -> Self {
        Self {
            success: false,
            message: format!("No habit with ID {}", id),
        }
    }
}

/// Move a habit to the archive
pub fn archive_habit(
    store: &mut HabitStore,
    log: &mut ActivityLog,
    params: HabitIdParams,
) -> LifecycleResponse {
    let id = HabitId(params.habit_id);
    let Some(name) = store.get_habit_by_id(id).map(|h| h.name.clone()) else {
        return LifecycleResponse::not_found(id);
    };

    if !store.archive_habit(id) {
        // Exists, but already on the archived list
        return LifecycleResponse {
            success: false,
            message: format!("\"{}\" is already archived", name),
        };
    }

    log.add(ActivityKind::HabitArchived, &name, None);
    LifecycleResponse {
        success: true,
        message: format!("Habit archived. \"{}\" has been moved to archive.", name),
    }
}

/// Bring an archived habit back to the active list
pub fn restore_habit(
    store: &mut HabitStore,
    log: &mut ActivityLog,
    params: HabitIdParams,
) -> LifecycleResponse {
    let id = HabitId(params.habit_id);
    let Some(name) = store.get_habit_by_id(id).map(|h| h.name.clone()) else {
        return LifecycleResponse::not_found(id);
    };

    if !store.restore_habit(id) {
        return LifecycleResponse {
            success: false,
            message: format!("\"{}\" is not archived", name),
        };
    }

    log.add(ActivityKind::HabitRestored, &name, None);
    LifecycleResponse {
        success: true,
        message: format!("Habit restored. \"{}\" is back in your active habits.", name),
    }
}

/// Permanently delete a habit and its notes
pub fn delete_habit(
    store: &mut HabitStore,
    log: &mut ActivityLog,
    params: HabitIdParams,
) -> LifecycleResponse {
    let id = HabitId(params.habit_id);
    let Some(habit) = store.delete_habit(id) else {
        return LifecycleResponse::not_found(id);
    };

    log.add(ActivityKind::HabitDeleted, &habit.name, None);
    LifecycleResponse {
        success: true,
        message: format!("Habit deleted. \"{}\" has been permanently removed.", habit.name),
    }
}

/// Set an active habit's current streak back to zero
pub fn reset_streak(
    store: &mut HabitStore,
    log: &mut ActivityLog,
    params: HabitIdParams,
) -> LifecycleResponse {
    let id = HabitId(params.habit_id);
    let Some(name) = store.get_habit_by_id(id).map(|h| h.name.clone()) else {
        return LifecycleResponse::not_found(id);
    };

    if !store.reset_streak(id) {
        return LifecycleResponse {
            success: false,
            message: format!("\"{}\" is archived; restore it first", name),
        };
    }

    log.add(ActivityKind::StreakReset, &name, None);
    LifecycleResponse {
        success: true,
        message: format!("Streak reset. \"{}\" streak has been reset to 0.", name),
    }
}

/// Parameters for reordering the active list
#[derive(Debug, Deserialize)]
pub struct ReorderParams {
    pub from_index: usize,
    pub to_index: usize,
}

/// Move an active habit to a new position
///
/// Reordering is cosmetic; it does not show up in the activity feed.
pub fn reorder_habits(store: &mut HabitStore, params: ReorderParams) -> LifecycleResponse {
    if !store.reorder_habits(params.from_index, params.to_index) {
        return LifecycleResponse {
            success: false,
            message: format!("No habit at position {}", params.from_index),
        };
    }

    LifecycleResponse {
        success: true,
        message: "Habits reordered".to_string(),
    }
}
