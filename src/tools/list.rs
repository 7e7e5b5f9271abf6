/// Tools for reading the habit collections
///
/// `habit_list` backs the main list and archive views; `habit_status` backs
/// the detail view with history and notes counts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics;
use crate::domain::{Category, CompletionEntry, Difficulty, Frequency, Habit, HabitId};
use crate::store::HabitStore;

/// Parameters for listing habits
#[derive(Debug, Default, Deserialize)]
pub struct ListHabitsParams {
    /// List the archive instead of the active habits
    pub archived: Option<bool>,
    /// Filter by category name
    pub category: Option<String>,
    /// "all" (default), "pending", or "completed"
    pub filter: Option<String>,
}

/// One habit row as presented to the client
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub id: HabitId,
    pub name: String,
    pub category: Category,
    pub icon: String,
    pub color: String,
    pub difficulty: Difficulty,
    pub completed: bool,
    pub streak: u32,
    pub longest_streak: u32,
    pub total_completions: u32,
    pub completion_rate: u32,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub success: bool,
    pub habits: Vec<HabitSummary>,
    pub completed_today: usize,
    pub total: usize,
}

fn summarize(habit: &Habit) -> HabitSummary {
    HabitSummary {
        id: habit.id,
        name: habit.name.clone(),
        category: habit.category,
        icon: habit.icon.clone(),
        color: habit.color.clone(),
        difficulty: habit.difficulty,
        completed: habit.completed,
        streak: habit.streak,
        longest_streak: habit.longest_streak,
        total_completions: habit.total_completions,
        completion_rate: analytics::completion_rate(habit),
    }
}

/// List active or archived habits, optionally filtered
pub fn list_habits(store: &HabitStore, params: ListHabitsParams) -> ListHabitsResponse {
    let source = if params.archived.unwrap_or(false) {
        store.archived_habits()
    } else {
        store.habits()
    };

    let category: Option<Category> = params.category.and_then(|c| c.parse().ok());
    let filter = params.filter.unwrap_or_else(|| "all".to_string());

    let habits: Vec<HabitSummary> = source
        .iter()
        .filter(|h| category.map(|c| h.category == c).unwrap_or(true))
        .filter(|h| match filter.as_str() {
            "pending" => !h.completed,
            "completed" => h.completed,
            _ => true,
        })
        .map(summarize)
        .collect();

    ListHabitsResponse {
        success: true,
        habits,
        completed_today: source.iter().filter(|h| h.completed).count(),
        total: source.len(),
    }
}

/// Parameters for the habit detail view
#[derive(Debug, Deserialize)]
pub struct HabitStatusParams {
    pub habit_id: u64,
    /// How many recent history entries to include (default 7)
    pub recent_days: Option<usize>,
}

/// Response from the habit detail view
#[derive(Debug, Serialize)]
pub struct HabitStatusResponse {
    pub success: bool,
    pub message: String,
    pub habit: Option<HabitDetail>,
}

/// Full detail for a single habit
#[derive(Debug, Serialize)]
pub struct HabitDetail {
    #[serde(flatten)]
    pub summary: HabitSummary,
    pub goal: String,
    pub frequency: Frequency,
    pub reminder_enabled: bool,
    pub reminder_time: Option<String>,
    pub archived: bool,
    pub created_at: NaiveDate,
    pub recent_history: Vec<CompletionEntry>,
    pub note_count: usize,
}

/// Detail for one habit, looked up across both lists
pub fn habit_status(store: &HabitStore, params: HabitStatusParams) -> HabitStatusResponse {
    let id = HabitId(params.habit_id);
    let Some(habit) = store.get_habit_by_id(id) else {
        return HabitStatusResponse {
            success: false,
            message: format!("No habit with ID {}", id),
            habit: None,
        };
    };

    let recent = params.recent_days.unwrap_or(7);
    let mut recent_history: Vec<CompletionEntry> = habit.completion_history.clone();
    recent_history.sort_by(|a, b| b.date.cmp(&a.date));
    recent_history.truncate(recent);

    HabitStatusResponse {
        success: true,
        message: format!("\"{}\"", habit.name),
        habit: Some(HabitDetail {
            summary: summarize(habit),
            goal: habit.goal.clone(),
            frequency: habit.frequency.clone(),
            reminder_enabled: habit.reminder_enabled,
            reminder_time: habit.reminder_time.clone(),
            archived: habit.archived,
            created_at: habit.created_at,
            recent_history,
            note_count: store.notes_by_habit(id).len(),
        }),
    }
}
