/// Tool for the dashboard and analytics aggregates
///
/// Everything here is computed on demand from current store state; nothing
/// is cached between calls.

use serde::{Deserialize, Serialize};

use crate::analytics::{self, CategoryCount, DaySummary, Progress};
use crate::store::HabitStore;

/// Parameters for the insights view
#[derive(Debug, Default, Deserialize)]
pub struct InsightsParams {
    /// "week" (default) or "month"
    pub period: Option<String>,
    /// Calendar month override for the heatmap, e.g. year=2025, month=3
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Response carrying the derived statistics
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub success: bool,
    pub message: String,
    /// Today's completed/total from the live flags
    pub today: Progress,
    /// Per-day tallies over the selected period
    pub days: Vec<DaySummary>,
    /// Aggregate percentage over `days`
    pub aggregate_rate: u32,
    /// Habit counts per category
    pub categories: Vec<CategoryCount>,
    /// Name of the best running streak, if any
    pub current_streak_leader: Option<String>,
    /// Name of the best streak ever recorded
    pub longest_streak_leader: Option<String>,
}

/// Compute the aggregates for the requested period
pub fn insights(store: &HabitStore, params: InsightsParams) -> InsightsResponse {
    let habits = store.habits();
    let today = store.today();

    let days = match (params.year, params.month) {
        (Some(year), Some(month)) => analytics::month_summary(habits, year, month),
        _ => match params.period.as_deref().unwrap_or("week") {
            "month" => {
                use chrono::Datelike;
                analytics::month_summary(habits, today.year(), today.month())
            }
            _ => analytics::week_summary(habits, today),
        },
    };

    let today_progress = analytics::today_progress(habits);
    let message = format!(
        "{} of {} habits completed today ({}%)",
        today_progress.completed, today_progress.total, today_progress.percentage
    );

    InsightsResponse {
        success: true,
        message,
        today: today_progress,
        aggregate_rate: analytics::aggregate_rate(&days),
        days,
        categories: analytics::category_distribution(habits),
        current_streak_leader: analytics::current_streak_leader(habits).map(|h| h.name.clone()),
        longest_streak_leader: analytics::longest_streak_leader(habits).map(|h| h.name.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Difficulty, Frequency, HabitDraft, IdSource};
    use chrono::NaiveDate;

    fn store() -> HabitStore {
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let mut store = HabitStore::new(IdSource::starting_at(1), today);
        for (name, category) in [("Read", Category::Learning), ("Run", Category::Fitness)] {
            let draft = HabitDraft::new(
                name.to_string(),
                category,
                String::new(),
                "Star".to_string(),
                category.accent_hex().to_string(),
                Frequency::Daily,
                false,
                None,
                Difficulty::Medium,
            )
            .unwrap();
            store.add_habit(draft);
        }
        store
    }

    #[test]
    fn test_week_insights() {
        let mut store = store();
        let id = store.habits()[0].id;
        store.toggle_habit(id);

        let response = insights(&store, InsightsParams::default());
        assert!(response.success);
        assert_eq!(response.days.len(), 7);
        assert_eq!(response.today.completed, 1);
        assert_eq!(response.today.percentage, 50);
        assert_eq!(response.current_streak_leader.as_deref(), Some("Run"));
        // Today is the last day of the week window and has the one completion
        assert_eq!(response.days[6].completed, 1);
    }

    #[test]
    fn test_month_heatmap_override() {
        let store = store();
        let response = insights(
            &store,
            InsightsParams { year: Some(2025), month: Some(2), ..Default::default() },
        );
        assert_eq!(response.days.len(), 28);
    }

    #[test]
    fn test_category_counts_present() {
        let store = store();
        let response = insights(&store, InsightsParams::default());
        let learning = response
            .categories
            .iter()
            .find(|c| c.category == Category::Learning)
            .unwrap();
        assert_eq!(learning.count, 1);
    }
}
