/// Derived statistics over the habit collections
///
/// Everything here is a pure function of current store state, evaluated at
/// query time and never cached or persisted. The dashboard, analytics, and
/// calendar surfaces all read from these.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::domain::{Category, Habit};

/// Completed/total tally for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Today's headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Habit count for one category of the distribution chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

fn rounded_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// A habit's completion rate: completed history entries over total entries,
/// as a rounded percentage. Empty history reads as 0.
pub fn completion_rate(habit: &Habit) -> u32 {
    let total = habit.completion_history.len();
    let completed = habit
        .completion_history
        .iter()
        .filter(|e| e.completed)
        .count();
    rounded_percent(completed, total)
}

/// How many habits are done today, from the live completion flags
pub fn today_progress(habits: &[Habit]) -> Progress {
    let total = habits.len();
    let completed = habits.iter().filter(|h| h.completed).count();
    Progress {
        completed,
        total,
        percentage: rounded_percent(completed, total),
    }
}

/// Per-day tallies over an inclusive date range
///
/// A habit counts toward a day's total once it exists (`created_at` on or
/// before the day) and toward the completed count when its history has a
/// completed entry for that day.
pub fn range_summary(habits: &[Habit], start: NaiveDate, end: NaiveDate) -> Vec<DaySummary> {
    let mut days = Vec::new();
    let mut date = start;
    while date <= end {
        let total = habits.iter().filter(|h| h.created_at <= date).count();
        let completed = habits
            .iter()
            .filter(|h| h.history_on(date).map(|e| e.completed).unwrap_or(false))
            .count();
        days.push(DaySummary {
            date,
            completed,
            total,
            percentage: rounded_percent(completed, total),
        });
        date += Duration::days(1);
    }
    days
}

/// The last seven days, ending on `end`
pub fn week_summary(habits: &[Habit], end: NaiveDate) -> Vec<DaySummary> {
    range_summary(habits, end - Duration::days(6), end)
}

/// Per-day tallies for a whole calendar month (the calendar heatmap)
pub fn month_summary(habits: &[Habit], year: i32, month: u32) -> Vec<DaySummary> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let last = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .map(|d| d.pred_opt().unwrap_or(first))
    .unwrap_or(first);

    range_summary(habits, first, last)
}

/// Aggregate completion percentage across a set of day tallies: sum of
/// per-day completed counts over sum of per-day totals
pub fn aggregate_rate(days: &[DaySummary]) -> u32 {
    let completed: usize = days.iter().map(|d| d.completed).sum();
    let total: usize = days.iter().map(|d| d.total).sum();
    rounded_percent(completed, total)
}

/// Habit counts per category, in the closed set's display order
pub fn category_distribution(habits: &[Habit]) -> Vec<CategoryCount> {
    Category::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: habits.iter().filter(|h| h.category == category).count(),
        })
        .collect()
}

/// The habit with the best running streak, if any are running
pub fn current_streak_leader(habits: &[Habit]) -> Option<&Habit> {
    habits.iter().filter(|h| h.streak > 0).max_by_key(|h| h.streak)
}

/// The habit with the best streak ever recorded
pub fn longest_streak_leader(habits: &[Habit]) -> Option<&Habit> {
    habits
        .iter()
        .filter(|h| h.longest_streak > 0)
        .max_by_key(|h| h.longest_streak)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompletionEntry, Difficulty, Frequency, HabitDraft, HabitId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn habit(id: u64, name: &str, category: Category, created: NaiveDate) -> Habit {
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
        Habit::from_draft(HabitId(id), draft, created)
    }

    #[test]
    fn test_completion_rate_rounds() {
        let mut h = habit(1, "Read", Category::Learning, date(2025, 3, 1));
        h.completion_history = vec![
            CompletionEntry::new(date(2025, 3, 1), true),
            CompletionEntry::new(date(2025, 3, 2), true),
            CompletionEntry::new(date(2025, 3, 3), false),
        ];
        assert_eq!(completion_rate(&h), 67);
    }

    #[test]
    fn test_completion_rate_empty_history_is_zero() {
        let h = habit(1, "Read", Category::Learning, date(2025, 3, 1));
        assert_eq!(completion_rate(&h), 0);
    }

    #[test]
    fn test_today_progress_counts_flags() {
        let mut a = habit(1, "A", Category::Health, date(2025, 3, 1));
        let b = habit(2, "B", Category::Mind, date(2025, 3, 1));
        a.completed = true;

        let progress = today_progress(&[a, b]);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 2);
        assert_eq!(progress.percentage, 50);
    }

    #[test]
    fn test_today_progress_with_no_habits() {
        assert_eq!(today_progress(&[]).percentage, 0);
    }

    #[test]
    fn test_range_summary_respects_creation_date() {
        let mut early = habit(1, "Early", Category::Health, date(2025, 3, 1));
        early.completion_history = vec![CompletionEntry::new(date(2025, 3, 2), true)];
        let late = habit(2, "Late", Category::Mind, date(2025, 3, 3));

        let days = range_summary(&[early, late], date(2025, 3, 2), date(2025, 3, 3));
        assert_eq!(days.len(), 2);
        // March 2nd: only the early habit exists, and it completed
        assert_eq!(days[0].total, 1);
        assert_eq!(days[0].completed, 1);
        assert_eq!(days[0].percentage, 100);
        // March 3rd: both exist, neither completed
        assert_eq!(days[1].total, 2);
        assert_eq!(days[1].completed, 0);
    }

    #[test]
    fn test_aggregate_rate_sums_days() {
        let days = vec![
            DaySummary { date: date(2025, 3, 1), completed: 10, total: 12, percentage: 83 },
            DaySummary { date: date(2025, 3, 2), completed: 8, total: 12, percentage: 67 },
        ];
        // 18 of 24
        assert_eq!(aggregate_rate(&days), 75);
    }

    #[test]
    fn test_week_summary_is_seven_days() {
        let h = habit(1, "A", Category::Health, date(2025, 1, 1));
        let days = week_summary(&[h], date(2025, 3, 9));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, date(2025, 3, 3));
        assert_eq!(days[6].date, date(2025, 3, 9));
    }

    #[test]
    fn test_month_summary_covers_whole_month() {
        let h = habit(1, "A", Category::Health, date(2025, 1, 1));
        assert_eq!(month_summary(&[h], 2025, 2).len(), 28);
        assert_eq!(month_summary(&[], 2025, 12).len(), 31);
    }

    #[test]
    fn test_category_distribution_keeps_closed_set_order() {
        let habits = vec![
            habit(1, "A", Category::Fitness, date(2025, 3, 1)),
            habit(2, "B", Category::Learning, date(2025, 3, 1)),
            habit(3, "C", Category::Fitness, date(2025, 3, 1)),
        ];
        let dist = category_distribution(&habits);
        assert_eq!(dist.len(), 6);
        assert_eq!(dist[1].category, Category::Learning);
        assert_eq!(dist[1].count, 1);
        assert_eq!(dist[3].category, Category::Fitness);
        assert_eq!(dist[3].count, 2);
        assert_eq!(dist[5].count, 0);
    }

    #[test]
    fn test_streak_leaders() {
        let mut a = habit(1, "A", Category::Health, date(2025, 3, 1));
        let mut b = habit(2, "B", Category::Mind, date(2025, 3, 1));
        a.streak = 3;
        a.longest_streak = 10;
        b.streak = 7;
        b.longest_streak = 8;

        let habits = vec![a, b];
        assert_eq!(current_streak_leader(&habits).unwrap().id, HabitId(2));
        assert_eq!(longest_streak_leader(&habits).unwrap().id, HabitId(1));
        assert!(current_streak_leader(&[]).is_none());
    }
}
