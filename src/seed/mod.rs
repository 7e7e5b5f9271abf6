/// Deterministic demo data
///
/// The application keeps all habit state in memory and re-seeds it at every
/// start. This module builds the canonical demo collections from a seed
/// value, so two runs with the same seed produce identical data. The core
/// containers never call into here; the binary composes the pieces at
/// startup.

use chrono::{Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{
    Category, CompletionEntry, Difficulty, Frequency, Habit, HabitId, HabitNote, Mood, NoteId,
};

/// Seeded collections plus the ID watermark the live counters start above
pub struct SeedData {
    pub habits: Vec<Habit>,
    pub archived: Vec<Habit>,
    pub notes: Vec<HabitNote>,
    pub next_id: u64,
}

struct SeedHabit {
    name: &'static str,
    category: Category,
    goal: &'static str,
    icon: &'static str,
    frequency: Frequency,
    difficulty: Difficulty,
    streak: u32,
    longest_streak: u32,
    completed: bool,
    created_days_ago: i64,
    archived: bool,
}

fn weekly(days: &[chrono::Weekday]) -> Frequency {
    Frequency::Weekly { days: days.to_vec() }
}

fn seed_habits() -> Vec<SeedHabit> {
    use chrono::Weekday::*;

    vec![
        SeedHabit {
            name: "Read 20 Pages",
            category: Category::Learning,
            goal: "Read at least 20 pages of a book every day",
            icon: "BookOpen",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Medium,
            streak: 23,
            longest_streak: 45,
            completed: true,
            created_days_ago: 70,
            archived: false,
        },
        SeedHabit {
            name: "Meditate 10 min",
            category: Category::Mind,
            goal: "Practice mindfulness meditation for 10 minutes",
            icon: "Brain",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Easy,
            streak: 15,
            longest_streak: 30,
            completed: false,
            created_days_ago: 86,
            archived: false,
        },
        SeedHabit {
            name: "Drink 3L Water",
            category: Category::Health,
            goal: "Stay hydrated with 3 liters of water daily",
            icon: "Droplets",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Easy,
            streak: 45,
            longest_streak: 45,
            completed: true,
            created_days_ago: 131,
            archived: false,
        },
        SeedHabit {
            name: "Morning Run 5K",
            category: Category::Fitness,
            goal: "Complete a 5 kilometer run before 8 AM",
            icon: "Footprints",
            frequency: weekly(&[Mon, Wed, Fri]),
            difficulty: Difficulty::Hard,
            streak: 8,
            longest_streak: 21,
            completed: true,
            created_days_ago: 56,
            archived: false,
        },
        SeedHabit {
            name: "No Social Media",
            category: Category::Productivity,
            goal: "Avoid social media until after 6 PM",
            icon: "Smartphone",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Hard,
            streak: 12,
            longest_streak: 20,
            completed: false,
            created_days_ago: 61,
            archived: false,
        },
        SeedHabit {
            name: "Call Family",
            category: Category::Social,
            goal: "Call a family member to check in",
            icon: "Phone",
            frequency: weekly(&[Sun]),
            difficulty: Difficulty::Easy,
            streak: 5,
            longest_streak: 14,
            completed: true,
            created_days_ago: 51,
            archived: false,
        },
        SeedHabit {
            name: "Code 1 Hour",
            category: Category::Learning,
            goal: "Practice coding for at least 1 hour",
            icon: "Code",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Medium,
            streak: 30,
            longest_streak: 60,
            completed: true,
            created_days_ago: 161,
            archived: false,
        },
        SeedHabit {
            name: "Stretch 15 min",
            category: Category::Fitness,
            goal: "Complete 15 minutes of stretching",
            icon: "PersonStanding",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Easy,
            streak: 18,
            longest_streak: 25,
            completed: false,
            created_days_ago: 81,
            archived: false,
        },
        SeedHabit {
            name: "Journal Entry",
            category: Category::Mind,
            goal: "Write a journal entry reflecting on the day",
            icon: "PenLine",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Easy,
            streak: 10,
            longest_streak: 22,
            completed: true,
            created_days_ago: 66,
            archived: false,
        },
        SeedHabit {
            name: "Healthy Breakfast",
            category: Category::Health,
            goal: "Eat a nutritious breakfast with protein",
            icon: "Apple",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Medium,
            streak: 28,
            longest_streak: 35,
            completed: true,
            created_days_ago: 100,
            archived: false,
        },
        SeedHabit {
            name: "Learn Language",
            category: Category::Learning,
            goal: "Practice Duolingo for 15 minutes",
            icon: "Languages",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Medium,
            streak: 67,
            longest_streak: 67,
            completed: true,
            created_days_ago: 192,
            archived: false,
        },
        SeedHabit {
            name: "Evening Walk",
            category: Category::Fitness,
            goal: "Take a 20-minute walk after dinner",
            icon: "TreePine",
            frequency: Frequency::Custom { every_days: 2 },
            difficulty: Difficulty::Easy,
            streak: 3,
            longest_streak: 15,
            completed: false,
            created_days_ago: 46,
            archived: false,
        },
        SeedHabit {
            name: "Cold Shower",
            category: Category::Health,
            goal: "End every shower with 60 seconds of cold water",
            icon: "Snowflake",
            frequency: Frequency::Daily,
            difficulty: Difficulty::Hard,
            streak: 0,
            longest_streak: 9,
            completed: false,
            created_days_ago: 120,
            archived: true,
        },
        SeedHabit {
            name: "Inbox Zero",
            category: Category::Productivity,
            goal: "Clear the email inbox before end of day",
            icon: "Mail",
            frequency: weekly(&[Mon, Tue, Wed, Thu, Fri]),
            difficulty: Difficulty::Medium,
            streak: 2,
            longest_streak: 11,
            completed: false,
            created_days_ago: 95,
            archived: true,
        },
    ]
}

/// Generate a completion history consistent with the habit's current streak:
/// a trailing run of completed days, a broken day right before it, and a
/// seeded mix further back.
fn generate_history(
    rng: &mut StdRng,
    created_at: NaiveDate,
    today: NaiveDate,
    streak: u32,
    completed_today: bool,
) -> Vec<CompletionEntry> {
    let days_since_creation = (today - created_at).num_days().max(0);
    let window = days_since_creation.min(60.max(streak as i64 + 14));

    // The trailing run ends today when today is already done, otherwise
    // yesterday
    let run_end = if completed_today { today } else { today - Duration::days(1) };
    let run_start = run_end - Duration::days(streak.saturating_sub(1) as i64);

    let mut history = Vec::new();
    let mut date = today - Duration::days(window);
    while date <= today {
        let in_run = streak > 0 && date >= run_start && date <= run_end;
        if in_run {
            history.push(CompletionEntry::new(date, true));
        } else if streak > 0 && date == run_start - Duration::days(1) {
            // The day the previous streak broke
            history.push(CompletionEntry::new(date, false));
        } else if date < run_start {
            // Older window: mostly done, occasionally toggled off, sometimes
            // no entry at all
            let roll: f64 = rng.gen();
            if roll < 0.68 {
                history.push(CompletionEntry::new(date, true));
            } else if roll < 0.78 {
                history.push(CompletionEntry::new(date, false));
            }
        } else if date == today && completed_today {
            history.push(CompletionEntry::new(date, true));
        }
        date += Duration::days(1);
    }

    history
}

struct SeedNote {
    habit_index: usize,
    content: &'static str,
    mood: Option<Mood>,
    days_ago: i64,
}

fn seed_notes() -> Vec<SeedNote> {
    vec![
        SeedNote { habit_index: 0, content: "Currently reading Atomic Habits", mood: Some(Mood::Happy), days_ago: 1 },
        SeedNote { habit_index: 1, content: "Using Headspace app", mood: Some(Mood::Neutral), days_ago: 3 },
        SeedNote { habit_index: 2, content: "Track with water bottle markings", mood: None, days_ago: 2 },
        SeedNote { habit_index: 3, content: "Training for half marathon", mood: Some(Mood::Happy), days_ago: 5 },
        SeedNote { habit_index: 10, content: "Learning Spanish", mood: Some(Mood::Happy), days_ago: 1 },
        SeedNote { habit_index: 7, content: "Focus on hip flexors", mood: Some(Mood::Neutral), days_ago: 8 },
    ]
}

/// Build the demo collections
///
/// Same `seed` and `today` produce identical habits, histories, and notes.
pub fn demo_data(seed: u64, today: NaiveDate) -> SeedData {
    let mut next_id = 1u64;
    let mut habits = Vec::new();
    let mut archived = Vec::new();

    for row in seed_habits() {
        let id = HabitId(next_id);
        next_id += 1;

        let created_at = today - Duration::days(row.created_days_ago);
        // Per-habit stream so one habit's history doesn't shift another's
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(id.0 * 0x9e37));
        let completion_history =
            generate_history(&mut rng, created_at, today, row.streak, row.completed);
        let total_completions = completion_history.iter().filter(|e| e.completed).count() as u32;

        let habit = Habit {
            id,
            name: row.name.to_string(),
            category: row.category,
            goal: row.goal.to_string(),
            icon: row.icon.to_string(),
            color: row.category.accent_hex().to_string(),
            frequency: row.frequency,
            reminder_enabled: false,
            reminder_time: None,
            difficulty: row.difficulty,
            completed: row.completed,
            streak: row.streak,
            longest_streak: row.longest_streak.max(row.streak),
            total_completions,
            completion_history,
            archived: row.archived,
            created_at,
        };

        if row.archived {
            archived.push(habit);
        } else {
            habits.push(habit);
        }
    }

    let mut notes = Vec::new();
    let active_ids: Vec<HabitId> = habits.iter().map(|h| h.id).collect();
    for row in seed_notes() {
        let Some(&habit_id) = active_ids.get(row.habit_index) else {
            continue;
        };
        let id = NoteId(next_id);
        next_id += 1;
        let date = today - Duration::days(row.days_ago);
        notes.push(HabitNote::new(
            id,
            habit_id,
            date,
            row.content.to_string(),
            row.mood,
            Utc::now() - Duration::days(row.days_ago),
        ));
    }
    // Newest first, like live inserts
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    SeedData { habits, archived, notes, next_id }
}
