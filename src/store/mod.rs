/// State containers for habits and the activity feed
///
/// The two containers are independent of each other: HabitStore owns the
/// habit and note collections, ActivityLog owns the event feed. The serving
/// layer is the sole mediator that calls both in sequence.

pub mod habits;
pub mod activity;

pub use habits::{HabitStore, ToggleOutcome};
pub use activity::{ActivityLog, MAX_ACTIVITIES};
