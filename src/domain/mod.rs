/// Domain module containing core entities and their validation rules
///
/// This module defines the core entities (Habit, HabitNote, Activity) and the
/// shared value types they are built from. Validation lives at the form-input
/// boundary (HabitDraft / HabitPatch); the state containers trust their input.

pub mod habit;
pub mod note;
pub mod activity;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use note::*;
pub use activity::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain validation
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
