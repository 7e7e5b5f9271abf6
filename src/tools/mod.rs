/// Operation handlers behind the serving surface
///
/// Each tool is a typed params/response pair plus a handler that mediates the
/// two state containers: it calls HabitStore first, then reports the outcome
/// to ActivityLog. This is the only place that decides what gets logged, so
/// an operation has exactly one log site.

pub mod create;
pub mod update;
pub mod toggle;
pub mod lifecycle;
pub mod notes;
pub mod list;
pub mod activity;
pub mod insights;

// Re-export tool functions for easy access
pub use create::*;
pub use update::*;
pub use toggle::*;
pub use lifecycle::*;
pub use notes::*;
pub use list::*;
pub use activity::*;
pub use insights::*;

use crate::domain::{DomainError, Frequency};

/// Parse the frequency fields shared by the create and update forms
///
/// `frequency` selects the variant; `days` feeds the weekly variant and
/// `every_days` the custom one.
pub(crate) fn parse_frequency(
    frequency: &str,
    days: Option<&[String]>,
    every_days: Option<u32>,
) -> Result<Frequency, DomainError> {
    let parsed = match frequency.trim().to_lowercase().as_str() {
        "daily" => Frequency::Daily,
        "weekly" => {
            let days = days.unwrap_or_default();
            let mut weekdays = Vec::with_capacity(days.len());
            for day in days {
                let weekday = day.trim().parse().map_err(|_| {
                    DomainError::InvalidFrequency(format!("Unknown weekday '{}'", day))
                })?;
                weekdays.push(weekday);
            }
            Frequency::Weekly { days: weekdays }
        }
        "custom" => Frequency::Custom { every_days: every_days.unwrap_or(0) },
        other => {
            return Err(DomainError::InvalidFrequency(format!(
                "Invalid frequency '{}'. Valid options: daily, weekly, custom",
                other
            )))
        }
    };

    parsed.validate()?;
    Ok(parsed)
}
