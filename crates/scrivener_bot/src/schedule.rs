//! Job schedules.
//!
//! Both daily wall-clock times and cron expressions compute their next run
//! from an explicit reference time, so callers control the clock.

use chrono::{DateTime, NaiveTime, TimeZone};
use scrivener_error::ConfigError;
use std::str::FromStr;

/// Format of daily schedule times in settings (`"09:00"`).
pub const DAILY_TIME_FORMAT: &str = "%H:%M";

/// Trait for schedules that can determine when a job should run next.
pub trait Schedule {
    /// Calculate the next execution time strictly after `after`.
    ///
    /// The result is in the same time zone as `after`. Returns `None` if the
    /// schedule is exhausted.
    fn next_execution<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>>;
}

/// When a job runs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScheduleType {
    /// Once a day at a fixed local wall-clock time.
    #[display("daily at {}", at.format(DAILY_TIME_FORMAT))]
    Daily {
        /// Time of day
        at: NaiveTime,
    },

    /// Cron expression (7 fields: sec min hour day month weekday year)
    ///
    /// Example: "0 0 9 * * * *" = 9 AM daily
    #[display("cron '{}'", expression)]
    Cron {
        /// Cron expression string
        expression: String,
    },
}

impl ScheduleType {
    /// Daily schedule at `at`.
    pub fn daily(at: NaiveTime) -> Self {
        Self::Daily { at }
    }

    /// Check that the schedule can produce run times.
    ///
    /// # Errors
    ///
    /// Returns error if a cron expression does not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Daily { .. } => Ok(()),
            Self::Cron { expression } => cron::Schedule::from_str(expression)
                .map(|_| ())
                .map_err(|e| ConfigError::new(format!("Invalid cron expression '{expression}': {e}"))),
        }
    }
}

impl FromStr for ScheduleType {
    type Err = ConfigError;

    /// Parse `"HH:MM"` as a daily time, anything else as a cron expression.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(at) = NaiveTime::parse_from_str(s, DAILY_TIME_FORMAT) {
            return Ok(Self::Daily { at });
        }
        if !s.contains(' ') {
            return Err(ConfigError::new(format!(
                "Invalid schedule '{s}': expected HH:MM or a cron expression"
            )));
        }
        let schedule = Self::Cron {
            expression: s.to_string(),
        };
        schedule.validate()?;
        Ok(schedule)
    }
}

impl Schedule for ScheduleType {
    fn next_execution<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        match self {
            ScheduleType::Daily { at } => next_daily(*at, after),
            ScheduleType::Cron { expression } => cron::Schedule::from_str(expression)
                .ok()
                .and_then(|schedule| schedule.after(after).next()),
        }
    }
}

/// Today at `at` if still ahead of `after`, otherwise the next day that has it.
///
/// Days where `at` falls into a DST gap are skipped.
fn next_daily<Tz: TimeZone>(at: NaiveTime, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let tz = after.timezone();
    let mut date = after.date_naive();

    for _ in 0..3 {
        if let Some(candidate) = tz.from_local_datetime(&date.and_time(at)).earliest()
            && candidate > *after
        {
            return Some(candidate);
        }
        date = date.succ_opt()?;
    }
    None
}
