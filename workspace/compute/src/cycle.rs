use chrono::{Duration, NaiveDate};
use common::CycleSummary;
use tracing::{debug, error, instrument};

use crate::error::{ComputeError, Result};

/// Stored cycle position that summaries are derived from.
///
/// Offsets are signed day counts relative to the as-of date. They are not
/// reconciled with `current_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleAnchor {
    pub current_day: u32,
    pub cycle_length: u32,
    pub period_offset_days: i64,
    pub fertile_start_offset_days: i64,
    pub fertile_end_offset_days: i64,
}

fn invalid(message: String) -> ComputeError {
    let err = ComputeError::InvalidAnchor(message);
    error!(?err, "Rejected cycle anchor");
    err
}

fn shift(as_of: NaiveDate, days: i64) -> Result<NaiveDate> {
    Duration::try_days(days)
        .and_then(|delta| as_of.checked_add_signed(delta))
        .ok_or_else(|| invalid(format!("offset of {} days from {} is out of range", days, as_of)))
}

impl CycleAnchor {
    pub fn validate(&self) -> Result<()> {
        if self.cycle_length == 0 {
            return Err(invalid("cycle length must be at least one day".to_string()));
        }

        if self.current_day == 0 || self.current_day > self.cycle_length {
            return Err(invalid(format!(
                "cycle day {} is outside a {}-day cycle",
                self.current_day, self.cycle_length
            )));
        }

        if self.fertile_start_offset_days > self.fertile_end_offset_days {
            return Err(invalid(format!(
                "fertile window starts at {:+} days but ends at {:+} days",
                self.fertile_start_offset_days, self.fertile_end_offset_days
            )));
        }

        Ok(())
    }

    /// Derives the cycle summary as seen on `as_of`.
    #[instrument(skip(self), fields(current_day = self.current_day))]
    pub fn summarize(&self, as_of: NaiveDate) -> Result<CycleSummary> {
        self.validate()?;

        let summary = CycleSummary {
            current_day: self.current_day,
            cycle_length: self.cycle_length,
            period_start_date: shift(as_of, self.period_offset_days)?,
            fertile_window_start: shift(as_of, self.fertile_start_offset_days)?,
            fertile_window_end: shift(as_of, self.fertile_end_offset_days)?,
        };

        debug!(?summary, "Derived cycle summary");
        Ok(summary)
    }
}
