pub mod cycle;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod insight;
pub mod notice;
pub mod sample;
pub mod series;
pub mod source;
pub mod view;

use chrono::NaiveDate;

use dashboard::DashboardState;
use error::Result;
use sample::SampleDataSource;

/// Returns the data source the dashboard uses until a real provider is wired in.
pub fn default_source() -> SampleDataSource {
    SampleDataSource::new()
}

/// Initializes dashboard state from the default source.
///
/// `as_of` is the date predictions are relative to. Callers read the clock,
/// this crate never does.
pub fn default_dashboard(as_of: NaiveDate) -> Result<DashboardState> {
    DashboardState::initialize(&default_source(), as_of)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dashboard_is_deterministic() {
        let as_of = NaiveDate::from_ymd_opt(2026, 6, 22).unwrap();

        let first = default_dashboard(as_of).expect("Default dashboard should load");
        let second = default_dashboard(as_of).expect("Default dashboard should load");

        assert_eq!(first, second);
        assert_eq!(
            first.cycle.period_start_date,
            NaiveDate::from_ymd_opt(2026, 7, 6).unwrap()
        );
    }
}
