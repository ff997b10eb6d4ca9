use chrono::NaiveDate;
use common::{CycleSummary, InsightSummary};

use crate::error::Result;
use crate::series::HormoneSeries;

/// Provider of everything the dashboard displays.
///
/// The dashboard only talks to this trait, so a real backend or device
/// integration can replace [`crate::sample::SampleDataSource`] without
/// touching rendering.
pub trait CycleDataSource {
    /// Cycle position and predictions as seen on `as_of`.
    fn current_summary(&self, as_of: NaiveDate) -> Result<CycleSummary>;

    fn insights(&self) -> Result<InsightSummary>;

    fn hormone_history(&self) -> Result<HormoneSeries>;
}
