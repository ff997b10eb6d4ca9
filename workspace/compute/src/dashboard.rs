use chrono::NaiveDate;
use common::{CycleSummary, InsightSummary};
use tracing::{info, instrument};

use crate::error::Result;
use crate::series::HormoneSeries;
use crate::source::CycleDataSource;

/// Everything the dashboard shows apart from the transient notice.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub as_of: NaiveDate,
    pub cycle: CycleSummary,
    pub insight: InsightSummary,
    pub hormones: HormoneSeries,
}

impl DashboardState {
    /// Loads all records from `source` as seen on `as_of`.
    #[instrument(skip(source))]
    pub fn initialize(source: &dyn CycleDataSource, as_of: NaiveDate) -> Result<Self> {
        let cycle = source.current_summary(as_of)?;
        let insight = source.insights()?;
        let hormones = source.hormone_history()?;

        info!(samples = hormones.len(), "Dashboard state initialized");
        Ok(Self {
            as_of,
            cycle,
            insight,
            hormones,
        })
    }
}
