use common::InsightSummary;
use tracing::error;

use crate::error::{ComputeError, Result};

/// Highest fertility score an insight may carry.
pub const MAX_FERTILITY_SCORE: u8 = 10;

/// Checks that an insight coming from a provider can be displayed.
pub fn validate_insight(insight: &InsightSummary) -> Result<()> {
    if insight.fertility_score > MAX_FERTILITY_SCORE {
        let err = ComputeError::InvalidInsight(format!(
            "fertility score {} exceeds {}",
            insight.fertility_score, MAX_FERTILITY_SCORE
        ));
        error!(?err, "Rejected insight");
        return Err(err);
    }

    Ok(())
}
