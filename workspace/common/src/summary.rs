use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of where the user is in the current cycle.
///
/// The day counters and the dates are derived independently, nothing
/// here ties `current_day` to the predicted dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSummary {
    pub current_day: u32,
    pub cycle_length: u32,
    /// Predicted start of the next period
    pub period_start_date: NaiveDate,
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
}

/// Confidence attached to an ovulation prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display band for a fertility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score > 7 {
            ScoreBand::Good
        } else if score > 4 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

/// Canned prediction shown on the insights card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSummary {
    /// Score out of 10
    pub fertility_score: u8,
    pub confidence: Confidence,
    pub insight: String,
}

impl InsightSummary {
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.fertility_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_band_thresholds() {
        assert_eq!(ScoreBand::from_score(10), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(8), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(7), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(5), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(4), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Poor);
    }

    #[test]
    fn test_confidence_display() {
        assert_eq!(Confidence::High.to_string(), "High");
        assert_eq!(Confidence::Low.as_str(), "Low");
    }

    #[test]
    fn test_summary_round_trips_dates_as_iso() {
        let summary = CycleSummary {
            current_day: 14,
            cycle_length: 28,
            period_start_date: NaiveDate::from_ymd_opt(2024, 6, 19).unwrap(),
            fertile_window_start: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            fertile_window_end: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["period_start_date"], "2024-06-19");

        let back: CycleSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }
}
