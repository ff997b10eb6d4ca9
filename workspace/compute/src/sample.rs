//! Built-in sample data used until a real provider is connected.

use chrono::NaiveDate;
use common::{Confidence, CycleSummary, HormoneSample, InsightSummary};

use crate::cycle::CycleAnchor;
use crate::error::Result;
use crate::insight::validate_insight;
use crate::series::HormoneSeries;
use crate::source::CycleDataSource;

/// (day, lh, e3g, pdg) over a 28-day cycle
const SAMPLE_READINGS: [(u32, f64, f64, f64); 15] = [
    (1, 5.0, 50.0, 0.5),
    (3, 6.0, 60.0, 0.6),
    (5, 7.0, 80.0, 0.7),
    (7, 8.0, 100.0, 0.8),
    (9, 10.0, 150.0, 1.0),
    (11, 20.0, 200.0, 1.2),
    // LH surge
    (13, 45.0, 250.0, 1.5),
    // ovulation
    (14, 15.0, 220.0, 3.0),
    (16, 10.0, 180.0, 8.0),
    (18, 8.0, 150.0, 12.0),
    (20, 7.0, 130.0, 15.0),
    (22, 6.0, 110.0, 13.0),
    (24, 5.0, 90.0, 10.0),
    (26, 5.0, 70.0, 5.0),
    (28, 4.0, 60.0, 1.0),
];

pub fn sample_hormone_readings() -> Vec<HormoneSample> {
    SAMPLE_READINGS
        .iter()
        .map(|&(day, lh, e3g, pdg)| HormoneSample::new(day, lh, e3g, pdg))
        .collect()
}

pub fn sample_anchor() -> CycleAnchor {
    CycleAnchor {
        current_day: 14,
        cycle_length: 28,
        period_offset_days: 14,
        fertile_start_offset_days: -3,
        fertile_end_offset_days: 2,
    }
}

pub fn sample_insight() -> InsightSummary {
    InsightSummary {
        fertility_score: 8,
        confidence: Confidence::High,
        insight: "High chance of conception today based on typical patterns and recent inputs."
            .to_string(),
    }
}

/// Data source backed by fixed literals.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDataSource {
    anchor: CycleAnchor,
}

impl SampleDataSource {
    pub fn new() -> Self {
        Self::with_anchor(sample_anchor())
    }

    pub fn with_anchor(anchor: CycleAnchor) -> Self {
        Self { anchor }
    }
}

impl Default for SampleDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDataSource for SampleDataSource {
    fn current_summary(&self, as_of: NaiveDate) -> Result<CycleSummary> {
        self.anchor.summarize(as_of)
    }

    fn insights(&self) -> Result<InsightSummary> {
        let insight = sample_insight();
        validate_insight(&insight)?;
        Ok(insight)
    }

    fn hormone_history(&self) -> Result<HormoneSeries> {
        HormoneSeries::new(sample_hormone_readings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Hormone;

    #[test]
    fn test_sample_series_shape() {
        let series = SampleDataSource::new().hormone_history().expect("Sample series is valid");

        assert_eq!(series.len(), 15);
        assert!(series.days().windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(series.days().first(), Some(&1));
        assert_eq!(series.days().last(), Some(&28));
    }

    #[test]
    fn test_lh_peak_on_day_thirteen() {
        let series = SampleDataSource::new().hormone_history().unwrap();
        let peak = series.peak(Hormone::Lh).expect("Series is not empty");

        assert_eq!(peak.day, 13);
        assert_eq!(peak.lh, 45.0);
    }

    #[test]
    fn test_pdg_rises_after_ovulation() {
        let series = SampleDataSource::new().hormone_history().unwrap();
        assert_eq!(series.peak(Hormone::Pdg).map(|s| s.day), Some(20));
        assert_eq!(series.peak(Hormone::E3g).map(|s| s.day), Some(13));
    }

    #[test]
    fn test_initial_insight() {
        let insight = SampleDataSource::new().insights().unwrap();

        assert_eq!(insight.fertility_score, 8);
        assert_eq!(insight.confidence, Confidence::High);
        assert!(insight.insight.starts_with("High chance of conception"));
    }

    #[test]
    fn test_summary_uses_anchor() {
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let summary = SampleDataSource::new().current_summary(as_of).unwrap();

        assert_eq!(summary.current_day, 14);
        assert_eq!(summary.period_start_date, NaiveDate::from_ymd_opt(2024, 6, 19).unwrap());
    }

    #[test]
    fn test_invalid_anchor_surfaces_error() {
        let source = SampleDataSource::with_anchor(CycleAnchor {
            current_day: 40,
            ..sample_anchor()
        });
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();

        assert!(source.current_summary(as_of).is_err());
    }
}
