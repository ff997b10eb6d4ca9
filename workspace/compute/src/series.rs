use common::{Hormone, HormoneSample};
use tracing::{debug, error, instrument};

use crate::error::{ComputeError, Result};

/// Ordered hormone readings with strictly increasing days.
#[derive(Debug, Clone, PartialEq)]
pub struct HormoneSeries {
    samples: Vec<HormoneSample>,
}

fn invalid(message: String) -> ComputeError {
    let err = ComputeError::InvalidSeries(message);
    error!(?err, "Rejected hormone series");
    err
}

impl HormoneSeries {
    /// Validates the readings and wraps them.
    ///
    /// Days must start at 1 or later and strictly increase. Every reading
    /// must be finite and non-negative.
    #[instrument(skip(samples), fields(len = samples.len()))]
    pub fn new(samples: Vec<HormoneSample>) -> Result<Self> {
        let mut previous_day: Option<u32> = None;

        for sample in &samples {
            if sample.day == 0 {
                return Err(invalid("cycle days start at 1".to_string()));
            }

            if let Some(previous) = previous_day {
                if sample.day <= previous {
                    return Err(invalid(format!(
                        "day {} does not follow day {}",
                        sample.day, previous
                    )));
                }
            }

            for hormone in Hormone::ALL {
                let value = sample.reading(hormone);
                if !value.is_finite() || value < 0.0 {
                    return Err(invalid(format!(
                        "{} reading {} on day {} is out of range",
                        hormone.short_name(),
                        value,
                        sample.day
                    )));
                }
            }

            previous_day = Some(sample.day);
        }

        debug!("Hormone series validated");
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn days(&self) -> Vec<u32> {
        self.samples.iter().map(|s| s.day).collect()
    }

    pub fn readings(&self, hormone: Hormone) -> Vec<f64> {
        self.samples.iter().map(|s| s.reading(hormone)).collect()
    }

    /// Sample with the highest reading for `hormone`. The earliest day wins ties.
    pub fn peak(&self, hormone: Hormone) -> Option<&HormoneSample> {
        self.samples.iter().fold(None, |best, sample| match best {
            Some(current) if current.reading(hormone) >= sample.reading(hormone) => Some(current),
            _ => Some(sample),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(day: u32, lh: f64) -> HormoneSample {
        HormoneSample::new(day, lh, 50.0, 0.5)
    }

    #[test]
    fn test_accepts_increasing_days() {
        let series = HormoneSeries::new(vec![sample(1, 5.0), sample(3, 6.0), sample(4, 2.0)])
            .expect("Should accept increasing days");

        assert_eq!(series.len(), 3);
        assert_eq!(series.days(), vec![1, 3, 4]);
        assert_eq!(series.readings(Hormone::Lh), vec![5.0, 6.0, 2.0]);
    }

    #[test]
    fn test_empty_series_is_valid() {
        let series = HormoneSeries::new(Vec::new()).unwrap();
        assert!(series.is_empty());
        assert!(series.peak(Hormone::Lh).is_none());
    }

    #[test]
    fn test_rejects_repeated_day() {
        let err = HormoneSeries::new(vec![sample(2, 5.0), sample(2, 6.0)]).unwrap_err();
        assert!(matches!(err, ComputeError::InvalidSeries(_)));
    }

    #[test]
    fn test_rejects_decreasing_day() {
        let err = HormoneSeries::new(vec![sample(5, 5.0), sample(3, 6.0)]).unwrap_err();
        assert_eq!(
            err,
            ComputeError::InvalidSeries("day 3 does not follow day 5".to_string())
        );
    }

    #[test]
    fn test_rejects_day_zero() {
        assert!(HormoneSeries::new(vec![sample(0, 5.0)]).is_err());
    }

    #[test]
    fn test_rejects_negative_and_non_finite_readings() {
        assert!(HormoneSeries::new(vec![sample(1, -0.1)]).is_err());
        assert!(HormoneSeries::new(vec![HormoneSample::new(1, 1.0, f64::NAN, 0.5)]).is_err());
        assert!(HormoneSeries::new(vec![HormoneSample::new(1, 1.0, 1.0, f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_peak_prefers_earliest_day_on_tie() {
        let series = HormoneSeries::new(vec![sample(1, 5.0), sample(2, 9.0), sample(3, 9.0)]).unwrap();
        assert_eq!(series.peak(Hormone::Lh).map(|s| s.day), Some(2));
    }
}
