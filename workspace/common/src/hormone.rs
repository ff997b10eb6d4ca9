use serde::{Deserialize, Serialize};

/// Hormones tracked across a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hormone {
    /// Luteinizing hormone, its surge approximates ovulation
    Lh,
    /// Estrone-3-glucuronide, an estrogen metabolite
    E3g,
    /// Pregnanediol glucuronide, a progesterone metabolite
    Pdg,
}

impl Hormone {
    pub const ALL: [Hormone; 3] = [Hormone::Lh, Hormone::E3g, Hormone::Pdg];

    pub fn short_name(&self) -> &'static str {
        match self {
            Hormone::Lh => "LH",
            Hormone::E3g => "E3G",
            Hormone::Pdg => "PdG",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Hormone::Lh => "mIU/mL",
            Hormone::E3g => "ng/mL",
            Hormone::Pdg => "ug/mL",
        }
    }

    /// Display name with unit, e.g. "LH (mIU/mL)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.short_name(), self.unit())
    }
}

/// One day of hormone readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HormoneSample {
    /// Cycle day, starting at 1
    pub day: u32,
    pub lh: f64,
    pub e3g: f64,
    pub pdg: f64,
}

impl HormoneSample {
    pub fn new(day: u32, lh: f64, e3g: f64, pdg: f64) -> Self {
        Self { day, lh, e3g, pdg }
    }

    pub fn reading(&self, hormone: Hormone) -> f64 {
        match hormone {
            Hormone::Lh => self.lh,
            Hormone::E3g => self.e3g,
            Hormone::Pdg => self.pdg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_deserializes_from_provider_json() {
        let json = r#"{"day": 13, "lh": 45, "e3g": 250, "pdg": 1.5}"#;
        let sample: HormoneSample = serde_json::from_str(json).expect("Should deserialize sample");

        assert_eq!(sample, HormoneSample::new(13, 45.0, 250.0, 1.5));
    }

    #[test]
    fn test_reading_selects_hormone() {
        let sample = HormoneSample::new(14, 15.0, 220.0, 3.0);

        assert_eq!(sample.reading(Hormone::Lh), 15.0);
        assert_eq!(sample.reading(Hormone::E3g), 220.0);
        assert_eq!(sample.reading(Hormone::Pdg), 3.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Hormone::Lh.label(), "LH (mIU/mL)");
        assert_eq!(Hormone::E3g.label(), "E3G (ng/mL)");
        assert_eq!(Hormone::Pdg.label(), "PdG (ug/mL)");
    }

    #[test]
    fn test_hormone_serializes_lowercase() {
        let json = serde_json::to_string(&Hormone::E3g).unwrap();
        assert_eq!(json, "\"e3g\"");
    }
}
