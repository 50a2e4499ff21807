use serde::{Deserialize, Serialize};

/// One launch attempt. Column names follow the dataset header; any columns
/// not listed here are ignored when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "class")]
    pub class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
}

impl LaunchRecord {
    /// `None` when `class` is neither 0 nor 1.
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_class(self.class)
    }

    pub fn is_success(&self) -> bool {
        self.outcome() == Some(Outcome::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            1 => Some(Outcome::Success),
            0 => Some(Outcome::Failure),
            _ => None,
        }
    }

    pub fn class(&self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.label(), "Failure");
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.class(), 0);
    }
}
