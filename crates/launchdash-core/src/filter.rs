use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LaunchDashError, Result};

/// Dropdown value meaning "no site restriction".
pub const ALL_SITES: &str = "ALL";

/// Current value of the launch site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Exact match against the sentinel; anything else names a site verbatim.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(site) => Some(site),
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive payload interval selected on the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(LaunchDashError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl From<PayloadBounds> for PayloadRange {
    fn from(bounds: PayloadBounds) -> Self {
        Self {
            low: bounds.min,
            high: bounds.max,
        }
    }
}

/// Observed minimum and maximum payload of the loaded table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::parse("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".into())
        );
        // no case folding
        assert_eq!(SiteSelection::parse("all"), SiteSelection::Site("all".into()));
    }

    #[test]
    fn test_selection_display() {
        assert_eq!(SiteSelection::All.to_string(), "ALL");
        assert_eq!(SiteSelection::parse("CCAFS LC-40").to_string(), "CCAFS LC-40");
        assert_eq!(SiteSelection::All.site(), None);
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 2000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(2000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(2000.1));
    }

    #[test]
    fn test_range_rejects_reversed_and_nan() {
        assert!(matches!(
            PayloadRange::new(5.0, 1.0),
            Err(LaunchDashError::InvalidRange { .. })
        ));
        assert!(PayloadRange::new(f64::NAN, 1.0).is_err());
        assert!(PayloadRange::new(0.0, f64::INFINITY).is_err());
        assert!(PayloadRange::new(3.0, 3.0).is_ok());
    }
}
