use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/spacex_launch_dash.csv";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default)]
    pub slider: SliderConfig,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            slider: SliderConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn with_data_path(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Self::default()
        }
    }
}

/// Display domain of the payload range slider. The selected default comes
/// from the observed payload bounds, not from here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub mark_every: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
            mark_every: 2_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, PathBuf::from("data/spacex_launch_dash.csv"));
        assert_eq!(config.slider.max, 10_000.0);
        assert_eq!(config.slider.step, 1_000.0);
        assert_eq!(config.slider.mark_every, 2_000.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"data_path": "data/launches.csv"}"#).unwrap();
        assert_eq!(config.data_path, PathBuf::from("data/launches.csv"));
        assert_eq!(config.slider.min, 0.0);
        assert_eq!(config.slider.max, 10_000.0);
    }
}
