use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::filter::{PayloadBounds, ALL_SITES};
use crate::table::LaunchTable;

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

/// Static widget tree of the page, built once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Heading,
    pub site_dropdown: Dropdown,
    pub pie_chart: ChartPanel,
    pub payload_label: String,
    pub payload_slider: RangeSlider,
    pub scatter_chart: ChartPanel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub text: String,
    pub text_align: String,
    pub color: String,
    pub font_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPanel {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Selected `[low, high]`.
    pub value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl Layout {
    pub fn build(table: &LaunchTable, bounds: PayloadBounds, slider: &SliderConfig) -> Self {
        let options = std::iter::once(DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        })
        .chain(table.launch_sites().into_iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }))
        .collect();

        Self {
            title: Heading {
                text: DASHBOARD_TITLE.to_string(),
                text_align: "center".to_string(),
                color: "#503D36".to_string(),
                font_size: 40,
            },
            site_dropdown: Dropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            pie_chart: ChartPanel {
                id: PIE_CHART_ID.to_string(),
            },
            payload_label: "Payload range (Kg):".to_string(),
            payload_slider: RangeSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                min: slider.min,
                max: slider.max,
                step: slider.step,
                marks: slider_marks(slider),
                value: [bounds.min, bounds.max],
            },
            scatter_chart: ChartPanel {
                id: SCATTER_CHART_ID.to_string(),
            },
        }
    }
}

fn slider_marks(slider: &SliderConfig) -> Vec<SliderMark> {
    if slider.mark_every <= 0.0 || slider.max < slider.min {
        return Vec::new();
    }
    let count = ((slider.max - slider.min) / slider.mark_every).floor() as usize;
    (0..=count)
        .map(|i| slider.min + slider.mark_every * i as f64)
        .map(|value| SliderMark {
            value,
            label: format!("{}", value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::sample_table;

    fn sample_layout() -> Layout {
        let table = sample_table();
        Layout::build(&table, table.payload_bounds(), &SliderConfig::default())
    }

    #[test]
    fn test_dropdown_options() {
        let layout = sample_layout();
        let values: Vec<&str> = layout
            .site_dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(
            values,
            vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        assert_eq!(layout.site_dropdown.options[0].label, "All Sites");
        assert_eq!(layout.site_dropdown.value, "ALL");
        assert!(layout.site_dropdown.searchable);
    }

    #[test]
    fn test_slider_domain_and_default() {
        let slider = sample_layout().payload_slider;
        assert_eq!(slider.id, "payload-slider");
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 10_000.0);
        assert_eq!(slider.step, 1_000.0);
        assert_eq!(slider.value, [0.0, 9600.0]);

        let marks: Vec<f64> = slider.marks.iter().map(|m| m.value).collect();
        assert_eq!(marks, vec![0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10_000.0]);
        assert_eq!(slider.marks[1].label, "2000");
    }

    #[test]
    fn test_panel_ids() {
        let layout = sample_layout();
        assert_eq!(layout.title.text, "SpaceX Launch Records Dashboard");
        assert_eq!(layout.pie_chart.id, "success-pie-chart");
        assert_eq!(layout.scatter_chart.id, "success-payload-scatter-chart");
    }

    #[test]
    fn test_marks_with_degenerate_config() {
        let slider = SliderConfig {
            mark_every: 0.0,
            ..SliderConfig::default()
        };
        assert!(slider_marks(&slider).is_empty());
    }
}
