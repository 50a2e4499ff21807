//! Declarative chart descriptions.
//!
//! Handlers return these values; the page script turns them into Plotly
//! traces. Nothing here knows how to draw.

use serde::{Deserialize, Serialize};

use crate::record::Outcome;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }

    /// True when there is nothing to plot.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Pie(pie) => pie.slices.is_empty(),
            ChartSpec::Scatter(scatter) => scatter.series.is_empty(),
        }
    }
}

impl From<PieChart> for ChartSpec {
    fn from(pie: PieChart) -> Self {
        ChartSpec::Pie(pie)
    }
}

impl From<ScatterChart> for ChartSpec {
    fn from(scatter: ScatterChart) -> Self {
        ChartSpec::Scatter(scatter)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.slices
            .iter()
            .filter(|s| s.outcome == outcome)
            .map(|s| s.count)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub outcome: Outcome,
    pub class: u8,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Legend label for the colour grouping.
    pub color_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.series.iter().flat_map(|s| s.points.iter())
    }
}

/// Points sharing one booster version category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    pub launch_site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
}
