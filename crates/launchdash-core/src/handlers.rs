//! Reactive chart handlers. Both are pure functions of the table and the
//! current widget values.

use tracing::debug;

use crate::chart::{PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
use crate::filter::{PayloadRange, SiteSelection};
use crate::record::Outcome;
use crate::table::LaunchTable;

pub const SCATTER_TITLE: &str = "Payload vs Launch Success";
pub const PAYLOAD_AXIS: &str = "Payload Mass (kg)";
pub const CLASS_AXIS: &str = "class";
pub const BOOSTER_CATEGORY_LABEL: &str = "Booster Version Category";

/// Success vs failure counts for the selected site, or for every row.
pub fn pie_chart(table: &LaunchTable, selection: &SiteSelection) -> PieChart {
    let (view, title) = match selection {
        SiteSelection::All => (
            table.view(),
            "Total Success vs Failed Launches".to_string(),
        ),
        SiteSelection::Site(site) => (
            table.view().with_site(site),
            format!("Success vs Failed Launches for {}", site),
        ),
    };

    let counts = view.outcome_counts();
    let slices = [Outcome::Success, Outcome::Failure]
        .into_iter()
        .filter(|outcome| counts.get(*outcome) > 0)
        .map(|outcome| PieSlice {
            label: outcome.label().to_string(),
            outcome,
            class: outcome.class(),
            count: counts.get(outcome),
        })
        .collect();

    debug!(
        site = %selection,
        success = counts.success,
        failure = counts.failure,
        "Built pie chart"
    );

    PieChart { title, slices }
}

/// Payload vs outcome for rows inside `range`, optionally narrowed to one
/// site. The payload filter always applies; the site filter only when a site
/// is selected.
pub fn scatter_chart(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let mut view = table.view().with_payload(range);
    if let Some(site) = selection.site() {
        view = view.with_site(site);
    }

    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in view.rows() {
        let point = ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            class: record.class,
            launch_site: record.launch_site.clone(),
            flight_number: record.flight_number,
            booster_version: record.booster_version.clone(),
        };
        match series
            .iter_mut()
            .find(|s| s.name == record.booster_version_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                name: record.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    debug!(
        site = %selection,
        low = range.low(),
        high = range.high(),
        points = view.len(),
        series = series.len(),
        "Built scatter chart"
    );

    ScatterChart {
        title: SCATTER_TITLE.to_string(),
        x_label: PAYLOAD_AXIS.to_string(),
        y_label: CLASS_AXIS.to_string(),
        color_label: BOOSTER_CATEGORY_LABEL.to_string(),
        series,
    }
}
