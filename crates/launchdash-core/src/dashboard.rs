use crate::chart::{PieChart, ScatterChart};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::filter::{PayloadBounds, PayloadRange, SiteSelection};
use crate::handlers;
use crate::layout::Layout;
use crate::table::LaunchTable;

/// Everything the page needs, loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: LaunchTable,
    bounds: PayloadBounds,
    layout: Layout,
}

impl Dashboard {
    pub fn load(config: &DashboardConfig) -> Result<Self> {
        let table = LaunchTable::from_path(&config.data_path)?;
        Ok(Self::from_table(table, config))
    }

    pub fn from_table(table: LaunchTable, config: &DashboardConfig) -> Self {
        let bounds = table.payload_bounds();
        let layout = Layout::build(&table, bounds, &config.slider);
        Self {
            table,
            bounds,
            layout,
        }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn pie_chart(&self, selection: &SiteSelection) -> PieChart {
        handlers::pie_chart(&self.table, selection)
    }

    pub fn scatter_chart(&self, selection: &SiteSelection, range: PayloadRange) -> ScatterChart {
        handlers::scatter_chart(&self.table, selection, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::sample_table;

    #[test]
    fn test_bounds_seed_slider() {
        let dashboard = Dashboard::from_table(sample_table(), &DashboardConfig::default());
        let bounds = dashboard.bounds();
        assert_eq!(
            dashboard.layout().payload_slider.value,
            [bounds.min, bounds.max]
        );
    }

    #[test]
    fn test_delegates_to_handlers() {
        let dashboard = Dashboard::from_table(sample_table(), &DashboardConfig::default());
        let pie = dashboard.pie_chart(&SiteSelection::All);
        assert_eq!(pie.total(), dashboard.table().len());

        let scatter = dashboard.scatter_chart(&SiteSelection::All, dashboard.bounds().into());
        assert_eq!(scatter.point_count(), dashboard.table().len());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let config = DashboardConfig::with_data_path("missing/spacex_launch_dash.csv");
        assert!(Dashboard::load(&config).is_err());
    }
}
