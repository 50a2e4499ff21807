pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod layout;
pub mod record;
pub mod table;

pub use chart::{ChartSpec, PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
pub use config::{DashboardConfig, SliderConfig, DEFAULT_DATA_PATH};
pub use dashboard::Dashboard;
pub use error::{LaunchDashError, Result};
pub use filter::{PayloadBounds, PayloadRange, SiteSelection, ALL_SITES};
pub use handlers::{pie_chart, scatter_chart};
pub use layout::Layout;
pub use record::{LaunchRecord, Outcome};
pub use table::{LaunchTable, OutcomeCounts, TableView};
