use launchdash_core::{Dashboard, PayloadRange, SiteSelection};

pub struct AppState {
    pub dashboard: Dashboard,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }

    /// Missing `site` means the dropdown default.
    pub fn selection(&self, site: Option<&str>) -> SiteSelection {
        site.map(SiteSelection::parse).unwrap_or_default()
    }

    /// Missing ends fall back to the observed payload bounds.
    pub fn payload_range(
        &self,
        low: Option<f64>,
        high: Option<f64>,
    ) -> launchdash_core::Result<PayloadRange> {
        let bounds = self.dashboard.bounds();
        PayloadRange::new(low.unwrap_or(bounds.min), high.unwrap_or(bounds.max))
    }
}
