use serde::{Deserialize, Serialize};

// === Query DTOs ===

#[derive(Debug, Deserialize)]
pub struct PieQuery {
    pub site: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

// === Response DTOs ===

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
}
