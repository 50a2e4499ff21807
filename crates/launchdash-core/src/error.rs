use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchDashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid outcome on row {row}: class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: u8 },

    #[error("Invalid payload mass on row {row}: {value}")]
    InvalidPayload { row: usize, value: f64 },

    #[error("Dataset contains no launch records")]
    EmptyDataset,

    #[error("Invalid payload range: low={low}, high={high}")]
    InvalidRange { low: f64, high: f64 },
}

pub type Result<T> = std::result::Result<T, LaunchDashError>;
