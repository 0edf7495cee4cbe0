use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Prediction Service Error: HTTP {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Target not found: {0}")]
    NotFound(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type SfResult<T> = Result<T, ScanForgeError>;

impl ScanForgeError {
    /// The plain absent-from-grid case.
    pub fn not_found(symbol: char) -> Self {
        Self::NotFound(format!("'{}' in the grid", symbol))
    }
}
