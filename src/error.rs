use thiserror::Error;

#[derive(Debug, Error)]
pub enum CateringError {
    #[error("Beverage not found: {0}")]
    BeverageNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid beverage #{index}: {}", .errors.join("; "))]
    InvalidBeverage { index: usize, errors: Vec<String> },
}

pub type Result<T> = std::result::Result<T, CateringError>;
