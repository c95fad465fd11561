use thiserror::Error;

#[derive(Debug, Error)]
pub enum EggError {
    #[error("Invalid coordinate: '{field}' is missing or not a finite number")]
    InvalidCoordinate { field: &'static str },
    #[error("Missing timestamp: neither '{primary}' nor '{fallback}' is set")]
    MissingTimestamp {
        primary: &'static str,
        fallback: &'static str,
    },
    #[error("Invalid timestamp in '{field}': {value}")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("Event deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Event payload is not a JSON object")]
    NotAnObject,
}

pub type Result<T> = std::result::Result<T, EggError>;
