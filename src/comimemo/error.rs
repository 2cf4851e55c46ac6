use thiserror::Error;

#[derive(Error, Debug)]
pub enum CircleError {
    #[error("Position {position} is out of range (list has {len} circles)")]
    OutOfRange { position: usize, len: usize },

    #[error("Circle is missing required fields: {}", missing.join(", "))]
    IncompleteRecord { missing: Vec<String> },

    #[error("Invalid {field}: {value}")]
    InvalidChoice { field: String, value: String },

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CircleError>;
