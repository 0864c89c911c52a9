use thiserror::Error;

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("window error: {0}")]
    Window(String),
    #[error("chart error: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
