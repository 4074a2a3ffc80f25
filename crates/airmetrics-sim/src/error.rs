//! Simulator error type.

use thiserror::Error;

use airmetrics_core::MetricsError;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("config: {0}")]
    Config(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}
