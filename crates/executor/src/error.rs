use thiserror::Error;

use common::error::Error as DomainError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Channel sender failed: Receiver has been dropped.")]
    ChannelSendFailed,

    #[error("Configuration error: {0}")]
    ConfigLoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("could not parse input as a number: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("Logarithm domain error: {0}")]
    Domain(#[from] DomainError),
}
