//! Error types for custody-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CustodyError {
    #[error("Invalid custom cycle: {0}")]
    InvalidCycle(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid vacation window: {0}")]
    InvalidWindow(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CustodyError>;
