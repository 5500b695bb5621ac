use thiserror::Error;

/// Errors raised by the gasket core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GasketError {
    /// A user or config supplied parameter is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The simulation reached a state the animation cannot continue from
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A face color could not be parsed
    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, GasketError>;
