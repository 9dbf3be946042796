//! # Error Module
//!
//! Errors for the configuration and opening-request layer.
//!
//! Account operations themselves never fail: `withdraw` and
//! `compute_interest` report their outcome as `bool`.

use thiserror::Error;

/// Errors raised while reading rate defaults or opening requests.
#[derive(Debug, Error)]
pub enum KontoError {
    #[error("Invalid rate configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid opening request: {0}")]
    InvalidRequest(String),
}

/// Result type alias with KontoError
pub type KontoResult<T> = Result<T, KontoError>;

impl KontoError {
    pub fn is_config_error(&self) -> bool {
        matches!(self, KontoError::InvalidConfig(_))
    }

    pub fn is_request_error(&self) -> bool {
        matches!(self, KontoError::InvalidRequest(_))
    }
}
