//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `SteerError` via `From` impls, or keep them separate and wrap `SteerError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps
//! error sites clean.

use thiserror::Error;

use crate::VehicleId;

/// The top-level error type for `steer-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SteerError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `steer-*` crates.
pub type SteerResult<T> = Result<T, SteerError>;
