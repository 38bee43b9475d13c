//! Settlement domain errors

use thiserror::Error;

use core_kernel::TemporalError;

/// Errors that can occur in the settlement domain
#[derive(Debug, Error)]
pub enum SettlementError {
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Rollover target year {target_year} must be after source year {source_year}")]
    InvalidRolloverRange { source_year: i32, target_year: i32 },
}
