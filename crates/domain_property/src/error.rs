//! Property domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::TemporalError;

/// Errors surfaced by data-entry validation in the property domain
#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("Property area {declared} m² does not match unit total {unit_total} m²")]
    AreaMismatch {
        declared: Decimal,
        unit_total: Decimal,
    },

    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),

    #[error("Validation error: {0}")]
    Validation(String),
}
