use thiserror::Error;

/// Failures of the energy loss and range calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoppingError {
    #[error("Kinetic energy must be positive and finite, got {energy} MeV")]
    InvalidEnergy { energy: f64 },

    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Bethe-Bloch formula breaks down at {energy} MeV (logarithmic term {bracket} <= 0)")]
    FormulaBreakdown { energy: f64, bracket: f64 },

    #[error("Invalid integration grid: {0}")]
    InvalidGrid(String),
}

pub type StoppingResult<T> = Result<T, StoppingError>;

/// Returns `value` if it is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> StoppingResult<f64> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(StoppingError::InvalidParameter { name, value })
    }
}
