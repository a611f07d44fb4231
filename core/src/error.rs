use thiserror::Error;

use crate::types::Step;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid step count: {num_steps} (must be at least 1)")]
    InvalidStepCount { num_steps: usize },

    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter { name: String, value: f64 },

    #[error("Parameter '{name}' must not be negative, got {value}")]
    NegativeParameter { name: String, value: f64 },

    #[error("Series length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Non-finite value {value} at step {step}")]
    NonFiniteValue { step: Step, value: f64 },

    #[error("Series is empty")]
    EmptySeries,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;

/// Reject NaN and infinities for a named parameter.
pub(crate) fn ensure_finite(name: &str, value: f64) -> SimResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::NonFiniteParameter { name: name.to_string(), value })
    }
}

pub(crate) fn ensure_non_negative(name: &str, value: f64) -> SimResult<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(SimError::NegativeParameter { name: name.to_string(), value });
    }
    Ok(())
}
