//! Error hierarchy for the checked plume calculations.
//!
//! The unchecked formula never returns these; it lets IEEE-754 arithmetic
//! produce infinity or NaN. Only the validating `try_*` entry points and the
//! unimplemented extension point report a [`PlumeError`].

use thiserror::Error;

/// Root error type for plume dispersion failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlumeError {
    /// An input was NaN or infinite.
    #[error("non-finite {parameter}: {value}")]
    NonFinite {
        /// Name of the offending input
        parameter: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Ambient pressure was zero or negative.
    #[error("ambient pressure must be positive, got {0} Pa")]
    NonPositivePressure(f64),

    /// Fluid density was zero or negative.
    #[error("fluid density must be positive, got {0} kg/m³")]
    NonPositiveDensity(f64),

    /// Inputs were valid but the spread overflowed.
    #[error("spread evaluated to a non-finite value: {0}")]
    NonFiniteResult(f64),

    /// Correction model constants are unusable.
    #[error("invalid correction model: {0}")]
    InvalidModel(String),

    /// Reserved calculation with no behaviour yet.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

pub type PlumeResult<T> = Result<T, PlumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PlumeError::NonFinite {
            parameter: "velocity",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "non-finite velocity: NaN");

        let err = PlumeError::NonPositiveDensity(0.0);
        assert_eq!(err.to_string(), "fluid density must be positive, got 0 kg/m³");

        let err = PlumeError::NotImplemented("related plume dispersion");
        assert_eq!(err.to_string(), "not implemented: related plume dispersion");
    }
}
