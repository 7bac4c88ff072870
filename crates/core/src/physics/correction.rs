//! High-pressure correction to the linear plume spread model.
//!
//! Below the threshold the spread follows the linear relation
//! `v × √(P / ρ)`. Above it, an empirical power-law multiplier accounts for
//! non-linear effects at depth:
//!
//! ```text
//! C(P) = 1                          P ≤ P_t
//! C(P) = 1 + a × (P / P_t − 1)^b    P > P_t
//! ```
//!
//! With `P_t = 30 MPa`, `a = 0.15`, `b = 0.8`. Because `b > 0` the factor
//! tends to 1 as `P → P_t⁺`, so the model is continuous at the threshold.

use serde::{Deserialize, Serialize};

use crate::core_types::units::Pascals;
use crate::error::{PlumeError, PlumeResult};

/// Pressure above which the non-linear correction applies (30 megapascals).
pub const HIGH_PRESSURE_THRESHOLD: Pascals = Pascals::new(30.0e6);

/// Scale of the power-law correction term.
pub const CORRECTION_COEFFICIENT: f64 = 0.15;

/// Exponent of the power-law correction term.
pub const CORRECTION_EXPONENT: f64 = 0.8;

/// Parameters of the high-pressure correction.
///
/// `Default` reproduces the calibrated model. Other values are accepted for
/// sensitivity studies; run [`CorrectionModel::validate`] before trusting
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectionModel {
    /// Pressure at which the correction starts (Pa)
    pub threshold: Pascals,
    /// Multiplier on the power-law term (dimensionless)
    pub coefficient: f64,
    /// Exponent on the normalised overpressure (dimensionless)
    pub exponent: f64,
}

impl Default for CorrectionModel {
    fn default() -> Self {
        Self::CALIBRATED
    }
}

impl CorrectionModel {
    /// The calibrated model: 30 megapascals threshold, coefficient 0.15, exponent 0.8.
    pub const CALIBRATED: CorrectionModel = CorrectionModel {
        threshold: HIGH_PRESSURE_THRESHOLD,
        coefficient: CORRECTION_COEFFICIENT,
        exponent: CORRECTION_EXPONENT,
    };

    /// Whether `pressure` lies strictly above the threshold.
    ///
    /// NaN pressure compares false and so never triggers the correction.
    #[inline]
    #[must_use]
    pub fn applies(&self, pressure: Pascals) -> bool {
        *pressure > *self.threshold
    }

    /// Dimensionless correction factor for the given ambient pressure.
    ///
    /// Returns exactly `1.0` at or below the threshold.
    #[must_use]
    pub fn factor(&self, pressure: Pascals) -> f64 {
        if self.applies(pressure) {
            // Strictly positive base inside this branch
            let overpressure = pressure / self.threshold - 1.0;
            1.0 + self.coefficient * overpressure.powf(self.exponent)
        } else {
            1.0
        }
    }

    /// Check that the model constants describe a usable correction.
    ///
    /// # Errors
    ///
    /// Returns [`PlumeError::InvalidModel`] when the threshold is not a finite
    /// positive pressure, the coefficient is not finite, or the exponent is
    /// not finite and positive (a non-positive exponent breaks continuity at
    /// the threshold).
    pub fn validate(&self) -> PlumeResult<()> {
        if !self.threshold.is_finite() || *self.threshold <= 0.0 {
            return Err(PlumeError::InvalidModel(format!(
                "threshold must be finite and positive, got {}",
                *self.threshold
            )));
        }
        if !self.coefficient.is_finite() {
            return Err(PlumeError::InvalidModel(format!(
                "coefficient must be finite, got {}",
                self.coefficient
            )));
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(PlumeError::InvalidModel(format!(
                "exponent must be finite and positive, got {}",
                self.exponent
            )));
        }
        Ok(())
    }
}

/// Correction factor from the calibrated model for a raw pressure in Pa.
#[inline]
#[must_use]
pub fn correction_factor(pressure_pa: f64) -> f64 {
    CorrectionModel::CALIBRATED.factor(Pascals::new(pressure_pa))
}
