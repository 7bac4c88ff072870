//! Thermal plume dispersion for seabed drilling discharges.
//!
//! Radial spread of a buoyant plume from its initial velocity, the ambient
//! pressure and the fluid density:
//!
//! ```text
//! r = v × √(P / ρ) × C(P)
//! ```
//!
//! Where:
//! - v: initial plume velocity (m/s)
//! - P: ambient pressure (Pa)
//! - ρ: fluid density (kg/m³)
//! - C: high-pressure correction, see [`CorrectionModel`]
//!
//! The temperature difference is carried through every signature but does
//! not enter the formula. It is reserved for a thermally coupled model.
//!
//! Two entry points are provided. [`calculate_spread`] is the bare formula:
//! no validation, no logging, and zero or negative density propagates as
//! infinity or NaN. [`try_calculate_spread`] and [`PlumeConditions::try_spread`]
//! validate inputs first and report a [`PlumeError`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::correction::CorrectionModel;
use crate::core_types::units::{KelvinDelta, KgPerCubicMeter, Meters, MetersPerSecond, Pascals};
use crate::error::{PlumeError, PlumeResult};

/// Calculate the radial spread of a thermal plume.
///
/// # Arguments
///
/// * `velocity` - Initial velocity (m/s)
/// * `pressure` - Ambient pressure (Pa)
/// * `temperature` - Temperature difference (K), currently unused
/// * `density` - Fluid density (kg/m³)
///
/// # Returns
///
/// Plume spread radius in meters. Non-finite when `density` is zero, and NaN
/// when `pressure / density` is negative.
#[must_use]
pub fn calculate_spread(velocity: f64, pressure: f64, temperature: f64, density: f64) -> f64 {
    let factor = CorrectionModel::CALIBRATED.factor(Pascals::new(pressure));
    corrected_spread(velocity, pressure, temperature, density, factor)
}

/// `v × √(P / ρ) × factor` with the correction factor already evaluated.
#[inline]
fn corrected_spread(
    velocity: f64,
    pressure: f64,
    _temperature: f64,
    density: f64,
    correction_factor: f64,
) -> f64 {
    velocity * (pressure / density).sqrt() * correction_factor
}

/// Validating variant of [`calculate_spread`].
///
/// Returns the same value as the unchecked formula whenever the inputs pass
/// validation.
///
/// # Errors
///
/// See [`PlumeConditions::try_spread`].
pub fn try_calculate_spread(
    velocity: f64,
    pressure: f64,
    temperature: f64,
    density: f64,
) -> PlumeResult<f64> {
    PlumeConditions::new(
        MetersPerSecond::new(velocity),
        Pascals::new(pressure),
        KelvinDelta::new(temperature),
        KgPerCubicMeter::new(density),
    )
    .try_spread()
    .map(Meters::value)
}

/// Reserved entry point for further plume dispersion calculations
/// (additional flow regimes, coupled thermal models).
///
/// # Errors
///
/// Always returns [`PlumeError::NotImplemented`].
pub fn calculate_related_dispersion() -> PlumeResult<()> {
    Err(PlumeError::NotImplemented("related plume dispersion"))
}

/// Ambient and source conditions for a single plume evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlumeConditions {
    /// Initial plume velocity
    pub velocity: MetersPerSecond,
    /// Ambient pressure at the source
    pub pressure: Pascals,
    /// Plume temperature minus ambient (reserved)
    pub temperature: KelvinDelta,
    /// Ambient fluid density
    pub density: KgPerCubicMeter,
}

impl PlumeConditions {
    /// Bundle the four plume inputs.
    #[must_use]
    pub const fn new(
        velocity: MetersPerSecond,
        pressure: Pascals,
        temperature: KelvinDelta,
        density: KgPerCubicMeter,
    ) -> Self {
        Self {
            velocity,
            pressure,
            temperature,
            density,
        }
    }

    /// Spread using the calibrated correction. Unchecked.
    #[must_use]
    pub fn spread(&self) -> Meters {
        self.spread_with(&CorrectionModel::CALIBRATED)
    }

    /// Spread using a caller-supplied correction model. Unchecked.
    #[must_use]
    pub fn spread_with(&self, model: &CorrectionModel) -> Meters {
        self.spread_with_factor(model.factor(self.pressure))
    }

    fn spread_with_factor(&self, correction_factor: f64) -> Meters {
        Meters::new(corrected_spread(
            *self.velocity,
            *self.pressure,
            *self.temperature,
            *self.density,
            correction_factor,
        ))
    }

    /// Check that the conditions describe a physical plume.
    ///
    /// Velocity may be negative (direction). The temperature difference must
    /// be finite even though the formula ignores it.
    ///
    /// # Errors
    ///
    /// - [`PlumeError::NonFinite`] if any input is NaN or infinite
    /// - [`PlumeError::NonPositivePressure`] if pressure ≤ 0
    /// - [`PlumeError::NonPositiveDensity`] if density ≤ 0
    pub fn validate(&self) -> PlumeResult<()> {
        let inputs = [
            ("velocity", *self.velocity),
            ("pressure", *self.pressure),
            ("temperature", *self.temperature),
            ("density", *self.density),
        ];
        if let Some(&(parameter, value)) = inputs.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlumeError::NonFinite { parameter, value });
        }
        if *self.pressure <= 0.0 {
            return Err(PlumeError::NonPositivePressure(*self.pressure));
        }
        if *self.density <= 0.0 {
            return Err(PlumeError::NonPositiveDensity(*self.density));
        }
        Ok(())
    }

    /// Validated spread using the calibrated correction.
    ///
    /// # Errors
    ///
    /// Any error from [`PlumeConditions::validate`], or
    /// [`PlumeError::NonFiniteResult`] if valid inputs overflow.
    pub fn try_spread(&self) -> PlumeResult<Meters> {
        self.try_spread_with(&CorrectionModel::CALIBRATED)
    }

    /// Validated spread using a caller-supplied correction model.
    ///
    /// # Errors
    ///
    /// [`PlumeError::InvalidModel`] if the model fails
    /// [`CorrectionModel::validate`], otherwise as [`PlumeConditions::try_spread`].
    pub fn try_spread_with(&self, model: &CorrectionModel) -> PlumeResult<Meters> {
        trace!(
            velocity = *self.velocity,
            pressure = *self.pressure,
            temperature = *self.temperature,
            density = *self.density,
            "Evaluating plume spread"
        );

        if let Err(e) = model.validate().and_then(|()| self.validate()) {
            warn!("Rejected plume conditions: {e}");
            return Err(e);
        }

        let factor = model.factor(self.pressure);
        if model.applies(self.pressure) {
            debug!(
                "Applying high-pressure correction {:.4} at {}",
                factor, self.pressure
            );
        }

        let spread = self.spread_with_factor(factor);
        if !spread.is_finite() {
            warn!("Plume spread overflowed for valid inputs: {}", *spread);
            return Err(PlumeError::NonFiniteResult(*spread));
        }

        trace!(spread = *spread, "Plume spread evaluated");
        Ok(spread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Test the linear regime well below the threshold.
    #[test]
    fn linear_regime_spread() {
        let spread = calculate_spread(1.0, 1.0e6, 5.0, 1000.0);
        assert_relative_eq!(spread, 1000.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(spread, 31.6228, epsilon = 1e-4);
    }

    /// Test that the threshold itself is not corrected.
    #[test]
    fn threshold_is_uncorrected() {
        let spread = calculate_spread(2.0, 30.0e6, 0.0, 1000.0);
        assert_relative_eq!(spread, 2.0 * 30_000.0_f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(spread, 346.41, epsilon = 0.01);
    }

    /// Test the corrected regime at twice the threshold.
    #[test]
    fn high_pressure_spread() {
        let spread = calculate_spread(2.0, 60.0e6, 0.0, 1000.0);
        assert_relative_eq!(spread, 2.0 * 60_000.0_f64.sqrt() * 1.15, epsilon = 1e-9);
        assert_relative_eq!(spread, 563.38, epsilon = 0.01);
    }

    /// Test that zero density propagates a non-finite value.
    #[test]
    fn zero_density_is_non_finite() {
        assert!(!calculate_spread(1.0, 1.0e6, 5.0, 0.0).is_finite());
        assert!(!calculate_spread(0.0, 1.0e6, 5.0, 0.0).is_finite());
        assert!(!calculate_spread(2.0, 60.0e6, 0.0, 0.0).is_finite());
    }

    /// Test that negative density yields NaN rather than panicking.
    #[test]
    fn negative_density_is_nan() {
        assert!(calculate_spread(1.0, 1.0e6, 5.0, -1000.0).is_nan());
    }

    /// Test that temperature has no effect.
    #[test]
    fn temperature_is_ignored() {
        let cold = calculate_spread(1.5, 45.0e6, -20.0, 1025.0);
        let hot = calculate_spread(1.5, 45.0e6, 300.0, 1025.0);
        assert_eq!(cold, hot);
    }

    /// Test that negative velocity mirrors the spread.
    #[test]
    fn velocity_sign_carries_through() {
        let forward = calculate_spread(3.0, 45.0e6, 0.0, 1025.0);
        let reverse = calculate_spread(-3.0, 45.0e6, 0.0, 1025.0);
        assert_eq!(forward, -reverse);
        assert_eq!(calculate_spread(0.0, 45.0e6, 0.0, 1025.0), 0.0);
    }

    /// Test the checked path agrees with the raw formula.
    #[test]
    fn checked_matches_unchecked() {
        for &(v, p, t, rho) in &[
            (1.0, 1.0e6, 5.0, 1000.0),
            (2.0, 30.0e6, 0.0, 1000.0),
            (2.0, 60.0e6, 0.0, 1000.0),
            (-0.5, 120.0e6, 12.0, 1040.0),
        ] {
            let raw = calculate_spread(v, p, t, rho);
            let checked = try_calculate_spread(v, p, t, rho).unwrap();
            assert_eq!(raw, checked);
        }
    }

    /// Test each validation failure.
    #[test]
    fn checked_rejects_invalid_inputs() {
        assert_eq!(
            try_calculate_spread(1.0, 1.0e6, 5.0, 0.0),
            Err(PlumeError::NonPositiveDensity(0.0))
        );
        assert_eq!(
            try_calculate_spread(1.0, 1.0e6, 5.0, -1.0),
            Err(PlumeError::NonPositiveDensity(-1.0))
        );
        assert_eq!(
            try_calculate_spread(1.0, 0.0, 5.0, 1000.0),
            Err(PlumeError::NonPositivePressure(0.0))
        );
        assert!(matches!(
            try_calculate_spread(f64::NAN, 1.0e6, 5.0, 1000.0),
            Err(PlumeError::NonFinite {
                parameter: "velocity",
                ..
            })
        ));
        assert!(matches!(
            try_calculate_spread(1.0, 1.0e6, f64::INFINITY, 1000.0),
            Err(PlumeError::NonFinite {
                parameter: "temperature",
                ..
            })
        ));
    }

    /// Test that overflow of valid inputs is reported.
    #[test]
    fn checked_reports_overflow() {
        let result = try_calculate_spread(1.0e300, 1.0e300, 0.0, 1.0e-300);
        assert!(matches!(result, Err(PlumeError::NonFiniteResult(_))));
    }

    /// Test typed conditions with a custom model.
    #[test]
    fn conditions_with_custom_model() {
        let conditions = PlumeConditions::new(
            MetersPerSecond::new(2.0),
            Pascals::from_megapascals(20.0),
            KelvinDelta::new(0.0),
            KgPerCubicMeter::WATER,
        );
        let model = CorrectionModel {
            threshold: Pascals::from_megapascals(10.0),
            ..CorrectionModel::default()
        };

        let calibrated = conditions.spread();
        let shifted = conditions.try_spread_with(&model).unwrap();
        assert_relative_eq!(*shifted, *calibrated * 1.15, epsilon = 1e-9);

        let broken = CorrectionModel {
            exponent: -1.0,
            ..model
        };
        assert!(matches!(
            conditions.try_spread_with(&broken),
            Err(PlumeError::InvalidModel(_))
        ));
    }

    /// Test that debug logging of the correction leaves the result unchanged.
    #[test]
    fn checked_spread_with_debug_logging() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        let conditions = PlumeConditions::new(
            MetersPerSecond::new(2.0),
            Pascals::from_megapascals(60.0),
            KelvinDelta::new(0.0),
            KgPerCubicMeter::WATER,
        );
        let model = CorrectionModel::default();

        let checked = tracing::subscriber::with_default(subscriber, || {
            conditions.try_spread_with(&model).unwrap()
        });
        assert_eq!(checked, conditions.spread_with(&model));
        assert_relative_eq!(*checked, 563.38, epsilon = 0.01);
    }

    /// Test the reserved extension point.
    #[test]
    fn related_dispersion_is_reserved() {
        assert_eq!(
            calculate_related_dispersion(),
            Err(PlumeError::NotImplemented("related plume dispersion"))
        );
    }
}
