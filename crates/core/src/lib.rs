//! Plume Simulation Core Library
//!
//! Thermal plume dispersion model for seabed drilling simulations.
//! Computes the radial spread of a buoyant discharge from its initial
//! velocity, the ambient pressure and the fluid density, with an empirical
//! non-linear correction above 30 megapascals.
//!
//! ## Entry points
//!
//! - [`calculate_spread`]: the bare formula on raw `f64` inputs
//! - [`try_calculate_spread`] / [`PlumeConditions::try_spread`]: validated,
//!   returning [`PlumeError`]
//! - [`CorrectionModel`]: the high-pressure correction and its constants
//!
//! ```
//! use plume_sim_core::calculate_spread;
//!
//! let spread = calculate_spread(2.0, 60.0e6, 0.0, 1000.0);
//! assert!((spread - 563.38).abs() < 0.01);
//! ```

// Core types and utilities
pub mod core_types;

pub mod error;
pub mod physics;

// Re-export core types
pub use core_types::{KelvinDelta, KgPerCubicMeter, Meters, MetersPerSecond, Pascals};

pub use error::{PlumeError, PlumeResult};
pub use physics::{
    calculate_related_dispersion, calculate_spread, correction_factor, try_calculate_spread,
    CorrectionModel, PlumeConditions, HIGH_PRESSURE_THRESHOLD,
};
