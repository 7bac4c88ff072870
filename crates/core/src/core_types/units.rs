//! Semantic unit types for plume dispersion inputs and outputs
//!
//! Newtype wrappers keep velocity, pressure, temperature difference and
//! density from being swapped at call sites. All of them wrap `f64`.
//!
//! Unlike a strict validated unit system, the pressure and density
//! constructors accept any value. The raw spread formula has to propagate
//! IEEE-754 results (infinity, NaN) for zero or negative density, so the
//! range checks live in [`crate::physics::PlumeConditions::validate`]
//! instead of here.
//!
//! # Usage
//! ```
//! use plume_sim_core::core_types::units::{KgPerCubicMeter, Pascals};
//!
//! let ambient = Pascals::from_megapascals(45.0);
//! assert!((*ambient - 45.0e6).abs() < 1e-6);
//!
//! let sea = KgPerCubicMeter::SEAWATER;
//! assert!(sea > KgPerCubicMeter::WATER);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Div, Mul, Neg};

/// Compare f64 values with total ordering so NaN sorts deterministically
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// VELOCITY
// ============================================================================

/// Velocity in meters per second. Sign encodes direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MetersPerSecond(f64);

impl Eq for MetersPerSecond {}

impl PartialOrd for MetersPerSecond {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MetersPerSecond {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for MetersPerSecond {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl MetersPerSecond {
    /// Create a new velocity
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        MetersPerSecond(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for MetersPerSecond {
    fn from(v: f64) -> Self {
        MetersPerSecond(v)
    }
}

impl From<MetersPerSecond> for f64 {
    fn from(v: MetersPerSecond) -> f64 {
        v.0
    }
}

impl Neg for MetersPerSecond {
    type Output = MetersPerSecond;
    fn neg(self) -> MetersPerSecond {
        MetersPerSecond(-self.0)
    }
}

impl Mul<f64> for MetersPerSecond {
    type Output = MetersPerSecond;
    fn mul(self, rhs: f64) -> MetersPerSecond {
        MetersPerSecond(self.0 * rhs)
    }
}

impl fmt::Display for MetersPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s", self.0)
    }
}

// ============================================================================
// PRESSURE
// ============================================================================

/// Ambient pressure in pascals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pascals(f64);

impl Eq for Pascals {}

impl PartialOrd for Pascals {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pascals {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Pascals {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Pascals {
    /// Pascals per megapascal
    const PA_PER_MPA: f64 = 1.0e6;

    /// Standard atmosphere at sea level
    pub const ATMOSPHERE: Pascals = Pascals(101_325.0);

    /// Create a new pressure
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Pascals(value)
    }

    /// Create a pressure from megapascals
    #[inline]
    #[must_use]
    pub fn from_megapascals(mpa: f64) -> Self {
        Pascals(mpa * Self::PA_PER_MPA)
    }

    /// Convert to megapascals
    #[inline]
    #[must_use]
    pub fn to_megapascals(self) -> f64 {
        self.0 / Self::PA_PER_MPA
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Pascals {
    fn from(v: f64) -> Self {
        Pascals(v)
    }
}

impl From<Pascals> for f64 {
    fn from(p: Pascals) -> f64 {
        p.0
    }
}

// Ratio of two pressures is dimensionless
impl Div for Pascals {
    type Output = f64;
    fn div(self, rhs: Pascals) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Pascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.abs() >= Self::PA_PER_MPA {
            write!(f, "{:.2} MPa", self.to_megapascals())
        } else {
            write!(f, "{:.1} Pa", self.0)
        }
    }
}

// ============================================================================
// TEMPERATURE DIFFERENCE
// ============================================================================

/// Temperature difference in kelvin (plume minus ambient).
/// Can be any value, positive or negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KelvinDelta(f64);

impl Eq for KelvinDelta {}

impl PartialOrd for KelvinDelta {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KelvinDelta {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KelvinDelta {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KelvinDelta {
    /// Create a temperature delta
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KelvinDelta(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for KelvinDelta {
    fn from(v: f64) -> Self {
        KelvinDelta(v)
    }
}

impl From<KelvinDelta> for f64 {
    fn from(t: KelvinDelta) -> f64 {
        t.0
    }
}

impl fmt::Display for KelvinDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2} K", self.0)
    }
}

// ============================================================================
// DENSITY
// ============================================================================

/// Density in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KgPerCubicMeter(f64);

impl Eq for KgPerCubicMeter {}

impl PartialOrd for KgPerCubicMeter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KgPerCubicMeter {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for KgPerCubicMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl KgPerCubicMeter {
    /// Density of fresh water at 4°C
    pub const WATER: KgPerCubicMeter = KgPerCubicMeter(1000.0);

    /// Mean surface seawater density
    pub const SEAWATER: KgPerCubicMeter = KgPerCubicMeter(1025.0);

    /// Create a new density
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        KgPerCubicMeter(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for KgPerCubicMeter {
    fn from(v: f64) -> Self {
        KgPerCubicMeter(v)
    }
}

impl From<KgPerCubicMeter> for f64 {
    fn from(d: KgPerCubicMeter) -> f64 {
        d.0
    }
}

impl fmt::Display for KgPerCubicMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kg/m³", self.0)
    }
}

// ============================================================================
// DISTANCE
// ============================================================================

/// Distance in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Meters {
    /// Create a new distance
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// True when the distance is neither infinite nor NaN
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Meters {
    fn from(v: f64) -> Self {
        Meters(v)
    }
}

impl From<Meters> for f64 {
    fn from(m: Meters) -> f64 {
        m.0
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}
