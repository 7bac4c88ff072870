//! Physics modules for plume dispersion

mod correction;
mod plume_dispersion;

pub use correction::{
    correction_factor, CorrectionModel, CORRECTION_COEFFICIENT, CORRECTION_EXPONENT,
    HIGH_PRESSURE_THRESHOLD,
};
pub use plume_dispersion::{
    calculate_related_dispersion, calculate_spread, try_calculate_spread, PlumeConditions,
};
