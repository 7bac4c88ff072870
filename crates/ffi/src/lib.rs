//! C ABI for the plume dispersion model.
//!
//! Mirrors the core crate's single function signature. The unchecked entry
//! point returns raw IEEE-754 results; the checked one reports a
//! [`PlumeSimErrorCode`] and records a message retrievable with
//! [`plume_sim_get_last_error`].

mod error;
mod helpers;

pub use error::{plume_sim_get_last_error, plume_sim_get_last_error_code, PlumeSimErrorCode};

use error::DefaultPlumeSimError;
use helpers::{track_error, track_result};

/// Radial spread of a thermal plume in meters.
///
/// # Parameters
/// - `velocity`: Initial velocity (m/s)
/// - `pressure`: Ambient pressure (Pa)
/// - `temperature`: Temperature difference (K), currently unused
/// - `density`: Fluid density (kg/m³)
///
/// No validation is performed: zero density returns infinity or NaN and
/// negative density returns NaN. The thread-local last error is untouched.
#[no_mangle]
pub extern "C" fn plume_sim_calculate_spread(
    velocity: f64,
    pressure: f64,
    temperature: f64,
    density: f64,
) -> f64 {
    plume_sim_core::calculate_spread(velocity, pressure, temperature, density)
}

/// High-pressure correction factor for an ambient pressure in Pa.
///
/// Returns 1.0 at or below 30 megapascals.
#[no_mangle]
pub extern "C" fn plume_sim_correction_factor(pressure: f64) -> f64 {
    plume_sim_core::correction_factor(pressure)
}

/// Validated plume spread.
///
/// On success writes the spread (m) to `out_spread` and returns `Ok`.
/// On failure leaves `out_spread` untouched, returns the error code and
/// records a message for `plume_sim_get_last_error`.
///
/// # Safety
/// `out_spread` must be null or point to writable memory for one `double`.
#[no_mangle]
pub unsafe extern "C" fn plume_sim_calculate_spread_checked(
    velocity: f64,
    pressure: f64,
    temperature: f64,
    density: f64,
    out_spread: *mut f64,
) -> PlumeSimErrorCode {
    if out_spread.is_null() {
        return track_error(&DefaultPlumeSimError::null_pointer("out_spread"));
    }

    track_result(|| {
        let spread =
            plume_sim_core::try_calculate_spread(velocity, pressure, temperature, density)?;
        // SAFETY: checked non-null above; caller guarantees it is writable
        unsafe {
            *out_spread = spread;
        }
        Ok(())
    })
}

/// Reserved entry point for further plume dispersion calculations.
///
/// Always returns `NotImplemented` and records a message.
#[no_mangle]
pub extern "C" fn plume_sim_calculate_related_dispersion() -> PlumeSimErrorCode {
    track_result(|| {
        plume_sim_core::calculate_related_dispersion()?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    fn last_error_message() -> Option<String> {
        let ptr = plume_sim_get_last_error();
        if ptr.is_null() {
            None
        } else {
            // SAFETY: pointer comes from the thread-local CString
            Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
        }
    }

    #[test]
    fn test_unchecked_matches_core() {
        let spread = plume_sim_calculate_spread(2.0, 60.0e6, 0.0, 1000.0);
        assert_eq!(spread, plume_sim_core::calculate_spread(2.0, 60.0e6, 0.0, 1000.0));
        assert!((spread - 563.38).abs() < 0.01);
        assert!(!plume_sim_calculate_spread(1.0, 1.0e6, 5.0, 0.0).is_finite());
    }

    #[test]
    fn test_correction_factor_export() {
        assert_eq!(plume_sim_correction_factor(30.0e6), 1.0);
        assert!((plume_sim_correction_factor(60.0e6) - 1.15).abs() < 1e-12);
    }

    #[test]
    fn test_checked_success_clears_error() {
        let mut spread = 0.0;
        let code = unsafe { plume_sim_calculate_spread_checked(1.0, 1.0e6, 5.0, 1000.0, &mut spread) };
        assert_eq!(code, PlumeSimErrorCode::Ok);
        assert!((spread - 31.6228).abs() < 1e-4);
        assert_eq!(plume_sim_get_last_error_code(), PlumeSimErrorCode::Ok);
        assert!(last_error_message().is_none());
    }

    #[test]
    fn test_success_after_failure_resets_last_error() {
        let mut spread = 0.0;
        let code = unsafe { plume_sim_calculate_spread_checked(1.0, 1.0e6, 5.0, 0.0, &mut spread) };
        assert_eq!(code, PlumeSimErrorCode::InvalidParameter);
        assert_eq!(plume_sim_get_last_error_code(), PlumeSimErrorCode::InvalidParameter);

        let code = unsafe { plume_sim_calculate_spread_checked(2.0, 60.0e6, 0.0, 1000.0, &mut spread) };
        assert_eq!(code, PlumeSimErrorCode::Ok);
        assert_eq!(plume_sim_get_last_error_code(), PlumeSimErrorCode::Ok);
        assert!(last_error_message().is_none());
        assert!((spread - 563.38).abs() < 0.01);
    }

    #[test]
    fn test_checked_null_pointer() {
        let code = unsafe {
            plume_sim_calculate_spread_checked(1.0, 1.0e6, 5.0, 1000.0, std::ptr::null_mut())
        };
        assert_eq!(code, PlumeSimErrorCode::NullPointer);
        assert_eq!(plume_sim_get_last_error_code(), PlumeSimErrorCode::NullPointer);
        assert_eq!(
            last_error_message().as_deref(),
            Some("Parameter 'out_spread' cannot be null")
        );
    }

    #[test]
    fn test_checked_invalid_density_leaves_output() {
        let mut spread = -1.0;
        let code = unsafe { plume_sim_calculate_spread_checked(1.0, 1.0e6, 5.0, 0.0, &mut spread) };
        assert_eq!(code, PlumeSimErrorCode::InvalidParameter);
        assert_eq!(spread, -1.0);
        assert_eq!(
            last_error_message().as_deref(),
            Some("fluid density must be positive, got 0 kg/m³")
        );
    }

    #[test]
    fn test_checked_overflow() {
        let mut spread = 0.0;
        let code =
            unsafe { plume_sim_calculate_spread_checked(1.0e300, 1.0e300, 0.0, 1.0e-300, &mut spread) };
        assert_eq!(code, PlumeSimErrorCode::NonFiniteResult);
    }

    #[test]
    fn test_related_dispersion_not_implemented() {
        assert_eq!(
            plume_sim_calculate_related_dispersion(),
            PlumeSimErrorCode::NotImplemented
        );
        assert_eq!(
            last_error_message().as_deref(),
            Some("not implemented: related plume dispersion")
        );
    }
}
