use crate::error::{with_last_error_mut, DefaultPlumeSimError, PlumeSimError, PlumeSimErrorCode};
use std::ffi::CString;

/// Record a failed plume call so `plume_sim_get_last_error` can report it.
pub(crate) fn set_last_error(error: &impl PlumeSimError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Record `error` and hand back its code, for early returns such as a null
/// `out_spread` in `plume_sim_calculate_spread_checked`.
#[inline]
pub(crate) fn track_error(error: &impl PlumeSimError) -> PlumeSimErrorCode {
    set_last_error(error);
    error.code()
}

/// Reset the last error after a checked spread succeeds.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = PlumeSimErrorCode::Ok;
    });
}

/// Body wrapper for the error-reporting entry points
/// (`plume_sim_calculate_spread_checked`, `plume_sim_calculate_related_dispersion`).
/// A core `PlumeError` converts through `?` into the matching error code.
pub(crate) fn track_result<F>(func: F) -> PlumeSimErrorCode
where
    F: FnOnce() -> Result<(), DefaultPlumeSimError>,
{
    match func() {
        Ok(()) => {
            clear_last_error();
            PlumeSimErrorCode::Ok
        }
        Err(e) => track_error(&e),
    }
}
