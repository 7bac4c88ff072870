use plume_sim_core::PlumeError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code passed across the FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait PlumeSimError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> PlumeSimErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `PlumeSimError` for the plume FFI functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultPlumeSimError {
    code: PlumeSimErrorCode,
    msg: String,
}

impl DefaultPlumeSimError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_spread"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: PlumeSimErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<PlumeError> for DefaultPlumeSimError {
    fn from(error: PlumeError) -> Self {
        let code = match error {
            PlumeError::NonFinite { .. }
            | PlumeError::NonPositivePressure(_)
            | PlumeError::NonPositiveDensity(_)
            | PlumeError::InvalidModel(_) => PlumeSimErrorCode::InvalidParameter,
            PlumeError::NonFiniteResult(_) => PlumeSimErrorCode::NonFiniteResult,
            PlumeError::NotImplemented(_) => PlumeSimErrorCode::NotImplemented,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl PlumeSimError for DefaultPlumeSimError {
    fn code(&self) -> PlumeSimErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by plume simulation functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlumeSimErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter: non-finite input, or non-positive pressure or density.
    InvalidParameter = 2,

    /// Inputs were valid but the spread overflowed to infinity or NaN.
    NonFiniteResult = 3,

    /// The requested calculation is reserved and has no implementation yet.
    NotImplemented = 4,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is stored here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, PlumeSimErrorCode)> = const { RefCell::new((None, PlumeSimErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, PlumeSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, PlumeSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the most recent error-reporting call on
///   this thread failed.
/// - `null` if that call succeeded or the message cannot be converted to a C string.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// double spread = 0.0;
/// PlumeSimErrorCode err = plume_sim_calculate_spread_checked(1.0, 1.0e6, 5.0, 0.0, &spread);
/// if (err != Ok) {
///     const char* error = plume_sim_get_last_error();
///     if (error) {
///         printf("Plume spread failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn plume_sim_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code on this thread.
///
/// Returns `PlumeSimErrorCode::Ok` (0) if the most recent error-reporting call succeeded.
/// `plume_sim_calculate_spread` and `plume_sim_correction_factor` never touch this state.
#[no_mangle]
pub extern "C" fn plume_sim_get_last_error_code() -> PlumeSimErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
