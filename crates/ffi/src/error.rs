use aeroponic_core::AbsorptionError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait AeroponicError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> AeroponicErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `AeroponicError` for FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultAeroponicError {
    code: AeroponicErrorCode,
    msg: String,
}

impl DefaultAeroponicError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"inputs"`, `"out"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: AeroponicErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<AbsorptionError> for DefaultAeroponicError {
    fn from(error: AbsorptionError) -> Self {
        let code = match error {
            AbsorptionError::InvalidDropletSize { .. } => AeroponicErrorCode::InvalidDropletSize,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl AeroponicError for DefaultAeroponicError {
    fn code(&self) -> AeroponicErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by aeroponic model functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeroponicErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Droplet size outside the modeled 20-50 μm range.
    InvalidDropletSize = 2,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is stored here so the pointer handed to C stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, AeroponicErrorCode)> = const { RefCell::new((None, AeroponicErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, AeroponicErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, AeroponicErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or no call has been made.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// AbsorptionOutputs out;
/// AbsorptionInputs in = aeroponic_default_inputs(60.0, 500.0);
/// if (aeroponic_compute(&in, &out) != AeroponicErrorCode::Ok) {
///     printf("Absorption failed: %s\n", aeroponic_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn aeroponic_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code for this thread.
///
/// Returns `AeroponicErrorCode::Ok` (0) if the last call succeeded.
#[no_mangle]
pub extern "C" fn aeroponic_get_last_error_code() -> AeroponicErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
