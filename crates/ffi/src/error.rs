use speed_units_core::ParseSpeedError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait SpeedFfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> SpeedErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `SpeedFfiError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultSpeedError {
    code: SpeedErrorCode,
    msg: String,
}

impl DefaultSpeedError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"text"`, `"out_speed"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: SpeedErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a C string that is not valid UTF-8.
    pub fn invalid_utf8(param_name: &str) -> Self {
        Self {
            code: SpeedErrorCode::InvalidUtf8,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// Create error for an output buffer that cannot hold the result.
    ///
    /// # Arguments
    /// * `required` - Bytes needed, including the NUL terminator
    /// * `available` - Bytes the caller provided
    pub fn buffer_too_small(required: usize, available: usize) -> Self {
        Self {
            code: SpeedErrorCode::BufferTooSmall,
            msg: format!("Buffer too small: need {required} bytes, got {available}"),
        }
    }
}

impl From<ParseSpeedError> for DefaultSpeedError {
    fn from(error: ParseSpeedError) -> Self {
        Self {
            code: SpeedErrorCode::ParseFailed,
            msg: error.to_string(),
        }
    }
}

impl SpeedFfiError for DefaultSpeedError {
    fn code(&self) -> SpeedErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by speed functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Input text was not valid UTF-8.
    InvalidUtf8 = 2,

    /// Input text did not describe a speed (bad number or unknown unit).
    ParseFailed = 3,

    /// Output buffer too small for the formatted text.
    BufferTooSmall = 4,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is kept here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, SpeedErrorCode)> = const { RefCell::new((None, SpeedErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, SpeedErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, SpeedErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last fallible call failed.
/// - `null` if the last fallible call succeeded or none has been made.
///
/// # Thread Safety
/// Error messages are stored per-thread, each thread has its own error state.
///
/// # Lifetime
/// The returned pointer is valid until the next fallible FFI call on this
/// thread. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// SpeedValue speed;
/// if (speed_parse("88 mi/s", &speed) != Ok) {
///     const char* error = speed_get_last_error();
///     if (error) {
///         printf("Parse failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn speed_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `SpeedErrorCode::Ok` (0) if the last fallible call succeeded,
/// otherwise the code it failed with.
#[no_mangle]
pub extern "C" fn speed_get_last_error_code() -> SpeedErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
