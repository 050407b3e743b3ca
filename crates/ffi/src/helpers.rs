use crate::error::{with_last_error_mut, SpeedErrorCode, SpeedFfiError};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `SpeedFfiError` trait.
pub(crate) fn set_last_error(error: &impl SpeedFfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error message and code.
/// Called on successful fallible operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = SpeedErrorCode::Ok;
    });
}

/// Run a fallible FFI body, recording the outcome in thread-local storage.
#[inline]
pub(crate) fn track_result<E: SpeedFfiError>(f: impl FnOnce() -> Result<(), E>) -> SpeedErrorCode {
    match f() {
        Ok(()) => {
            clear_last_error();
            SpeedErrorCode::Ok
        }
        Err(error) => {
            set_last_error(&error);
            error.code()
        }
    }
}
