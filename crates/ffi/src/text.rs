//! Parsing and formatting speeds through C strings.

use crate::error::DefaultSpeedError;
use crate::helpers::track_result;
use crate::speed::{SpeedUnit, SpeedValue};
use crate::SpeedErrorCode;
use speed_units_core::Speed;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

/// Parse text such as `"36 km/h"` or `"12kt"` into a speed.
///
/// # Returns
/// - `Ok` with `out_speed` written on success
/// - `NullPointer` if `text` or `out_speed` is null
/// - `InvalidUtf8` if `text` is not UTF-8
/// - `ParseFailed` if the number or unit is not recognised
///
/// On failure `out_speed` is left untouched and the message is available
/// through `speed_get_last_error`.
///
/// # Safety
/// - `text` must be null or a valid NUL-terminated string.
/// - `out_speed` must be null or valid for a write of `SpeedValue`.
#[no_mangle]
pub unsafe extern "C" fn speed_parse(text: *const c_char, out_speed: *mut SpeedValue) -> SpeedErrorCode {
    track_result(|| {
        if text.is_null() {
            return Err(DefaultSpeedError::null_pointer("text"));
        }
        if out_speed.is_null() {
            return Err(DefaultSpeedError::null_pointer("out_speed"));
        }

        // SAFETY: non-null and NUL-terminated per the caller contract
        let text = unsafe { CStr::from_ptr(text) }
            .to_str()
            .map_err(|_| DefaultSpeedError::invalid_utf8("text"))?;
        let speed: Speed = text.parse()?;

        // SAFETY: non-null and writable per the caller contract
        unsafe { out_speed.write(speed.into()) };
        Ok(())
    })
}

/// Format `speed` in `unit` (e.g. `"36 km/h"`) into a caller-owned buffer.
///
/// The text is always NUL-terminated on success. When `out_written` is not
/// null it always receives the text length excluding the terminator, also
/// on `BufferTooSmall` and `NullPointer`. Passing a null `buf` is therefore
/// a size query: allocate `*out_written + 1` bytes and call again.
///
/// # Returns
/// - `Ok` on success
/// - `NullPointer` if `buf` is null
/// - `BufferTooSmall` if `buf_len` cannot hold the text plus terminator
///
/// # Safety
/// - `buf` must be null or valid for writes of `buf_len` bytes.
/// - `out_written` must be null or valid for a write of `usize`.
#[no_mangle]
pub unsafe extern "C" fn speed_format(
    speed: SpeedValue,
    unit: SpeedUnit,
    buf: *mut c_char,
    buf_len: usize,
    out_written: *mut usize,
) -> SpeedErrorCode {
    track_result(|| {
        let text = Speed::from(speed).display_in(unit.into()).to_string();

        if !out_written.is_null() {
            // SAFETY: non-null and writable per the caller contract
            unsafe { out_written.write(text.len()) };
        }
        if buf.is_null() {
            return Err(DefaultSpeedError::null_pointer("buf"));
        }
        let required = text.len() + 1;
        if buf_len < required {
            return Err(DefaultSpeedError::buffer_too_small(required, buf_len));
        }

        // SAFETY: buf holds at least `required` bytes per the check above
        unsafe {
            ptr::copy_nonoverlapping(text.as_ptr(), buf.cast::<u8>(), text.len());
            buf.add(text.len()).write(0);
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{speed_get_last_error, speed_get_last_error_code};

    fn last_error_message() -> Option<String> {
        let ptr = speed_get_last_error();
        if ptr.is_null() {
            None
        } else {
            Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
        }
    }

    #[test]
    fn test_parse_success_clears_error() {
        let mut out = SpeedValue { meters_per_second: -1.0 };

        let code = unsafe { speed_parse(c"not a speed".as_ptr(), &mut out) };
        assert_eq!(code, SpeedErrorCode::ParseFailed);

        let code = unsafe { speed_parse(c"36 km/h".as_ptr(), &mut out) };
        assert_eq!(code, SpeedErrorCode::Ok);
        assert!((out.meters_per_second - 10.0).abs() < 1e-9);
        assert_eq!(speed_get_last_error_code(), SpeedErrorCode::Ok);
        assert!(last_error_message().is_none());
    }

    #[test]
    fn test_parse_failure_sets_message() {
        let mut out = SpeedValue { meters_per_second: -1.0 };
        let code = unsafe { speed_parse(c"88 mi/s".as_ptr(), &mut out) };

        assert_eq!(code, SpeedErrorCode::ParseFailed);
        assert_eq!(speed_get_last_error_code(), SpeedErrorCode::ParseFailed);
        assert_eq!(last_error_message().as_deref(), Some("Unknown speed unit 'mi/s'"));
        assert_eq!(out.meters_per_second, -1.0);
    }

    #[test]
    fn test_parse_null_pointers() {
        let mut out = SpeedValue { meters_per_second: 0.0 };
        let code = unsafe { speed_parse(ptr::null(), &mut out) };
        assert_eq!(code, SpeedErrorCode::NullPointer);
        assert_eq!(last_error_message().as_deref(), Some("Parameter 'text' cannot be null"));

        let code = unsafe { speed_parse(c"1 m/s".as_ptr(), ptr::null_mut()) };
        assert_eq!(code, SpeedErrorCode::NullPointer);
        assert_eq!(last_error_message().as_deref(), Some("Parameter 'out_speed' cannot be null"));
    }

    #[test]
    fn test_parse_invalid_utf8() {
        let bytes: [u8; 4] = [0xff, 0xfe, b'x', 0];
        let mut out = SpeedValue { meters_per_second: 0.0 };
        let code = unsafe { speed_parse(bytes.as_ptr().cast::<c_char>(), &mut out) };
        assert_eq!(code, SpeedErrorCode::InvalidUtf8);
    }

    #[test]
    fn test_format_into_buffer() {
        let mut buf: [c_char; 32] = [0; 32];
        let mut written = 0usize;
        let speed = SpeedValue { meters_per_second: 10.5 };

        let code = unsafe {
            speed_format(speed, SpeedUnit::MetersPerSecond, buf.as_mut_ptr(), buf.len(), &mut written)
        };
        assert_eq!(code, SpeedErrorCode::Ok);
        assert_eq!(written, "10.5 m/s".len());
        let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(text.to_str(), Ok("10.5 m/s"));
    }

    #[test]
    fn test_format_buffer_too_small_reports_length() {
        let mut buf: [c_char; 4] = [0; 4];
        let mut written = 0usize;
        let speed = SpeedValue { meters_per_second: 10.5 };

        let code = unsafe {
            speed_format(speed, SpeedUnit::MetersPerSecond, buf.as_mut_ptr(), buf.len(), &mut written)
        };
        assert_eq!(code, SpeedErrorCode::BufferTooSmall);
        assert_eq!(written, 8);
        assert_eq!(
            last_error_message().as_deref(),
            Some("Buffer too small: need 9 bytes, got 4")
        );
    }

    #[test]
    fn test_format_null_buffer_reports_size() {
        let mut written = 0usize;
        let speed = SpeedValue { meters_per_second: 10.5 };
        let code = unsafe {
            speed_format(speed, SpeedUnit::MetersPerSecond, ptr::null_mut(), 0, &mut written)
        };
        assert_eq!(code, SpeedErrorCode::NullPointer);
        assert_eq!(written, "10.5 m/s".len());

        let mut buf: Vec<c_char> = vec![0; written + 1];
        let code = unsafe {
            speed_format(speed, SpeedUnit::MetersPerSecond, buf.as_mut_ptr(), buf.len(), &mut written)
        };
        assert_eq!(code, SpeedErrorCode::Ok);
        let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
        assert_eq!(text.to_str(), Ok("10.5 m/s"));
    }
}
