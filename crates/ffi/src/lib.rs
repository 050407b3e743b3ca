//! C ABI for the speed value type.
//!
//! Lets C, C++ and C# (Unity via P/Invoke) use `speed-units-core` without a
//! Rust toolchain. The header `SpeedUnitsFFI.h` is generated by `build.rs`.
//!
//! # Conventions
//! - Speeds cross the boundary by value as `SpeedValue` (one `double`).
//! - Infallible operations return their result directly.
//! - Fallible operations return a `SpeedErrorCode` and write through an out
//!   pointer; details are kept per thread for `speed_get_last_error`.
//! - `SpeedUnit` arguments must hold one of the declared discriminants.
//!
//! ## Unity (C#) Example
//! ```csharp
//! [StructLayout(LayoutKind.Sequential)]
//! public struct SpeedValue { public double meters_per_second; }
//!
//! [DllImport("speed_units_ffi")]
//! static extern SpeedValue speed_from_kilometers_per_hour(double value);
//!
//! var cruise = speed_from_kilometers_per_hour(36.0); // 10 m/s
//! ```

mod error;
mod helpers;
mod speed;
mod text;

pub use error::{speed_get_last_error, speed_get_last_error_code, SpeedErrorCode};
pub use speed::*;
pub use text::{speed_format, speed_parse};
