//! FFI-exposed speed value and unit types.
//!
//! `SpeedValue` crosses the boundary by value. It has the same layout as a
//! single `double`, so C# can marshal it as a blittable struct.

use rustc_hash::FxHasher;
use speed_units_core::{Speed, SpeedUnit as CoreSpeedUnit};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A speed passed by value across the FFI boundary.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedValue {
    /// Canonical magnitude in meters per second.
    pub meters_per_second: f64,
}

impl From<Speed> for SpeedValue {
    fn from(speed: Speed) -> Self {
        SpeedValue {
            meters_per_second: speed.meters_per_second(),
        }
    }
}

impl From<SpeedValue> for Speed {
    fn from(value: SpeedValue) -> Self {
        Speed::from_meters_per_second(value.meters_per_second)
    }
}

/// Unit selector for construction, conversion and formatting.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    /// Meters per second
    MetersPerSecond = 0,
    /// Kilometers per hour
    KilometersPerHour = 1,
    /// Miles per hour
    MilesPerHour = 2,
    /// Knots
    Knots = 3,
}

impl From<SpeedUnit> for CoreSpeedUnit {
    fn from(unit: SpeedUnit) -> Self {
        match unit {
            SpeedUnit::MetersPerSecond => CoreSpeedUnit::MetersPerSecond,
            SpeedUnit::KilometersPerHour => CoreSpeedUnit::KilometersPerHour,
            SpeedUnit::MilesPerHour => CoreSpeedUnit::MilesPerHour,
            SpeedUnit::Knots => CoreSpeedUnit::Knots,
        }
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Zero speed.
#[no_mangle]
pub extern "C" fn speed_zero() -> SpeedValue {
    Speed::ZERO.into()
}

/// Speed from meters per second. The value is stored as given.
#[no_mangle]
pub extern "C" fn speed_from_meters_per_second(value: f64) -> SpeedValue {
    Speed::from_meters_per_second(value).into()
}

/// Speed from kilometers per hour.
#[no_mangle]
pub extern "C" fn speed_from_kilometers_per_hour(value: f64) -> SpeedValue {
    Speed::from_kilometers_per_hour(value).into()
}

/// Speed from miles per hour.
#[no_mangle]
pub extern "C" fn speed_from_miles_per_hour(value: f64) -> SpeedValue {
    Speed::from_miles_per_hour(value).into()
}

/// Speed from knots.
#[no_mangle]
pub extern "C" fn speed_from_knots(value: f64) -> SpeedValue {
    Speed::from_knots(value).into()
}

/// Speed from a value in `unit`.
#[no_mangle]
pub extern "C" fn speed_from_unit(value: f64, unit: SpeedUnit) -> SpeedValue {
    Speed::from_unit(value, unit.into()).into()
}

/// Read `speed` in `unit`.
#[no_mangle]
pub extern "C" fn speed_to_unit(speed: SpeedValue, unit: SpeedUnit) -> f64 {
    Speed::from(speed).to_unit(unit.into())
}

// ============================================================================
// ARITHMETIC
// ============================================================================

/// `a + b`
#[no_mangle]
pub extern "C" fn speed_add(a: SpeedValue, b: SpeedValue) -> SpeedValue {
    (Speed::from(a) + Speed::from(b)).into()
}

/// `a - b`
#[no_mangle]
pub extern "C" fn speed_sub(a: SpeedValue, b: SpeedValue) -> SpeedValue {
    (Speed::from(a) - Speed::from(b)).into()
}

/// `speed * scalar`
#[no_mangle]
pub extern "C" fn speed_mul(speed: SpeedValue, scalar: f64) -> SpeedValue {
    (Speed::from(speed) * scalar).into()
}

/// `speed / scalar`. Dividing by zero yields infinity or NaN.
#[no_mangle]
pub extern "C" fn speed_div(speed: SpeedValue, scalar: f64) -> SpeedValue {
    (Speed::from(speed) / scalar).into()
}

/// `-speed`
#[no_mangle]
pub extern "C" fn speed_neg(speed: SpeedValue) -> SpeedValue {
    (-Speed::from(speed)).into()
}

// ============================================================================
// COMPARISON
// ============================================================================

/// Three-way comparison: -1 if `a < b`, 0 if equal, 1 if `a > b`.
/// NaN sorts below every other value and equals itself.
#[no_mangle]
pub extern "C" fn speed_compare(a: SpeedValue, b: SpeedValue) -> i32 {
    match Speed::from(a).cmp(&Speed::from(b)) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Equality consistent with `speed_compare`.
#[no_mangle]
pub extern "C" fn speed_equals(a: SpeedValue, b: SpeedValue) -> bool {
    Speed::from(a) == Speed::from(b)
}

/// Hash consistent with `speed_equals`. Stable across processes.
#[no_mangle]
pub extern "C" fn speed_hash(speed: SpeedValue) -> u64 {
    let mut hasher = FxHasher::default();
    Speed::from(speed).hash(&mut hasher);
    hasher.finish()
}
