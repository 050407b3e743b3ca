//! Speed value type with unit conversions
//!
//! `Speed` is a newtype over the canonical magnitude in meters per second.
//! Every other unit is a pure view computed from that one number, so the
//! units can never drift apart.
//!
//! # Design Philosophy
//! - f64 storage, no validation: negative, infinite and NaN values pass through
//! - Implements common traits (Add, Sub, Mul, Div, Neg, Ord, Hash, Display, etc.)
//! - No mutation API, every operation returns a new value
//! - Total ordering via Ord trait (NaN handled as less than all values)
//! - Serde support for serialization (`serde` feature)
//!
//! # Usage
//! ```
//! use speed_units_core::core_types::units::{Speed, SpeedUnit};
//!
//! let cruise = Speed::from_kilometers_per_hour(36.0);
//! assert!((cruise.meters_per_second() - 10.0).abs() < 1e-9);
//!
//! let faster = cruise + Speed::from_meters_per_second(5.0);
//! assert_eq!(format!("{:.1}", faster), "15.0 m/s");
//! assert_eq!(format!("{:.1}", faster.display_in(SpeedUnit::KilometersPerHour)), "54.0 km/h");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

// ============================================================================
// CONVERSION FACTORS (multiply m/s by these)
// ============================================================================

/// Kilometers per hour in one meter per second
pub const KMH_PER_MPS: f64 = 3.6;

/// Statute miles per hour in one meter per second
pub const MPH_PER_MPS: f64 = 2.2369362920544;

/// Knots in one meter per second
pub const KNOTS_PER_MPS: f64 = 1.9438444924406;

// ============================================================================
// HELPER FUNCTIONS FOR TOTAL ORDERING
// ============================================================================

/// Numeric comparison that stays total in the presence of NaN.
///
/// Non-NaN values compare numerically (so `-0.0 == 0.0`), NaN equals NaN
/// and sorts below every other value including `-inf`.
#[inline]
fn f64_canonical_cmp(a: f64, b: f64) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => b.is_nan().cmp(&a.is_nan()),
    }
}

/// Bit pattern used for hashing, agreeing with `f64_canonical_cmp` equality.
#[inline]
fn f64_canonical_bits(v: f64) -> u64 {
    if v.is_nan() {
        f64::NAN.to_bits()
    } else if v == 0.0 {
        0.0_f64.to_bits()
    } else {
        v.to_bits()
    }
}

// ============================================================================
// SPEED UNITS
// ============================================================================

/// The units a [`Speed`] can be constructed from and read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpeedUnit {
    /// Meters per second (canonical)
    MetersPerSecond,
    /// Kilometers per hour
    KilometersPerHour,
    /// Statute miles per hour
    MilesPerHour,
    /// Nautical miles per hour
    Knots,
}

impl SpeedUnit {
    /// Every supported unit, canonical first
    pub const ALL: [SpeedUnit; 4] = [
        SpeedUnit::MetersPerSecond,
        SpeedUnit::KilometersPerHour,
        SpeedUnit::MilesPerHour,
        SpeedUnit::Knots,
    ];

    /// Value of one meter per second expressed in this unit
    #[inline]
    #[must_use]
    pub const fn per_meter_per_second(self) -> f64 {
        match self {
            SpeedUnit::MetersPerSecond => 1.0,
            SpeedUnit::KilometersPerHour => KMH_PER_MPS,
            SpeedUnit::MilesPerHour => MPH_PER_MPS,
            SpeedUnit::Knots => KNOTS_PER_MPS,
        }
    }

    /// Short symbol used when rendering values in this unit
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::MetersPerSecond => "m/s",
            SpeedUnit::KilometersPerHour => "km/h",
            SpeedUnit::MilesPerHour => "mph",
            SpeedUnit::Knots => "kn",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// SPEED
// ============================================================================

/// Speed stored canonically in meters per second
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Speed(f64);

impl Speed {
    /// Zero speed
    pub const ZERO: Speed = Speed(0.0);

    /// Create a speed from meters per second. The value is stored as given.
    #[inline]
    #[must_use]
    pub const fn from_meters_per_second(value: f64) -> Self {
        Speed(value)
    }

    /// Create a speed from kilometers per hour
    #[inline]
    #[must_use]
    pub fn from_kilometers_per_hour(value: f64) -> Self {
        Speed(value / KMH_PER_MPS)
    }

    /// Create a speed from miles per hour
    #[inline]
    #[must_use]
    pub fn from_miles_per_hour(value: f64) -> Self {
        Speed(value / MPH_PER_MPS)
    }

    /// Create a speed from knots
    #[inline]
    #[must_use]
    pub fn from_knots(value: f64) -> Self {
        Speed(value / KNOTS_PER_MPS)
    }

    /// Create a speed from a value in any supported unit
    #[inline]
    #[must_use]
    pub fn from_unit(value: f64, unit: SpeedUnit) -> Self {
        Speed(value / unit.per_meter_per_second())
    }

    /// Canonical magnitude in meters per second
    #[inline]
    #[must_use]
    pub const fn meters_per_second(self) -> f64 {
        self.0
    }

    /// Speed in kilometers per hour
    #[inline]
    #[must_use]
    pub fn kilometers_per_hour(self) -> f64 {
        self.0 * KMH_PER_MPS
    }

    /// Speed in miles per hour
    #[inline]
    #[must_use]
    pub fn miles_per_hour(self) -> f64 {
        self.0 * MPH_PER_MPS
    }

    /// Speed in knots
    #[inline]
    #[must_use]
    pub fn knots(self) -> f64 {
        self.0 * KNOTS_PER_MPS
    }

    /// Speed expressed in `unit`
    #[inline]
    #[must_use]
    pub fn to_unit(self, unit: SpeedUnit) -> f64 {
        self.0 * unit.per_meter_per_second()
    }

    /// Magnitude without direction
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Speed(self.0.abs())
    }

    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    #[inline]
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Equality against a value of any type.
    ///
    /// Returns `false` for anything that is not a `Speed`.
    #[must_use]
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<Speed>().is_some_and(|s| self == s)
    }

    /// Render in `unit` with that unit's symbol, e.g. `36 km/h`
    #[inline]
    #[must_use]
    pub fn display_in(self, unit: SpeedUnit) -> SpeedIn {
        SpeedIn { speed: self, unit }
    }
}

impl PartialEq for Speed {
    fn eq(&self, other: &Self) -> bool {
        f64_canonical_cmp(self.0, other.0) == Ordering::Equal
    }
}

impl Eq for Speed {}

impl PartialOrd for Speed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Speed {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_canonical_cmp(self.0, other.0)
    }
}

impl Hash for Speed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        f64_canonical_bits(self.0).hash(state);
    }
}

impl From<Speed> for f64 {
    fn from(s: Speed) -> f64 {
        s.0
    }
}

impl Add for Speed {
    type Output = Speed;
    fn add(self, rhs: Speed) -> Speed {
        Speed(self.0 + rhs.0)
    }
}

impl Sub for Speed {
    type Output = Speed;
    fn sub(self, rhs: Speed) -> Speed {
        Speed(self.0 - rhs.0)
    }
}

impl Mul<f64> for Speed {
    type Output = Speed;
    fn mul(self, rhs: f64) -> Speed {
        Speed(self.0 * rhs)
    }
}

// Scalar on the left: k × speed = speed × k
impl Mul<Speed> for f64 {
    type Output = Speed;
    fn mul(self, rhs: Speed) -> Speed {
        Speed(rhs.0 * self)
    }
}

impl Div<f64> for Speed {
    type Output = Speed;
    fn div(self, rhs: f64) -> Speed {
        Speed(self.0 / rhs)
    }
}

impl Neg for Speed {
    type Output = Speed;
    fn neg(self) -> Speed {
        Speed(-self.0)
    }
}

impl Sum for Speed {
    fn sum<I: Iterator<Item = Speed>>(iter: I) -> Speed {
        iter.fold(Speed::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Speed> for Speed {
    fn sum<I: Iterator<Item = &'a Speed>>(iter: I) -> Speed {
        iter.copied().sum()
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} m/s", precision, self.0),
            None => write!(f, "{} m/s", self.0),
        }
    }
}

/// A [`Speed`] rendered in a chosen unit, see [`Speed::display_in`]
#[derive(Debug, Clone, Copy)]
pub struct SpeedIn {
    speed: Speed,
    unit: SpeedUnit,
}

impl fmt::Display for SpeedIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.speed.to_unit(self.unit);
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, value, self.unit),
            None => write!(f, "{} {}", value, self.unit),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
