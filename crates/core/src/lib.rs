//! Speed Units Core Library
//!
//! An immutable speed value type stored canonically in meters per second,
//! with read-only views in kilometers per hour, miles per hour and knots.
//!
//! ## Features
//!
//! - Named constructors per unit plus a generic [`Speed::from_unit`]
//! - Arithmetic on the canonical magnitude (`+`, `-`, `*`, `/`, unary `-`, `Sum`)
//! - Total ordering, equality and hashing that agree with each other
//! - `Display` as `"<m/s> m/s"` and `FromStr` accepting any supported unit symbol
//! - Optional serde support (`serde` feature, on by default)

// Core types and utilities
pub mod core_types;

// Re-export core types
pub use core_types::{ParseSpeedError, Speed, SpeedIn, SpeedUnit};
pub use core_types::{KMH_PER_MPS, KNOTS_PER_MPS, MPH_PER_MPS};
