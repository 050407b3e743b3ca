//! Core types and utilities

pub mod parse;
pub mod units;

pub use parse::ParseSpeedError;
pub use units::*;
