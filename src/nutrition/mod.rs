//! Units module
//!
//! Measurement units, user unit preferences and unit/amount text handling.

pub mod converter;
pub mod units;

pub use converter::{clean_amount, parse_amount, parse_unit, unit_text};
pub use units::{
    EnergyUnit, UserUnits, UserVolumeUnits, VolumeExplicitUnit, VolumeUnit, WeightUnit,
};
