//! Core data models for the timecard parsing engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_period;
mod shift;

pub use pay_period::ParsedPayPeriod;
pub use shift::{SPLIT_TOLERANCE, Shift};
