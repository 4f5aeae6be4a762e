//! Utility Module
//!
//! - [`time`]: time sources the animation clock reads "now" from

pub mod time;

pub use time::{ManualTimeSource, SystemTimeSource, TimeSource};
