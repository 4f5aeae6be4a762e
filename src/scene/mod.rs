//! Scene configuration
//!
//! Static track tables for a court:
//! - `SceneConfig`: entities, their waypoints and the animator settings,
//!   loadable from JSON
//! - `volleyball`: the built-in "Turn 1" rally

pub mod config;
pub mod volleyball;

pub use config::{EntityConfig, SceneConfig};
