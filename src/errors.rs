//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`CourtsideError`] covers every failure mode:
//! - Configuration errors, raised while tracks are being constructed
//! - Caller-contract violations at query time (negative time or frame)
//! - Unknown track lookups
//! - Scene file loading and parsing errors
//!
//! Query-time code never validates configuration again: a track that was
//! built successfully can always be sampled.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, CourtsideError>`.
//!
//! ```rust,ignore
//! use courtside::errors::{CourtsideError, Result};
//!
//! fn ball_at(animator: &PositionAnimator, ms: i64) -> Result<DVec3> {
//!     animator.get_position("ball", ms)
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum CourtsideError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    /// Track, sequence or settings data is malformed.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Two tracks were registered under the same id.
    #[error("Duplicate track id: {0}")]
    DuplicateTrack(String),

    // ========================================================================
    // Query Errors
    // ========================================================================
    /// The caller broke the query contract (e.g. negative elapsed time).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No track is registered under the requested id.
    #[error("Track not found: {0}")]
    TrackNotFound(String),

    // ========================================================================
    // Loading Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CourtsideError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }
}

/// Alias for `Result<T, CourtsideError>`.
pub type Result<T> = std::result::Result<T, CourtsideError>;
