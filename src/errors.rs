//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`AccreteError`] covers the genuinely exceptional
//! failure modes:
//! - Invalid geometry handed to the placement session (e.g. a non-positive seed radius)
//! - Invalid or unreadable settings files
//!
//! A placement rejected because of a collision is **not** an error. It is
//! reported through [`CommitOutcome::Rejected`](crate::placement::CommitOutcome::Rejected).
//!
//! # Usage
//!
//! Fallible APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, AccreteError>`.
//!
//! ```rust,ignore
//! use accrete::errors::Result;
//! use accrete::settings::SandboxSettings;
//!
//! fn load() -> Result<SandboxSettings> {
//!     SandboxSettings::from_path("sandbox.json")
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum AccreteError {
    // ========================================================================
    // Geometry Errors
    // ========================================================================
    /// A sphere radius was zero, negative or not finite.
    #[error("Invalid sphere radius: {0} (must be finite and > 0)")]
    InvalidRadius(f32),

    /// A sphere center contained NaN or infinite components.
    #[error("Invalid sphere center: {0}")]
    InvalidCenter(glam::Vec3),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A settings value failed validation.
    #[error("Invalid setting `{field}`: {reason}")]
    InvalidSetting {
        /// Name of the offending field
        field: &'static str,
        /// Human readable explanation
        reason: String,
    },

    /// File I/O error while reading settings.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, AccreteError>`.
pub type Result<T> = std::result::Result<T, AccreteError>;
