//! Common types and utilities shared across factlens crates.
//!
//! This crate defines the shared error type and the observability helpers
//! used throughout the factlens workspace. It stays dependency-light so the
//! classification core and the binaries can both depend on it.
//!
//! # Overview
//!
//! - [`observability`]: Centralised tracing/logging initialisation
//! - [`FactlensError`] and [`Result`]: Shared error handling
//!
//! # Examples
//!
//! ```rust
//! use factlens_common::FactlensError;
//!
//! let err = FactlensError::Corpus("no REAL examples".to_string());
//! assert_eq!(err.to_string(), "Training corpus error: no REAL examples");
//! ```

pub mod observability;

/// Error types used across the factlens system.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FactlensError {
    /// Both the headline and the body were blank.
    #[error("Empty input: provide a headline or article text")]
    EmptyInput,

    /// The training corpus cannot produce a usable model.
    #[error("Training corpus error: {0}")]
    Corpus(String),

    /// Configuration was incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A fact-checking URL template is malformed.
    #[error("Invalid URL template for {name}: {reason}")]
    Template { name: String, reason: String },
}

/// Convenient alias for results that use [`FactlensError`].
pub type Result<T> = std::result::Result<T, FactlensError>;
