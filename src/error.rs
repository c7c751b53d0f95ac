// SPDX-License-Identifier: GPL-3.0-only
//! Error types for the application
//!
//! Transport errors from the raw VCP layer arrive as `anyhow::Error` and are
//! wrapped here into typed errors at the property accessor boundary.

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Failed to initialize a display
    #[error("Failed to initialize display {id}: {reason}")]
    DisplayInit { id: String, reason: String },

    /// DDC/CI communication error
    #[error("DDC/CI communication error on display {id}: {source}")]
    DdcCi {
        id: String,
        #[source]
        source: anyhow::Error,
    },

    /// Display discovery failed as a whole
    #[error("Display enumeration failed: {0}")]
    Enumeration(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings profile not found in config
    #[error("Settings profile {0} not found")]
    ProfileNotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Task join error
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Lookup failure in the VCP code registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown VCP feature: {0}")]
    UnknownFeature(String),

    #[error("VCP feature {0} has no label table")]
    NoLabelTable(String),
}

/// Failure of a single property get/set against one display
#[derive(Error, Debug)]
pub enum PropertyError {
    /// The raw read/write primitive failed
    #[error("{feature}: transport failure: {source}")]
    Transport {
        feature: String,
        #[source]
        source: anyhow::Error,
    },

    /// Requested value outside `0..=max`
    #[error("{feature}: invalid value {value}, allowed: 0-{max}")]
    OutOfRange { feature: String, value: i64, max: u32 },

    /// Requested value under the feature's floor
    #[error("{feature}: invalid value {value}, minimum: {min}")]
    BelowMinimum { feature: String, value: i64, min: u32 },

    /// Label not in the feature's closed table
    #[error("{feature}: invalid label {label:?}")]
    UnknownLabel { feature: String, label: String },

    /// The feature's increment reads as zero, so no step can be computed
    #[error("{feature}: device reports a zero increment")]
    ZeroIncrement { feature: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Failure to apply one `key=value` pair of a settings batch
#[derive(Error, Debug)]
pub enum SettingError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("property {0} is read-only")]
    ReadOnly(String),

    /// The raw string could not be coerced to the property's value type
    #[error("{property}: cannot use {value:?}: {reason}")]
    Coercion {
        property: String,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// Syntax error in the settings batch text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingParseError {
    /// Token does not split into exactly `key=value`
    #[error("malformed setting: {0:?}")]
    MalformedToken(String),

    /// Value is not a bracketed list of exactly three integers
    #[error("malformed list literal {literal:?}: {reason}")]
    MalformedList { literal: String, reason: String },
}
