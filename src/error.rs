//! Error types for the settings and configuration layer.
//!
//! The visual derivation engine itself is total over validated inputs and
//! has no error type.

use thiserror::Error;

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Error type for settings validation and persistence.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Zoom must be a finite, strictly positive pixels-per-minute factor.
    #[error("invalid zoom level {0}: must be finite and greater than zero")]
    InvalidZoom(f32),

    /// Hidden hours collapse `[0, start_hour)` and must leave part of the day.
    #[error("invalid start hour {0}: must be between 0 and 23")]
    InvalidStartHour(u32),

    #[error("invalid color for {field}: `{value}` ({reason})")]
    InvalidColor {
        field: String,
        value: String,
        reason: String,
    },

    #[error("color rule #{0} has an empty category")]
    EmptyRuleCategory(usize),

    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    InvalidLogLevel(String),

    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings format error: {0}")]
    Json(#[from] serde_json::Error),
}
