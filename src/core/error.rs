//! Error types for core module
//!
//! Provides error types for settings validation and persistence.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Board width too small to hold 8 whole-pixel squares
    #[error("Invalid board width: {width}px (must be at least 8)")]
    InvalidBoardWidth { width: u32 },
}

/// Result type alias for core operations
pub type SettingsResult<T> = Result<T, SettingsError>;
