//! Core module - settings and their persistence
//!
//! # Resources
//!
//! - [`TransitionSettings`] - Board width, orientation and animation preferences
//!
//! # Persistence
//!
//! - [`load_settings`] / [`save_settings`] - JSON file in the user config dir
//! - [`load_from`] / [`save_to`] - Same, for an explicit path
//!
//! # Errors
//!
//! - [`SettingsError`] - I/O, JSON and validation failures

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::*;
pub use resources::*;
pub use settings_persistence::*;
