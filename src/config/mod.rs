//! Configuration management for the PayU Latam integration
//!
//! This module holds the settings accessor and the loader that assembles
//! user-supplied values from the host application's configuration sources.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::PayuSettings;
