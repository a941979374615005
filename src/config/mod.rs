//! Configuration management
//!
//! This module holds the few process-wide settings the test helpers read:
//! the host used when probing for free ports and the level test logging
//! runs at.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
