//! Error handling for the test utilities
//!
//! Environment failures (entropy, port probes) and malformed fixture input are
//! reported through [`TestUtilError`]. Script engine errors are never wrapped;
//! the harness hands them back in the engine's own type.

use std::fmt;

/// Result type alias for test utility operations
pub type Result<T> = std::result::Result<T, TestUtilError>;

/// Error kinds produced by the test utilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestUtilError {
    /// The OS random number generator failed
    Entropy(String),
    /// Probing for a free port failed
    Network(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
    /// A keystone encoding could not be decoded
    InvalidKeystone(String),
    /// A hash string could not be parsed
    InvalidHash(String),
}

impl fmt::Display for TestUtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestUtilError::Entropy(msg) => write!(f, "Entropy error: {msg}"),
            TestUtilError::Network(msg) => write!(f, "Network error: {msg}"),
            TestUtilError::Config(msg) => write!(f, "Configuration error: {msg}"),
            TestUtilError::Io(msg) => write!(f, "I/O error: {msg}"),
            TestUtilError::InvalidKeystone(msg) => write!(f, "Invalid keystone: {msg}"),
            TestUtilError::InvalidHash(msg) => write!(f, "Invalid hash: {msg}"),
        }
    }
}

impl std::error::Error for TestUtilError {}

impl From<std::io::Error> for TestUtilError {
    fn from(err: std::io::Error) -> Self {
        TestUtilError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for TestUtilError {
    fn from(err: toml::de::Error) -> Self {
        TestUtilError::Config(err.to_string())
    }
}

impl From<hex::FromHexError> for TestUtilError {
    fn from(err: hex::FromHexError) -> Self {
        TestUtilError::InvalidHash(err.to_string())
    }
}
