//! Error types for the booking-workload seeder
//!
//! Expected outcomes of randomized scheduling (a conflicting submission, a
//! check-in against a deleted booking) are not errors; they are explicit
//! variants on the store result enums. Everything here is fatal and aborts
//! the run.

use thiserror::Error;

use crate::types::ConfigValidationError;

/// Fatal errors that abort a seeding run
#[derive(Debug, Error)]
pub enum SeedError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    Configuration(#[from] ConfigValidationError),

    /// Reading the floor/resource/roster inventory failed
    #[error("Inventory read failed: {0}")]
    Inventory(String),

    /// A resource fixture file could not be parsed
    #[error("Fixture parse failed: {0}")]
    Fixture(String),

    /// A booking store request failed for a non-conflict reason
    #[error("Booking store request failed: {0}")]
    Store(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SeedError {
    /// Create an inventory error
    pub fn inventory(msg: impl Into<String>) -> Self {
        Self::Inventory(msg.into())
    }

    /// Create a fixture error
    pub fn fixture(msg: impl Into<String>) -> Self {
        Self::Fixture(msg.into())
    }

    /// Create a booking store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}

/// Result type for seeder operations
pub type SeedResult<T> = Result<T, SeedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_constructors() {
        let err = SeedError::inventory("no floors");
        assert!(matches!(err, SeedError::Inventory(_)));
        assert_eq!(err.to_string(), "Inventory read failed: no floors");

        let err = SeedError::store("connection reset");
        assert_eq!(err.to_string(), "Booking store request failed: connection reset");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: SeedError = io_error.into();
        assert!(matches!(err, SeedError::Io(_)));
    }

    #[test]
    fn test_error_from_config_validation() {
        let validation = ConfigValidationError::InvalidCheckinJitter(-1);
        let err: SeedError = validation.into();
        assert!(matches!(err, SeedError::Configuration(_)));
    }
}
