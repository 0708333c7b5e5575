//! Core types for the booking-workload seeder
//!
//! Identifier newtypes, shared enumerations, and the seeder configuration.

pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::{CliArgs, ConfigError, ConfigFile, ConfigValidationError, SeederConfig};
pub use enums::{Period, ResourceKind};
pub use identifiers::{BookingId, FloorId, OrgId, ResourceId, UserId};
