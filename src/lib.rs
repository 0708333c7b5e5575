//! Booking Workload Seeder
//!
//! Seeds a multi-tenant workplace-booking platform with synthetic but
//! statistically realistic historical bookings, for load-testing dashboards
//! and KPI computations.
//!
//! # Overview
//!
//! Given an inventory of floors and bookable resources (desks, rooms) and a
//! roster of organization members, the seeder produces a multi-week history
//! of plausible bookings with a realistic daily and time-of-day shape,
//! tolerates scheduling conflicts, and probabilistically marks a subset of
//! bookings as checked in at a perturbed time inside their window.
//!
//! ## Key Features
//!
//! - **Two-peak daily shape**: slot starts mix a morning and an afternoon
//!   normal distribution, reproducing the lunch-hour occupancy dip
//! - **Conflict tolerance**: the booking store is the sole arbiter of
//!   double-booking; rejected submissions are counted and skipped
//! - **Temporal invariants**: every booking has `start < end`, and every
//!   check-in falls inside its booking's window
//! - **Reproducibility**: all randomness flows through one injected,
//!   seedable random source
//! - **Idempotent check-in pass**: re-runs never overwrite an existing
//!   check-in
//!
//! ## Quick Start
//!
//! ```rust
//! use booking_seed::booking::InMemoryBookingStore;
//! use booking_seed::inventory::InMemoryInventory;
//! use booking_seed::types::{OrgId, SeederConfig};
//! use booking_seed::workload::SeedRun;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = SeederConfig { window_days: 7, ..Default::default() };
//! config.validate()?;
//!
//! let inventory = InMemoryInventory::generate(&config, OrgId::new());
//! let mut store = InMemoryBookingStore::new();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let stats = SeedRun::new(&config)
//!     .execute(&inventory, &mut store, chrono::Utc::now(), &mut rng)?;
//! println!("{}", stats.summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, shared enums, and configuration
//! - [`sampling`]: probability-distribution sampling for scheduling
//! - [`inventory`]: floor/resource/roster read model and fixture loading
//! - [`booking`]: booking records and the booking store interface
//! - [`workload`]: synthesizer, check-in simulator, orchestration, logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod booking;
pub mod error;
pub mod inventory;
pub mod sampling;
pub mod types;
pub mod workload;

// Core types and identifiers
pub use types::{
    BookingId,
    CliArgs,
    ConfigError,
    ConfigValidationError,
    FloorId,
    OrgId,
    Period,
    ResourceId,
    ResourceKind,
    SeederConfig,
    UserId,
};

// Errors
pub use error::{SeedError, SeedResult};

// Sampling
pub use sampling::SlotSampler;

// Inventory types and functionality
pub use inventory::{Floor, InMemoryInventory, InventoryStore, Resource, ResourceFixture, User};

// Booking types and functionality
pub use booking::{Booking, BookingStore, CheckinOutcome, InMemoryBookingStore, SubmitOutcome};

// Workload generation and orchestration
pub use workload::{
    BookingSynthesizer, CheckinSimulator, CheckinStats, LoggingConfig, SeedRun, SeedStatistics,
    SynthesisStats,
};
