//! Workload generation and run orchestration
//!
//! The booking synthesizer, the check-in simulator, the orchestrator that
//! sequences them, consolidated statistics, and logging setup.

pub mod checkin;
pub mod logging;
pub mod orchestrator;
pub mod statistics;
pub mod synthesizer;

pub use checkin::{checkin_time, CheckinSimulator, CheckinStats};
pub use logging::LoggingConfig;
pub use orchestrator::SeedRun;
pub use statistics::SeedStatistics;
pub use synthesizer::{BookingSynthesizer, SynthesisStats};
