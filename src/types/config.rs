//! Configuration structures for the booking-workload seeder
//!
//! This module contains the seeder configuration structure and validation
//! logic used to control the shape of the generated booking history.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "booking-seed",
    version,
    about = "Booking workload seeder - generates realistic historical bookings",
    long_about = "Seeds a workplace-booking platform with a multi-week history of \
synthetic bookings: a realistic daily/time-of-day shape, conflict-tolerant \
scheduling, and probabilistic check-ins inside each booking's window.

EXAMPLES:
    # Run with default settings
    booking-seed

    # Use a configuration file
    booking-seed --config seed-config.json

    # Override specific settings
    booking-seed --window-days 28 --checkin-probability 0.8 --seed 42

    # Generate a configuration template
    booking-seed --print-config > seed-config.json

    # Validate configuration without running
    booking-seed --config seed-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(short, long, help = "Configuration file path (JSON format)")]
    pub config: Option<String>,

    /// Number of trailing calendar days to generate history for
    #[arg(
        long,
        help = "Trailing window length in days",
        long_help = "Number of past calendar days to generate bookings for. Zero is a valid no-op. Default: 21"
    )]
    pub window_days: Option<u32>,

    /// Minimum bookings sampled per resource per day
    #[arg(long, help = "Minimum bookings per resource per day")]
    pub min_daily_bookings: Option<u32>,

    /// Maximum bookings sampled per resource per day
    #[arg(long, help = "Maximum bookings per resource per day")]
    pub max_daily_bookings: Option<u32>,

    /// Probability that a booking gets a check-in (0.0-1.0)
    #[arg(
        long,
        help = "Check-in probability (0.0-1.0)",
        long_help = "Probability that a generated booking is marked as checked in. Range: 0.0-1.0. Default: 0.7"
    )]
    pub checkin_probability: Option<f64>,

    /// Maximum check-in jitter around the booking start, in minutes
    #[arg(long, help = "Check-in jitter bound in minutes")]
    pub checkin_jitter_minutes: Option<i64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Resource fixture file (JSONL of name/kind records)
    #[arg(
        long,
        help = "Resource fixture file (JSONL)",
        long_help = "Path to a JSONL file of {\"name\": ..., \"kind\": \"DESK\"|\"ROOM\"} records used as the resource inventory instead of a generated one."
    )]
    pub fixture: Option<String>,

    /// Output path for the seeded bookings (JSONL)
    #[arg(long, help = "Output path for seeded bookings JSONL file")]
    pub output: Option<String>,

    /// Number of floors in the generated inventory
    #[arg(long, help = "Floors in the generated inventory")]
    pub floor_count: Option<usize>,

    /// Desks per floor in the generated inventory
    #[arg(long, help = "Desks per floor in the generated inventory")]
    pub desks_per_floor: Option<usize>,

    /// Rooms per floor in the generated inventory
    #[arg(long, help = "Rooms per floor in the generated inventory")]
    pub rooms_per_floor: Option<usize>,

    /// Organization members available as booking actors
    #[arg(long, help = "Organization members in the generated roster")]
    pub members_per_org: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without seeding
    #[arg(long, help = "Validate configuration without seeding")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of trailing calendar days to generate history for
    pub window_days: Option<u32>,

    /// Minimum bookings sampled per resource per day
    pub min_daily_bookings: Option<u32>,

    /// Maximum bookings sampled per resource per day
    pub max_daily_bookings: Option<u32>,

    /// Mean slot-start hour for the AM period
    pub am_start_mean_hour: Option<f64>,

    /// Standard deviation of the AM slot-start hour
    pub am_start_std_hours: Option<f64>,

    /// Mean slot-start hour for the PM period
    pub pm_start_mean_hour: Option<f64>,

    /// Standard deviation of the PM slot-start hour
    pub pm_start_std_hours: Option<f64>,

    /// Duration granularity in minutes
    pub duration_granularity_minutes: Option<i64>,

    /// Minimum duration in granularity slots
    pub min_duration_slots: Option<u32>,

    /// Maximum duration in granularity slots
    pub max_duration_slots: Option<u32>,

    /// Probability that a booking gets a check-in (0.0-1.0)
    pub checkin_probability: Option<f64>,

    /// Maximum check-in jitter around the booking start, in minutes
    pub checkin_jitter_minutes: Option<i64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Resource fixture file (JSONL of name/kind records)
    pub fixture: Option<String>,

    /// Output path for the seeded bookings (JSONL)
    pub output: Option<String>,

    /// Number of floors in the generated inventory
    pub floor_count: Option<usize>,

    /// Desks per floor in the generated inventory
    pub desks_per_floor: Option<usize>,

    /// Rooms per floor in the generated inventory
    pub rooms_per_floor: Option<usize>,

    /// Organization members available as booking actors
    pub members_per_org: Option<usize>,
}

/// Configuration for a seeding run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeederConfig {
    /// Number of trailing calendar days to generate history for
    pub window_days: u32,

    /// Minimum bookings sampled per resource per day
    pub min_daily_bookings: u32,

    /// Maximum bookings sampled per resource per day
    pub max_daily_bookings: u32,

    /// Mean slot-start hour for the AM period (fractional, 24h clock)
    pub am_start_mean_hour: f64,

    /// Standard deviation of the AM slot-start hour
    pub am_start_std_hours: f64,

    /// Mean slot-start hour for the PM period (fractional, 24h clock)
    pub pm_start_mean_hour: f64,

    /// Standard deviation of the PM slot-start hour
    pub pm_start_std_hours: f64,

    /// Duration granularity in minutes; durations are multiples of this
    pub duration_granularity_minutes: i64,

    /// Minimum duration in granularity slots
    pub min_duration_slots: u32,

    /// Maximum duration in granularity slots
    pub max_duration_slots: u32,

    /// Probability that a booking gets a check-in (0.0-1.0)
    pub checkin_probability: f64,

    /// Maximum check-in jitter around the booking start, in minutes
    pub checkin_jitter_minutes: i64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Resource fixture file (JSONL of name/kind records)
    pub fixture: Option<String>,

    /// Output path for the seeded bookings (JSONL)
    pub output: Option<String>,

    /// Number of floors in the generated inventory
    pub floor_count: usize,

    /// Desks per floor in the generated inventory
    pub desks_per_floor: usize,

    /// Rooms per floor in the generated inventory
    pub rooms_per_floor: usize,

    /// Organization members available as booking actors
    pub members_per_org: usize,
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self {
            window_days: 21,
            min_daily_bookings: 0,
            max_daily_bookings: 3,
            am_start_mean_hour: 9.75,
            am_start_std_hours: 1.25,
            pm_start_mean_hour: 14.5,
            pm_start_std_hours: 1.5,
            duration_granularity_minutes: 15,
            min_duration_slots: 1,
            max_duration_slots: 8,
            checkin_probability: 0.7,
            checkin_jitter_minutes: 4,
            seed: None,
            fixture: None,
            output: None,
            floor_count: 2,
            desks_per_floor: 12,
            rooms_per_floor: 4,
            members_per_org: 20,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for seeder configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Daily booking count range is invalid
    #[error("Invalid daily booking range: min ({0}) must be <= max ({1})")]
    InvalidDailyBookingRange(u32, u32),

    /// Duration slot range is invalid
    #[error("Invalid duration slot range: min ({0}) must be >= 1 and <= max ({1})")]
    InvalidDurationSlotRange(u32, u32),

    /// Duration granularity is invalid
    #[error("Duration granularity must be at least 1 minute, got {0}")]
    InvalidDurationGranularity(i64),

    /// Probability value is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with the invalid probability
        field: String,
        /// The invalid probability value
        value: f64,
    },

    /// Check-in jitter is negative
    #[error("Check-in jitter must be non-negative, got {0}")]
    InvalidCheckinJitter(i64),

    /// A slot-start distribution parameter is invalid
    #[error("Invalid slot-start distribution for {period}: mean {mean} must be in [0, 24) and std dev {std_dev} must be >= 0")]
    InvalidStartDistribution {
        /// The period whose parameters are invalid
        period: String,
        /// The configured mean hour
        mean: f64,
        /// The configured standard deviation
        std_dev: f64,
    },
}

impl SeederConfig {
    /// Load configuration from CLI arguments and an optional config file.
    ///
    /// Precedence: CLI arguments override file settings, which override
    /// defaults.
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = &args.config {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        if let Some(v) = args.window_days {
            config.window_days = v;
        }
        if let Some(v) = args.min_daily_bookings {
            config.min_daily_bookings = v;
        }
        if let Some(v) = args.max_daily_bookings {
            config.max_daily_bookings = v;
        }
        if let Some(v) = args.checkin_probability {
            config.checkin_probability = v;
        }
        if let Some(v) = args.checkin_jitter_minutes {
            config.checkin_jitter_minutes = v;
        }
        if let Some(v) = args.seed {
            config.seed = Some(v);
        }
        if let Some(v) = args.fixture {
            config.fixture = Some(v);
        }
        if let Some(v) = args.output {
            config.output = Some(v);
        }
        if let Some(v) = args.floor_count {
            config.floor_count = v;
        }
        if let Some(v) = args.desks_per_floor {
            config.desks_per_floor = v;
        }
        if let Some(v) = args.rooms_per_floor {
            config.rooms_per_floor = v;
        }
        if let Some(v) = args.members_per_org {
            config.members_per_org = v;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file, filling gaps with defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => {}
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        }

        let contents = fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&contents)?;
        Ok(Self::default().merged_with(file))
    }

    /// Overlay a partial configuration file onto this configuration
    pub fn merged_with(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.window_days {
            self.window_days = v;
        }
        if let Some(v) = file.min_daily_bookings {
            self.min_daily_bookings = v;
        }
        if let Some(v) = file.max_daily_bookings {
            self.max_daily_bookings = v;
        }
        if let Some(v) = file.am_start_mean_hour {
            self.am_start_mean_hour = v;
        }
        if let Some(v) = file.am_start_std_hours {
            self.am_start_std_hours = v;
        }
        if let Some(v) = file.pm_start_mean_hour {
            self.pm_start_mean_hour = v;
        }
        if let Some(v) = file.pm_start_std_hours {
            self.pm_start_std_hours = v;
        }
        if let Some(v) = file.duration_granularity_minutes {
            self.duration_granularity_minutes = v;
        }
        if let Some(v) = file.min_duration_slots {
            self.min_duration_slots = v;
        }
        if let Some(v) = file.max_duration_slots {
            self.max_duration_slots = v;
        }
        if let Some(v) = file.checkin_probability {
            self.checkin_probability = v;
        }
        if let Some(v) = file.checkin_jitter_minutes {
            self.checkin_jitter_minutes = v;
        }
        if let Some(v) = file.seed {
            self.seed = Some(v);
        }
        if let Some(v) = file.fixture {
            self.fixture = Some(v);
        }
        if let Some(v) = file.output {
            self.output = Some(v);
        }
        if let Some(v) = file.floor_count {
            self.floor_count = v;
        }
        if let Some(v) = file.desks_per_floor {
            self.desks_per_floor = v;
        }
        if let Some(v) = file.rooms_per_floor {
            self.rooms_per_floor = v;
        }
        if let Some(v) = file.members_per_org {
            self.members_per_org = v;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.min_daily_bookings > self.max_daily_bookings {
            return Err(ConfigValidationError::InvalidDailyBookingRange(
                self.min_daily_bookings,
                self.max_daily_bookings,
            ));
        }

        if self.min_duration_slots == 0 || self.min_duration_slots > self.max_duration_slots {
            return Err(ConfigValidationError::InvalidDurationSlotRange(
                self.min_duration_slots,
                self.max_duration_slots,
            ));
        }

        if self.duration_granularity_minutes < 1 {
            return Err(ConfigValidationError::InvalidDurationGranularity(
                self.duration_granularity_minutes,
            ));
        }

        if !(0.0..=1.0).contains(&self.checkin_probability) {
            return Err(ConfigValidationError::InvalidProbability {
                field: "checkin_probability".to_string(),
                value: self.checkin_probability,
            });
        }

        if self.checkin_jitter_minutes < 0 {
            return Err(ConfigValidationError::InvalidCheckinJitter(
                self.checkin_jitter_minutes,
            ));
        }

        for (period, mean, std_dev) in [
            ("AM", self.am_start_mean_hour, self.am_start_std_hours),
            ("PM", self.pm_start_mean_hour, self.pm_start_std_hours),
        ] {
            if !(0.0..24.0).contains(&mean) || std_dev < 0.0 {
                return Err(ConfigValidationError::InvalidStartDistribution {
                    period: period.to_string(),
                    mean,
                    std_dev,
                });
            }
        }

        Ok(())
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
