// Booking Workload Seeder - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/booking-seed
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/booking-seed --window-days 28 --seed 42 --output bookings.jsonl
// ```

use anyhow::Context;
use booking_seed::booking::{BookingStore, InMemoryBookingStore};
use booking_seed::inventory::{load_fixture, InMemoryInventory};
use booking_seed::types::{CliArgs, OrgId, SeederConfig};
use booking_seed::workload::{LoggingConfig, SeedRun, SeedStatistics};
use booking_seed::SeedResult;
use chrono::Utc;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Handle flags that don't require full initialization
    if args.print_config {
        match SeederConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };
    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting booking workload seeder");

    let config = match SeederConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - seeding will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    if let Err(e) = run_seeder(&config) {
        error!("Seeding run failed: {:#}", e);
        process::exit(1);
    }

    info!("Booking workload seeder completed successfully");
}

/// Execute one seeding run end to end
fn run_seeder(config: &SeederConfig) -> anyhow::Result<()> {
    let org = OrgId::new();

    // Inventory: fixture file when given, generated otherwise
    let inventory = match &config.fixture {
        Some(path) => {
            eprintln!("Loading resource fixture from {}...", path);
            let fixtures = load_fixture(path)
                .with_context(|| format!("loading resource fixture {}", path))?;
            InMemoryInventory::from_fixture(config, org, &fixtures)
        }
        None => {
            eprintln!("Generating inventory...");
            InMemoryInventory::generate(config, org)
        }
    };

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    eprintln!("Seeding bookings for a {}-day window...", config.window_days);
    let mut store = InMemoryBookingStore::new();
    let statistics = SeedRun::new(config).execute(&inventory, &mut store, Utc::now(), &mut rng)?;

    if let Some(path) = &config.output {
        write_bookings_output(&store, path)
            .with_context(|| format!("writing seeded bookings to {}", path))?;
        eprintln!("Seeded bookings written to: {}", path);
    }

    print_final_statistics(&statistics);
    Ok(())
}

/// Write the seeded booking population as JSONL
fn write_bookings_output(store: &InMemoryBookingStore, path: &str) -> SeedResult<()> {
    use std::fs::File;
    use std::io::{BufWriter, Write};

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let bookings = store.list_bookings()?;
    for booking in &bookings {
        let line = serde_json::to_string(booking)?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    info!(count = bookings.len(), path, "wrote seeded bookings");
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SeederConfig) {
    eprintln!("Booking Workload Seeder");
    eprintln!("=======================");
    eprintln!("Seeds a workplace-booking platform with realistic historical bookings");
    eprintln!();
    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SeederConfig) {
    eprintln!("Configuration:");
    eprintln!("  Trailing Window: {} days", config.window_days);
    eprintln!(
        "  Daily Bookings per Resource: {} - {}",
        config.min_daily_bookings, config.max_daily_bookings
    );
    eprintln!(
        "  AM Start: {:.2}h +/- {:.2}h, PM Start: {:.2}h +/- {:.2}h",
        config.am_start_mean_hour,
        config.am_start_std_hours,
        config.pm_start_mean_hour,
        config.pm_start_std_hours
    );
    eprintln!(
        "  Duration: {} - {} x {} minutes",
        config.min_duration_slots, config.max_duration_slots, config.duration_granularity_minutes
    );
    eprintln!("  Check-in Probability: {:.1}%", config.checkin_probability * 100.0);
    eprintln!("  Check-in Jitter: +/- {} minutes", config.checkin_jitter_minutes);
    match &config.fixture {
        Some(path) => eprintln!("  Inventory: fixture {}", path),
        None => eprintln!(
            "  Inventory: {} floors x ({} desks + {} rooms), {} members",
            config.floor_count,
            config.desks_per_floor,
            config.rooms_per_floor,
            config.members_per_org
        ),
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}

/// Print the aggregate run report
fn print_final_statistics(statistics: &SeedStatistics) {
    eprintln!();
    eprintln!("{}", statistics.summary());
}
