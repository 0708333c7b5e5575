//! Booking synthesis
//!
//! Walks the resource inventory across a trailing window of calendar days
//! and submits sampled booking slots. Conflicts are an expected, frequent
//! outcome of randomized scheduling and are counted and skipped; any other
//! store failure aborts the run.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::booking::{BookingStore, SubmitOutcome};
use crate::error::{SeedError, SeedResult};
use crate::inventory::{Resource, User};
use crate::sampling::SlotSampler;
use crate::types::{OrgId, Period, SeederConfig};

/// Aggregate counters for one synthesis pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisStats {
    /// Resources the synthesizer walked
    pub resources_visited: usize,
    /// Resources skipped because their organization roster was empty
    pub resources_skipped: usize,
    /// Booking submissions issued
    pub bookings_attempted: u64,
    /// Submissions the store accepted
    pub bookings_created: u64,
    /// Submissions rejected as overlapping an existing booking
    pub conflicts: u64,
}

/// Generates a multi-week booking history with a realistic daily shape.
///
/// Iteration order is deterministic (resource, then day, then slot) and the
/// random source is injected, so a fixed seed reproduces the exact sequence
/// of candidate bookings.
#[derive(Debug)]
pub struct BookingSynthesizer {
    window_days: u32,
    sampler: SlotSampler,
}

impl BookingSynthesizer {
    /// Build a synthesizer from the seeder configuration
    pub fn new(config: &SeederConfig) -> SeedResult<Self> {
        Ok(Self { window_days: config.window_days, sampler: SlotSampler::new(config)? })
    }

    /// Generate bookings for every resource over the trailing window.
    ///
    /// Resources whose organization has no members are skipped without
    /// issuing a single submission. A zero-length window is a valid no-op.
    pub fn run<S, R>(
        &self,
        resources: &[Resource],
        rosters: &HashMap<OrgId, Vec<User>>,
        now: DateTime<Utc>,
        store: &mut S,
        rng: &mut R,
    ) -> SeedResult<SynthesisStats>
    where
        S: BookingStore,
        R: Rng + ?Sized,
    {
        let mut stats = SynthesisStats::default();

        for resource in resources {
            let roster = rosters.get(&resource.org).map(Vec::as_slice).unwrap_or(&[]);
            if roster.is_empty() {
                warn!(resource = %resource.id, org = %resource.org, "empty roster, skipping resource");
                stats.resources_skipped += 1;
                continue;
            }
            stats.resources_visited += 1;

            // Oldest day first; the window covers strictly past days
            for back in (1..=i64::from(self.window_days)).rev() {
                let day = (now - Duration::days(back)).date_naive();
                let count = self.sampler.sample_daily_booking_count(rng);

                for slot in 0..count {
                    let period = Period::for_slot(slot);
                    let (hour, minute) = self.sampler.sample_slot_start(period, rng);
                    let duration = self.sampler.sample_duration_minutes(rng);

                    let start = day
                        .and_hms_opt(hour, minute, 0)
                        .ok_or_else(|| {
                            SeedError::store(format!(
                                "sampled slot start out of range: {}:{:02}",
                                hour, minute
                            ))
                        })?
                        .and_utc();
                    let end = start + Duration::minutes(duration);
                    let user = &roster[rng.gen_range(0..roster.len())];

                    stats.bookings_attempted += 1;
                    match store.create_booking(resource.id, user.id, start, end)? {
                        SubmitOutcome::Created(booking) => {
                            stats.bookings_created += 1;
                            debug!(booking = %booking.id, resource = %resource.id, %start, %end, "booking created");
                        }
                        SubmitOutcome::Conflict => {
                            stats.conflicts += 1;
                            debug!(resource = %resource.id, %start, %end, "booking conflicted, skipping slot");
                        }
                    }
                }
            }
        }

        info!(
            visited = stats.resources_visited,
            skipped = stats.resources_skipped,
            attempted = stats.bookings_attempted,
            created = stats.bookings_created,
            conflicts = stats.conflicts,
            "synthesis pass complete"
        );
        Ok(stats)
    }
}
