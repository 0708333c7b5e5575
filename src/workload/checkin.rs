//! Check-in simulation
//!
//! Post-processes the booking population: a subset of bookings gets a
//! check-in timestamp perturbed around the booking start but always inside
//! the booking's window. Runs strictly after synthesis so the read-back
//! set reflects the final population.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{debug, info};

use crate::booking::{BookingStore, CheckinOutcome};
use crate::error::SeedResult;
use crate::types::SeederConfig;

/// Aggregate counters for one check-in pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckinStats {
    /// Bookings read back from the store
    pub bookings_seen: u64,
    /// Bookings that already carried a check-in (left untouched)
    pub already_checked_in: u64,
    /// Bookings the Bernoulli trial passed over
    pub not_selected: u64,
    /// Check-ins persisted
    pub checkins_applied: u64,
    /// Check-ins dropped because the booking had vanished
    pub checkins_missing: u64,
}

/// Simulates partial check-in behavior over a booking population
#[derive(Debug, Clone)]
pub struct CheckinSimulator {
    probability: f64,
    jitter_minutes: i64,
}

/// Check-in instant for a booking, given a signed perturbation.
///
/// The result always lies within `[start, end)`: a draw before `start` is
/// clamped to `start`, and a draw at or past `end` falls back to exactly
/// `start`.
pub fn checkin_time(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    perturbation: Duration,
) -> DateTime<Utc> {
    let t = start + perturbation;
    if t < start || t >= end {
        start
    } else {
        t
    }
}

impl CheckinSimulator {
    /// Build a simulator from the seeder configuration
    pub fn new(config: &SeederConfig) -> Self {
        Self {
            probability: config.checkin_probability,
            jitter_minutes: config.checkin_jitter_minutes,
        }
    }

    /// Mark a random subset of the store's bookings as checked in.
    ///
    /// Bookings that already carry a check-in are skipped, making the pass
    /// idempotent under re-run. A booking deleted between read-back and
    /// update is tolerated and counted.
    pub fn run<S, R>(&self, store: &mut S, rng: &mut R) -> SeedResult<CheckinStats>
    where
        S: BookingStore,
        R: Rng + ?Sized,
    {
        let mut stats = CheckinStats::default();
        let bookings = store.list_bookings()?;
        stats.bookings_seen = bookings.len() as u64;

        for booking in bookings {
            if booking.checked_in_at.is_some() {
                stats.already_checked_in += 1;
                continue;
            }
            if !rng.gen_bool(self.probability) {
                stats.not_selected += 1;
                continue;
            }

            let jitter_seconds = self.jitter_minutes * 60;
            let perturbation = Duration::seconds(rng.gen_range(-jitter_seconds..=jitter_seconds));
            let at = checkin_time(booking.start, booking.end, perturbation);

            match store.set_checked_in_at(booking.id, at)? {
                CheckinOutcome::Applied => {
                    stats.checkins_applied += 1;
                    debug!(booking = %booking.id, %at, "check-in applied");
                }
                CheckinOutcome::NotFound => {
                    stats.checkins_missing += 1;
                    debug!(booking = %booking.id, "booking vanished before check-in, skipping");
                }
            }
        }

        info!(
            seen = stats.bookings_seen,
            applied = stats.checkins_applied,
            missing = stats.checkins_missing,
            "check-in pass complete"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{InMemoryBookingStore, SubmitOutcome};
    use crate::types::{ResourceId, UserId};
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_checkin_time_inside_window() {
        // +10 minutes inside a 30-minute booking lands at 10:10
        let t = checkin_time(at(10, 0), at(10, 30), Duration::minutes(10));
        assert_eq!(t, at(10, 10));
    }

    #[test]
    fn test_checkin_time_past_end_falls_back_to_start() {
        // +40 minutes exceeds the window, fall back to the start exactly
        let t = checkin_time(at(10, 0), at(10, 30), Duration::minutes(40));
        assert_eq!(t, at(10, 0));
    }

    #[test]
    fn test_checkin_time_before_start_clamps_to_start() {
        let t = checkin_time(at(10, 0), at(10, 30), Duration::minutes(-5));
        assert_eq!(t, at(10, 0));
    }

    fn store_with_booking() -> (InMemoryBookingStore, crate::booking::Booking) {
        let mut store = InMemoryBookingStore::new();
        let outcome = store
            .create_booking(ResourceId::new(), UserId::new(), at(10, 0), at(10, 30))
            .unwrap();
        let booking = match outcome {
            SubmitOutcome::Created(b) => b,
            SubmitOutcome::Conflict => panic!("unexpected conflict"),
        };
        (store, booking)
    }

    #[test]
    fn test_probability_one_checks_everything_in_within_window() {
        let config = SeederConfig { checkin_probability: 1.0, ..Default::default() };
        let (mut store, _) = store_with_booking();
        let simulator = CheckinSimulator::new(&config);
        let mut rng = StdRng::seed_from_u64(11);

        let stats = simulator.run(&mut store, &mut rng).unwrap();
        assert_eq!(stats.checkins_applied, 1);

        let booking = &store.list_bookings().unwrap()[0];
        let checked_in = booking.checked_in_at.expect("check-in must be set");
        assert!(checked_in >= booking.start);
        assert!(checked_in <= booking.end);
    }

    #[test]
    fn test_probability_zero_checks_nothing_in() {
        let config = SeederConfig { checkin_probability: 0.0, ..Default::default() };
        let (mut store, _) = store_with_booking();
        let simulator = CheckinSimulator::new(&config);
        let mut rng = StdRng::seed_from_u64(12);

        let stats = simulator.run(&mut store, &mut rng).unwrap();
        assert_eq!(stats.checkins_applied, 0);
        assert_eq!(stats.not_selected, 1);
        assert!(store.list_bookings().unwrap()[0].checked_in_at.is_none());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let config = SeederConfig { checkin_probability: 1.0, ..Default::default() };
        let (mut store, _) = store_with_booking();
        let simulator = CheckinSimulator::new(&config);
        let mut rng = StdRng::seed_from_u64(13);

        simulator.run(&mut store, &mut rng).unwrap();
        let first = store.list_bookings().unwrap()[0].checked_in_at;

        let stats = simulator.run(&mut store, &mut rng).unwrap();
        assert_eq!(stats.already_checked_in, 1);
        assert_eq!(stats.checkins_applied, 0);
        assert_eq!(store.list_bookings().unwrap()[0].checked_in_at, first);
    }

    #[test]
    fn test_containment_under_extreme_jitter() {
        // Jitter far wider than any booking window still satisfies the
        // containment invariant thanks to the clamp
        let config = SeederConfig {
            checkin_probability: 1.0,
            checkin_jitter_minutes: 600,
            ..Default::default()
        };
        let (mut store, _) = store_with_booking();
        let simulator = CheckinSimulator::new(&config);
        let mut rng = StdRng::seed_from_u64(14);

        simulator.run(&mut store, &mut rng).unwrap();
        let booking = &store.list_bookings().unwrap()[0];
        let checked_in = booking.checked_in_at.unwrap();
        assert!(checked_in >= booking.start);
        assert!(checked_in <= booking.end);
    }
}
