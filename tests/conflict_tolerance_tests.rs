//! Conflict tolerance of the synthesis loop
//!
//! The booking store is the sole arbiter of double-booking. Conflicts are
//! an expected outcome: the loop swallows them and keeps going. Any other
//! store failure is fatal and aborts the run.

use booking_seed::booking::{Booking, BookingStore, CheckinOutcome, SubmitOutcome};
use booking_seed::inventory::{Resource, User};
use booking_seed::types::{BookingId, FloorId, OrgId, ResourceId, ResourceKind, SeederConfig, UserId};
use booking_seed::workload::BookingSynthesizer;
use booking_seed::{SeedError, SeedResult};
use chrono::{DateTime, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

/// Rejects every submission as a conflict
#[derive(Debug, Default)]
struct AlwaysConflictStore {
    attempts: u64,
}

impl BookingStore for AlwaysConflictStore {
    fn create_booking(
        &mut self,
        _resource: ResourceId,
        _user: UserId,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> SeedResult<SubmitOutcome> {
        self.attempts += 1;
        Ok(SubmitOutcome::Conflict)
    }

    fn list_bookings(&self) -> SeedResult<Vec<Booking>> {
        Ok(Vec::new())
    }

    fn set_checked_in_at(
        &mut self,
        _booking: BookingId,
        _at: DateTime<Utc>,
    ) -> SeedResult<CheckinOutcome> {
        Ok(CheckinOutcome::NotFound)
    }
}

/// Fails every submission with a transport error
#[derive(Debug, Default)]
struct BrokenStore;

impl BookingStore for BrokenStore {
    fn create_booking(
        &mut self,
        _resource: ResourceId,
        _user: UserId,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> SeedResult<SubmitOutcome> {
        Err(SeedError::store("connection reset by peer"))
    }

    fn list_bookings(&self) -> SeedResult<Vec<Booking>> {
        Err(SeedError::store("connection reset by peer"))
    }

    fn set_checked_in_at(
        &mut self,
        _booking: BookingId,
        _at: DateTime<Utc>,
    ) -> SeedResult<CheckinOutcome> {
        Err(SeedError::store("connection reset by peer"))
    }
}

fn inventory() -> (Vec<Resource>, HashMap<OrgId, Vec<User>>) {
    let org = OrgId::new();
    let resources = vec![Resource {
        id: ResourceId::new(),
        kind: ResourceKind::Desk,
        floor: FloorId::new(),
        org,
        name: "Desk 1-01".into(),
    }];
    let mut rosters = HashMap::new();
    rosters.insert(org, vec![User { id: UserId::new(), org, email: "a@example.com".into() }]);
    (resources, rosters)
}

fn config() -> SeederConfig {
    SeederConfig {
        window_days: 5,
        min_daily_bookings: 1,
        max_daily_bookings: 2,
        ..Default::default()
    }
}

#[test]
fn all_conflicts_complete_cleanly_with_zero_created() {
    let (resources, rosters) = inventory();
    let synthesizer = BookingSynthesizer::new(&config()).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();

    let mut store = AlwaysConflictStore::default();
    let mut rng = StdRng::seed_from_u64(1);
    let stats = synthesizer.run(&resources, &rosters, now, &mut store, &mut rng).unwrap();

    assert!(stats.bookings_attempted > 0);
    assert_eq!(stats.bookings_created, 0);
    assert_eq!(stats.conflicts, stats.bookings_attempted);
    assert_eq!(store.attempts, stats.bookings_attempted);
}

#[test]
fn transport_error_aborts_the_run() {
    let (resources, rosters) = inventory();
    let synthesizer = BookingSynthesizer::new(&config()).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();

    let mut store = BrokenStore;
    let mut rng = StdRng::seed_from_u64(2);
    let result = synthesizer.run(&resources, &rosters, now, &mut store, &mut rng);

    assert!(matches!(result, Err(SeedError::Store(_))));
}

#[test]
fn dense_schedule_produces_conflicts_without_errors() {
    // Cramming many long bookings into each day guarantees overlap against
    // the real in-memory store; the loop must still complete
    let config = SeederConfig {
        window_days: 3,
        min_daily_bookings: 8,
        max_daily_bookings: 8,
        min_duration_slots: 8,
        max_duration_slots: 8,
        ..Default::default()
    };
    let (resources, rosters) = inventory();
    let synthesizer = BookingSynthesizer::new(&config).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();

    let mut store = booking_seed::booking::InMemoryBookingStore::new();
    let mut rng = StdRng::seed_from_u64(3);
    let stats = synthesizer.run(&resources, &rosters, now, &mut store, &mut rng).unwrap();

    assert_eq!(stats.bookings_attempted, 24);
    assert!(stats.conflicts > 0, "expected a dense schedule to conflict");
    assert_eq!(stats.bookings_created + stats.conflicts, stats.bookings_attempted);
    assert_eq!(store.len() as u64, stats.bookings_created);
}
