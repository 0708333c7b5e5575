//! Write interface over the platform's booking store
//!
//! The store is the sole arbiter of the no-double-booking rule; the seeder
//! never assumes a submission succeeds. Expected outcomes (a conflicting
//! submission, a check-in against a deleted booking) are explicit enum
//! variants so the caller makes the tolerate/abort decision explicitly;
//! anything returned as `Err` is fatal.

use chrono::{DateTime, Utc};

use crate::booking::record::Booking;
use crate::error::SeedResult;
use crate::types::{BookingId, ResourceId, UserId};

/// Outcome of a booking submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The store accepted the booking and assigned its identity
    Created(Booking),
    /// The window overlaps an existing booking on the same resource
    Conflict,
}

/// Outcome of a check-in update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckinOutcome {
    /// The check-in timestamp was persisted
    Applied,
    /// The booking no longer exists
    NotFound,
}

/// Write access to the booking population
pub trait BookingStore {
    /// Submit a booking of `resource` by `user` over `[start, end)`
    fn create_booking(
        &mut self,
        resource: ResourceId,
        user: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> SeedResult<SubmitOutcome>;

    /// Read back the full booking population
    fn list_bookings(&self) -> SeedResult<Vec<Booking>>;

    /// Record when a booked resource was actually used
    fn set_checked_in_at(
        &mut self,
        booking: BookingId,
        at: DateTime<Utc>,
    ) -> SeedResult<CheckinOutcome>;
}
