//! In-memory booking store
//!
//! Enforces the same contract as the platform's write API: half-open
//! `[start, end)` windows, per-resource overlap rejection, store-assigned
//! identity. Backs the test suite and the self-contained binary.

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::booking::record::Booking;
use crate::booking::store::{BookingStore, CheckinOutcome, SubmitOutcome};
use crate::error::{SeedError, SeedResult};
use crate::types::{BookingId, ResourceId, UserId};

/// Booking population held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingStore {
    bookings: Vec<Booking>,
}

impl InMemoryBookingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bookings held
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Whether the store holds no bookings
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

impl BookingStore for InMemoryBookingStore {
    fn create_booking(
        &mut self,
        resource: ResourceId,
        user: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> SeedResult<SubmitOutcome> {
        if start >= end {
            return Err(SeedError::store(format!(
                "rejected booking with empty window: {} >= {}",
                start, end
            )));
        }

        let conflict = self
            .bookings
            .iter()
            .any(|b| b.resource == resource && b.overlaps(start, end));
        if conflict {
            trace!(%resource, %start, %end, "booking rejected as conflict");
            return Ok(SubmitOutcome::Conflict);
        }

        let booking = Booking {
            id: BookingId::new(),
            resource,
            user,
            start,
            end,
            checked_in_at: None,
        };
        self.bookings.push(booking.clone());
        Ok(SubmitOutcome::Created(booking))
    }

    fn list_bookings(&self) -> SeedResult<Vec<Booking>> {
        Ok(self.bookings.clone())
    }

    fn set_checked_in_at(
        &mut self,
        booking: BookingId,
        at: DateTime<Utc>,
    ) -> SeedResult<CheckinOutcome> {
        match self.bookings.iter_mut().find(|b| b.id == booking) {
            Some(b) => {
                b.checked_in_at = Some(at);
                Ok(CheckinOutcome::Applied)
            }
            None => Ok(CheckinOutcome::NotFound),
        }
    }
}
