//! The booking record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{BookingId, ResourceId, UserId};

/// A booking of one resource by one user over `[start, end)`.
///
/// Identity is assigned by the booking store on creation. After creation
/// the seeder mutates exactly one field, `checked_in_at`, and only when it
/// is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Store-assigned booking identifier
    pub id: BookingId,
    /// The booked resource
    pub resource: ResourceId,
    /// The booking actor
    pub user: UserId,
    /// Inclusive start of the booked window
    pub start: DateTime<Utc>,
    /// Exclusive end of the booked window; always after `start`
    pub end: DateTime<Utc>,
    /// When the resource was actually used, if a check-in was recorded.
    /// Always within `[start, end]`.
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Whether this booking's window overlaps `[start, end)`
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && start < self.end
    }
}
