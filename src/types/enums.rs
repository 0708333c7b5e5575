//! Enumeration types for the booking-workload seeder

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a bookable resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceKind {
    /// A bookable desk
    Desk,
    /// A bookable meeting room
    Room,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Desk => write!(f, "DESK"),
            ResourceKind::Room => write!(f, "ROOM"),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DESK" => Ok(ResourceKind::Desk),
            "ROOM" => Ok(ResourceKind::Room),
            other => Err(format!("unknown resource kind: {}", other)),
        }
    }
}

/// Half of the working day a slot start is sampled in.
///
/// Slot starts are drawn from a separate normal distribution per period.
/// The two-period mixture reproduces the lunch-hour dip in occupancy that
/// a single distribution would flatten out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    /// Morning period
    Am,
    /// Afternoon period
    Pm,
}

impl Period {
    /// Period for the n-th slot of a day: even slots draw from the AM
    /// distribution, odd slots from PM, so both peaks are attempted
    /// whenever the daily count allows.
    pub fn for_slot(slot_index: u32) -> Self {
        if slot_index % 2 == 0 {
            Period::Am
        } else {
            Period::Pm
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}
