//! Unique identifier types for the booking-workload seeder
//!
//! This module contains UUID-based identifier types for organizations,
//! users, floors, resources, and bookings used throughout the seeder.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrgId(pub Uuid);

impl OrgId {
    /// Create a new random organization ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrgId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORG_{}", self.0.simple())
    }
}

impl Serialize for OrgId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("ORG_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for OrgId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "ORG_").map(OrgId).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a user (an organization member)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Create a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "USER_{}", self.0.simple())
    }
}

impl Serialize for UserId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("USER_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "USER_").map(UserId).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a floor within an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloorId(pub Uuid);

impl FloorId {
    /// Create a new random floor ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FloorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FLR_{}", self.0.simple())
    }
}

impl Serialize for FloorId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("FLR_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for FloorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "FLR_").map(FloorId).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a bookable resource (desk or room)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub Uuid);

impl ResourceId {
    /// Create a new random resource ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ResourceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RES_{}", self.0.simple())
    }
}

impl Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("RES_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "RES_").map(ResourceId).map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for a booking, assigned by the booking store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(pub Uuid);

impl BookingId {
    /// Create a new random booking ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BKG_{}", self.0.simple())
    }
}

impl Serialize for BookingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("BKG_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for BookingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_prefixed(&s, "BKG_").map(BookingId).map_err(serde::de::Error::custom)
    }
}

/// Parse a prefixed identifier, falling back to a raw UUID when the prefix
/// is absent (unprefixed fixture files remain readable).
fn parse_prefixed(s: &str, prefix: &str) -> Result<Uuid, uuid::Error> {
    match s.strip_prefix(prefix) {
        Some(rest) => Uuid::parse_str(rest),
        None => Uuid::parse_str(s),
    }
}
