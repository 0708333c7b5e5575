//! Read-only inventory records
//!
//! Floors, resources, and organization members pre-exist a seeding run;
//! the core only ever reads them.

use serde::{Deserialize, Serialize};

use crate::types::{FloorId, OrgId, ResourceId, ResourceKind, UserId};

/// A floor grouping bookable resources within an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Floor identifier
    pub id: FloorId,
    /// Owning organization
    pub org: OrgId,
    /// Display name
    pub name: String,
}

/// A bookable desk or room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource identifier
    pub id: ResourceId,
    /// Desk or room
    pub kind: ResourceKind,
    /// Floor the resource sits on
    pub floor: FloorId,
    /// Owning organization
    pub org: OrgId,
    /// Display name
    pub name: String,
}

/// An organization member, used only as the booked-by actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: UserId,
    /// Organization the user belongs to
    pub org: OrgId,
    /// Contact email
    pub email: String,
}
