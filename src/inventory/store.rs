//! Read interface over the floor/resource/roster inventory
//!
//! The platform's relational store owns this data; the seeder reads it
//! once at startup through this trait. Result sizes bound the outer
//! loops of the synthesizer.

use crate::error::SeedResult;
use crate::inventory::model::{Floor, Resource, User};
use crate::types::{FloorId, OrgId};

/// Read access to the pre-existing inventory
pub trait InventoryStore {
    /// List floors, optionally restricted to one organization
    fn list_floors(&self, org: Option<OrgId>) -> SeedResult<Vec<Floor>>;

    /// List the bookable resources on a floor
    fn list_resources(&self, floor: FloorId) -> SeedResult<Vec<Resource>>;

    /// List the members of an organization
    fn list_org_members(&self, org: OrgId) -> SeedResult<Vec<User>>;
}
