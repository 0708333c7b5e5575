//! In-memory inventory implementation
//!
//! Backs the test suite and the self-contained binary. The inventory is
//! either generated from the configured sizes or built from a resource
//! fixture; either way it is immutable once constructed.

use tracing::info;

use crate::error::SeedResult;
use crate::inventory::fixture::ResourceFixture;
use crate::inventory::model::{Floor, Resource, User};
use crate::inventory::store::InventoryStore;
use crate::types::{FloorId, OrgId, ResourceId, ResourceKind, SeederConfig, UserId};

/// Inventory held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    floors: Vec<Floor>,
    resources: Vec<Resource>,
    users: Vec<User>,
}

impl InMemoryInventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a floor and return its identifier
    pub fn add_floor(&mut self, org: OrgId, name: impl Into<String>) -> FloorId {
        let id = FloorId::new();
        self.floors.push(Floor { id, org, name: name.into() });
        id
    }

    /// Add a resource to a floor and return its identifier
    pub fn add_resource(
        &mut self,
        org: OrgId,
        floor: FloorId,
        kind: ResourceKind,
        name: impl Into<String>,
    ) -> ResourceId {
        let id = ResourceId::new();
        self.resources.push(Resource { id, kind, floor, org, name: name.into() });
        id
    }

    /// Add an organization member and return their identifier
    pub fn add_member(&mut self, org: OrgId, email: impl Into<String>) -> UserId {
        let id = UserId::new();
        self.users.push(User { id, org, email: email.into() });
        id
    }

    /// Generate a deterministic inventory from the configured sizes.
    ///
    /// Floors are named `Floor 1..n`; each carries the configured number of
    /// desks and rooms. The roster is shared by the whole organization.
    pub fn generate(config: &SeederConfig, org: OrgId) -> Self {
        let mut inventory = Self::new();

        for floor_index in 1..=config.floor_count {
            let floor = inventory.add_floor(org, format!("Floor {}", floor_index));
            for desk_index in 1..=config.desks_per_floor {
                inventory.add_resource(
                    org,
                    floor,
                    ResourceKind::Desk,
                    format!("Desk {}-{:02}", floor_index, desk_index),
                );
            }
            for room_index in 1..=config.rooms_per_floor {
                inventory.add_resource(
                    org,
                    floor,
                    ResourceKind::Room,
                    format!("Room {}-{:02}", floor_index, room_index),
                );
            }
        }

        for member_index in 1..=config.members_per_org {
            inventory.add_member(org, format!("member{:03}@example.com", member_index));
        }

        info!(
            floors = inventory.floors.len(),
            resources = inventory.resources.len(),
            members = inventory.users.len(),
            "generated inventory"
        );
        inventory
    }

    /// Build an inventory from fixture resources, all placed on one floor
    pub fn from_fixture(
        config: &SeederConfig,
        org: OrgId,
        fixtures: &[ResourceFixture],
    ) -> Self {
        let mut inventory = Self::new();
        let floor = inventory.add_floor(org, "Floor 1");

        for fixture in fixtures {
            inventory.add_resource(org, floor, fixture.kind, fixture.name.clone());
        }
        for member_index in 1..=config.members_per_org {
            inventory.add_member(org, format!("member{:03}@example.com", member_index));
        }

        info!(
            resources = inventory.resources.len(),
            members = inventory.users.len(),
            "built inventory from fixture"
        );
        inventory
    }
}

impl InventoryStore for InMemoryInventory {
    fn list_floors(&self, org: Option<OrgId>) -> SeedResult<Vec<Floor>> {
        Ok(self
            .floors
            .iter()
            .filter(|f| org.map_or(true, |o| f.org == o))
            .cloned()
            .collect())
    }

    fn list_resources(&self, floor: FloorId) -> SeedResult<Vec<Resource>> {
        Ok(self.resources.iter().filter(|r| r.floor == floor).cloned().collect())
    }

    fn list_org_members(&self, org: OrgId) -> SeedResult<Vec<User>> {
        Ok(self.users.iter().filter(|u| u.org == org).cloned().collect())
    }
}
