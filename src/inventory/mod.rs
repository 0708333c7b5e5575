//! Floor, resource, and roster inventory
//!
//! Thin adapter over the platform's relational store: the read model, the
//! [`InventoryStore`] trait the orchestrator loads through, an in-memory
//! implementation, and the optional resource fixture loader.

pub mod fixture;
pub mod memory;
pub mod model;
pub mod store;

pub use fixture::{load_fixture, ResourceFixture};
pub use memory::InMemoryInventory;
pub use model::{Floor, Resource, User};
pub use store::InventoryStore;
