//! Seed-run orchestration
//!
//! Wires the phases together: read the inventory once, synthesize the
//! booking history, then run the check-in pass strictly afterwards.
//! Everything is sequential; there is exactly one logical writer and the
//! injected random source is advanced linearly.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashMap;
use std::time::Instant;
use tracing::info;

use crate::booking::BookingStore;
use crate::error::{SeedError, SeedResult};
use crate::inventory::{InventoryStore, Resource, User};
use crate::types::{OrgId, SeederConfig};
use crate::workload::checkin::CheckinSimulator;
use crate::workload::statistics::SeedStatistics;
use crate::workload::synthesizer::BookingSynthesizer;

/// One complete seeding run over a pair of stores
#[derive(Debug)]
pub struct SeedRun<'a> {
    config: &'a SeederConfig,
}

impl<'a> SeedRun<'a> {
    /// Create a run over the given configuration
    pub fn new(config: &'a SeederConfig) -> Self {
        Self { config }
    }

    /// Execute the run: load, synthesize, check in, report.
    ///
    /// A fatal error from either store aborts immediately; the tool is
    /// idempotent enough to simply be re-run.
    pub fn execute<I, B, R>(
        &self,
        inventory: &I,
        store: &mut B,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> SeedResult<SeedStatistics>
    where
        I: InventoryStore,
        B: BookingStore,
        R: Rng + ?Sized,
    {
        let started = Instant::now();

        let (resources, rosters) = self.load_inventory(inventory)?;
        info!(
            resources = resources.len(),
            orgs = rosters.len(),
            window_days = self.config.window_days,
            "inventory loaded, starting synthesis"
        );

        let synthesizer = BookingSynthesizer::new(self.config)?;
        let synthesis = synthesizer.run(&resources, &rosters, now, store, rng)?;

        // The booking population is final; now decide who showed up
        let simulator = CheckinSimulator::new(self.config);
        let checkin = simulator.run(store, rng)?;

        let mut statistics = SeedStatistics::new(synthesis, checkin);
        statistics.set_run_duration(started.elapsed());
        Ok(statistics)
    }

    /// Read floors, resources, and the per-organization rosters once.
    ///
    /// A failure from the inventory collaborator is fatal; it is wrapped
    /// with which read was in flight when it happened.
    fn load_inventory<I: InventoryStore>(
        &self,
        inventory: &I,
    ) -> SeedResult<(Vec<Resource>, HashMap<OrgId, Vec<User>>)> {
        let floors = inventory
            .list_floors(None)
            .map_err(|e| SeedError::inventory(format!("listing floors: {}", e)))?;

        let mut resources = Vec::new();
        for floor in &floors {
            let on_floor = inventory.list_resources(floor.id).map_err(|e| {
                SeedError::inventory(format!("listing resources on {}: {}", floor.id, e))
            })?;
            resources.extend(on_floor);
        }

        let mut rosters: HashMap<OrgId, Vec<User>> = HashMap::new();
        for resource in &resources {
            if !rosters.contains_key(&resource.org) {
                let members = inventory.list_org_members(resource.org).map_err(|e| {
                    SeedError::inventory(format!("listing members of {}: {}", resource.org, e))
                })?;
                rosters.insert(resource.org, members);
            }
        }

        Ok((resources, rosters))
    }
}
