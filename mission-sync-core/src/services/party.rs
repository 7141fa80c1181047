//! Party position tracking
//!
//! Devices report the step they are on. The party step is the step of the
//! slowest active device, so the group waits for its laggard.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::lock;
use crate::clock::Clock;
use crate::error::{Result, SyncError};
use crate::mission::MissionOrder;
use crate::models::{PartySnapshot, PlayerPosition};

pub const MISSING_POSITION_FIELDS: &str = "Missing data";

pub struct PartyPositionTracker {
    positions: Mutex<BTreeMap<String, PlayerPosition>>,
    order: MissionOrder,
    ttl: Duration,
    include_paths: bool,
    clock: Arc<dyn Clock>,
}

impl PartyPositionTracker {
    pub fn new(
        order: MissionOrder,
        ttl: Duration,
        include_paths: bool,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            positions: Mutex::new(BTreeMap::new()),
            order,
            ttl,
            include_paths,
            clock,
        }
    }

    pub fn mission_order(&self) -> &MissionOrder {
        &self.order
    }

    /// Record where `device_id` is and return the resulting party snapshot.
    pub fn report_position(&self, device_id: &str, path: &str) -> Result<PartySnapshot> {
        if device_id.is_empty() || path.is_empty() {
            return Err(SyncError::invalid(MISSING_POSITION_FIELDS));
        }

        let now = self.clock.now();
        let mut positions = lock(&self.positions, "party tracker");
        positions.insert(
            device_id.to_string(),
            PlayerPosition {
                device_id: device_id.to_string(),
                path: path.to_string(),
                last_seen: now,
            },
        );
        debug!("Device {} reported {}", device_id, path);

        Ok(self.summarize(&mut positions, now))
    }

    /// Current party snapshot. Stale devices are dropped first.
    pub fn snapshot(&self) -> PartySnapshot {
        let now = self.clock.now();
        let mut positions = lock(&self.positions, "party tracker");
        self.summarize(&mut positions, now)
    }

    fn summarize(
        &self,
        positions: &mut BTreeMap<String, PlayerPosition>,
        now: DateTime<Utc>,
    ) -> PartySnapshot {
        positions.retain(|device_id, position| {
            // A report from the future counts as fresh
            let age = (now - position.last_seen).to_std().unwrap_or_default();
            let fresh = age <= self.ttl;
            if !fresh {
                debug!("Dropping stale device {} (last seen {})", device_id, position.last_seen);
            }
            fresh
        });

        let laggard = positions
            .values()
            .filter_map(|position| self.order.resolve(&position.path))
            .min();

        // Nobody on a tracked step reads the same as nobody at all
        let Some(step) = laggard.and_then(|index| self.order.step(index)) else {
            return self.empty_snapshot();
        };

        PartySnapshot {
            step: Some(step.to_string()),
            total_players: positions.len(),
            all_paths: self
                .include_paths
                .then(|| positions.values().map(|p| p.path.clone()).collect()),
        }
    }

    fn empty_snapshot(&self) -> PartySnapshot {
        PartySnapshot {
            step: None,
            total_players: 0,
            all_paths: self.include_paths.then(Vec::new),
        }
    }
}
