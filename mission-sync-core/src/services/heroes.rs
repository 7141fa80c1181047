//! Hero claim registry
//!
//! Binds each hero to at most one device and each device to at most one hero.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use tracing::{debug, info, warn};

use super::lock;
use crate::clock::Clock;
use crate::error::{Result, SyncError};
use crate::models::{ClaimOutcome, HeroClaim};

pub const MISSING_HERO_FIELDS: &str = "Missing heroId or deviceId";

#[derive(Debug, Default)]
struct ClaimTable {
    by_hero: BTreeMap<String, HeroClaim>,
    /// device -> hero, always the inverse of `by_hero`
    by_device: HashMap<String, String>,
}

pub struct HeroClaimRegistry {
    table: Mutex<ClaimTable>,
    clock: Arc<dyn Clock>,
}

impl HeroClaimRegistry {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: Mutex::new(ClaimTable::default()),
            clock,
        }
    }

    /// Every claimed hero id, sorted.
    pub fn list_claimed(&self) -> Vec<String> {
        lock(&self.table, "hero registry")
            .by_hero
            .keys()
            .cloned()
            .collect()
    }

    pub fn owner_of(&self, hero_id: &str) -> Option<String> {
        lock(&self.table, "hero registry")
            .by_hero
            .get(hero_id)
            .map(|claim| claim.device_id.clone())
    }

    /// Bind `hero_id` to `device_id`.
    ///
    /// Re-claiming a hero the device already holds is a no-op. Claiming a
    /// free hero releases whatever hero the device held before.
    pub fn claim(&self, hero_id: &str, device_id: &str) -> Result<ClaimOutcome> {
        if hero_id.is_empty() || device_id.is_empty() {
            return Err(SyncError::invalid(MISSING_HERO_FIELDS));
        }

        let mut table = lock(&self.table, "hero registry");

        if let Some(existing) = table.by_hero.get(hero_id) {
            if existing.device_id != device_id {
                warn!(
                    "Device {} tried to claim hero {} held by {}",
                    device_id, hero_id, existing.device_id
                );
                return Err(SyncError::Conflict {
                    hero_id: hero_id.to_string(),
                    owner: existing.device_id.clone(),
                });
            }

            debug!("Device {} re-claimed hero {}", device_id, hero_id);
            return Ok(ClaimOutcome {
                claim: existing.clone(),
                released: None,
            });
        }

        let released = table.by_device.remove(device_id);
        if let Some(previous) = &released {
            table.by_hero.remove(previous);
            info!("Device {} released hero {}", device_id, previous);
        }

        let claim = HeroClaim {
            hero_id: hero_id.to_string(),
            device_id: device_id.to_string(),
            claimed_at: self.clock.now(),
        };
        table.by_hero.insert(hero_id.to_string(), claim.clone());
        table
            .by_device
            .insert(device_id.to_string(), hero_id.to_string());

        info!("Device {} claimed hero {}", device_id, hero_id);
        Ok(ClaimOutcome { claim, released })
    }
}
