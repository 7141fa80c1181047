//! Single global navigation override with a short lifetime.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, info};

use super::lock;
use crate::clock::Clock;
use crate::models::NavigationOverride;

pub struct NavigationOverrideSlot {
    slot: Mutex<Option<NavigationOverride>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl NavigationOverrideSlot {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
            clock,
        }
    }

    /// Replace the override. `None` or an empty path clears it.
    pub fn set(&self, path: Option<String>) -> Option<String> {
        let path = path.filter(|p| !p.is_empty());
        let mut slot = lock(&self.slot, "navigation override");

        *slot = path.clone().map(|path| NavigationOverride {
            path,
            timestamp: self.clock.now(),
        });

        match &path {
            Some(target) => info!("Navigation override set to {}", target),
            None => info!("Navigation override cleared"),
        }
        path
    }

    /// The override path, unless it has expired.
    pub fn current(&self) -> Option<String> {
        let now = self.clock.now();
        let mut slot = lock(&self.slot, "navigation override");

        let expired = slot.as_ref().is_some_and(|o| {
            (now - o.timestamp).to_std().unwrap_or_default() > self.ttl
        });
        if expired {
            debug!("Navigation override expired");
            *slot = None;
        }

        slot.as_ref().map(|o| o.path.clone())
    }
}
