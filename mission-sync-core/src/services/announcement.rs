use std::sync::Mutex;

use tracing::{debug, info};

use super::lock;
use crate::error::{Result, SyncError};
use crate::mission::MissionOrder;

pub const MISSING_STEP: &str = "Missing step";

/// Step the host has announced to everyone, independent of device reports.
pub struct MissionAnnouncement {
    step: Mutex<String>,
    order: MissionOrder,
}

impl MissionAnnouncement {
    pub fn new(order: MissionOrder) -> Self {
        Self {
            step: Mutex::new(order.first().to_string()),
            order,
        }
    }

    pub fn current(&self) -> String {
        lock(&self.step, "mission announcement").clone()
    }

    pub fn announce(&self, step: &str) -> Result<String> {
        if step.is_empty() {
            return Err(SyncError::invalid(MISSING_STEP));
        }
        if self.order.resolve(step).is_none() {
            debug!("Announced step {} is not part of the mission order", step);
        }

        let mut current = lock(&self.step, "mission announcement");
        *current = step.to_string();
        info!("Mission step announced: {}", step);
        Ok(current.clone())
    }
}
