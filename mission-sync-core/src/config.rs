use std::time::Duration;

use crate::mission::MissionOrder;

pub const DEFAULT_POSITION_TTL: Duration = Duration::from_secs(30);
pub const DEFAULT_OVERRIDE_TTL: Duration = Duration::from_secs(15);

/// Settings shared by the coordination services.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Ruler for party progress
    pub mission_order: MissionOrder,
    /// Age after which a device position no longer counts
    pub position_ttl: Duration,
    /// Lifetime of a forced navigation target
    pub override_ttl: Duration,
    /// Whether snapshots carry the raw list of reported paths
    pub include_paths: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            mission_order: MissionOrder::default(),
            position_ttl: DEFAULT_POSITION_TTL,
            override_ttl: DEFAULT_OVERRIDE_TTL,
            include_paths: true,
        }
    }
}
