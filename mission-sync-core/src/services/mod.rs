//! Shared coordination services.
//!
//! Each service owns exactly one map behind one mutex, and every operation
//! runs as a single critical section over it. Services never lock each other.

mod announcement;
mod heroes;
mod navigation;
mod party;

use std::sync::{Arc, Mutex, MutexGuard};

pub use announcement::{MissionAnnouncement, MISSING_STEP};
pub use heroes::{HeroClaimRegistry, MISSING_HERO_FIELDS};
pub use navigation::NavigationOverrideSlot;
pub use party::{PartyPositionTracker, MISSING_POSITION_FIELDS};

use crate::clock::{Clock, SystemClock};
use crate::config::SyncConfig;

/// Handles to every service, built once at startup and shared with handlers.
#[derive(Clone)]
pub struct Services {
    pub heroes: Arc<HeroClaimRegistry>,
    pub party: Arc<PartyPositionTracker>,
    pub navigation: Arc<NavigationOverrideSlot>,
    pub announcement: Arc<MissionAnnouncement>,
    pub config: Arc<SyncConfig>,
}

impl Services {
    pub fn new(config: SyncConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: SyncConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            heroes: Arc::new(HeroClaimRegistry::new(clock.clone())),
            party: Arc::new(PartyPositionTracker::new(
                config.mission_order.clone(),
                config.position_ttl,
                config.include_paths,
                clock.clone(),
            )),
            navigation: Arc::new(NavigationOverrideSlot::new(config.override_ttl, clock)),
            announcement: Arc::new(MissionAnnouncement::new(config.mission_order.clone())),
            config: Arc::new(config),
        }
    }
}

/// Lock a service map, recovering it if a previous holder panicked.
///
/// Critical sections never leave a map half-written, so the data behind a
/// poisoned lock is still consistent.
pub(crate) fn lock<'a, T>(mutex: &'a Mutex<T>, service: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("{} lock was poisoned, recovering", service);
        poisoned.into_inner()
    })
}
