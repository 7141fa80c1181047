//! Core library for Mission Sync.
//!
//! This crate provides the in-memory coordination services that keep the
//! devices of one party loosely in step, independent of any transport layer.
//!
//! # Usage
//!
//! ```no_run
//! use mission_sync_core::{Services, SyncConfig};
//!
//! let services = Services::new(SyncConfig::default());
//! services.heroes.claim("hero-1", "device-a")?;
//!
//! let snapshot = services.party.report_position("device-a", "/game/kappa-grid-27")?;
//! assert_eq!(snapshot.total_players, 1);
//! # Ok::<(), mission_sync_core::SyncError>(())
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod mission;
pub mod models;
pub mod services;

// Re-export commonly used types at crate root
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use mission::MissionOrder;
pub use services::Services;
