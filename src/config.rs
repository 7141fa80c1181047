//! Server configuration from CLI flags, environment and the config dir.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Args;
use directories::ProjectDirs;
use mission_sync_core::{MissionOrder, SyncConfig};

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to bind. Phones on the event network must reach it.
    #[arg(long, env = "MSYNC_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for HTTP API
    #[arg(short, long, env = "MSYNC_PORT", default_value = "3000")]
    pub port: u16,

    #[command(flatten)]
    pub missions: MissionsArgs,

    /// Seconds before a silent device stops counting toward the party
    #[arg(long, env = "MSYNC_POSITION_TTL", default_value = "30")]
    pub position_ttl: u64,

    /// Seconds a forced navigation target stays active
    #[arg(long, env = "MSYNC_OVERRIDE_TTL", default_value = "15")]
    pub override_ttl: u64,

    /// Leave the raw list of device paths out of party snapshots
    #[arg(long, env = "MSYNC_HIDE_PATHS")]
    pub hide_paths: bool,
}

#[derive(Debug, Clone, Default, Args)]
pub struct MissionsArgs {
    /// JSON array of mission step paths, in play order
    #[arg(long = "missions", env = "MSYNC_MISSIONS")]
    pub file: Option<PathBuf>,
}

impl ServeArgs {
    pub fn sync_config(&self) -> anyhow::Result<SyncConfig> {
        Ok(SyncConfig {
            mission_order: self.missions.load()?,
            position_ttl: Duration::from_secs(self.position_ttl),
            override_ttl: Duration::from_secs(self.override_ttl),
            include_paths: !self.hide_paths,
        })
    }
}

impl MissionsArgs {
    /// Explicit file, else `missions.json` in the config dir, else the
    /// built-in order.
    pub fn load(&self) -> anyhow::Result<MissionOrder> {
        load_mission_order(self.file.as_deref(), default_missions_path().as_deref())
    }
}

pub fn default_missions_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mission-sync").map(|dirs| dirs.config_dir().join("missions.json"))
}

pub fn load_mission_order(
    explicit: Option<&Path>,
    fallback: Option<&Path>,
) -> anyhow::Result<MissionOrder> {
    if let Some(path) = explicit {
        tracing::info!("Loading mission order from {}", path.display());
        return MissionOrder::from_json_file(path);
    }

    match fallback {
        Some(path) if path.exists() => {
            tracing::info!("Loading mission order from {}", path.display());
            MissionOrder::from_json_file(path)
        }
        _ => {
            tracing::debug!("Using built-in mission order");
            Ok(MissionOrder::default())
        }
    }
}
