use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::opaque_id;

/// Last reported location of one device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPosition {
    pub device_id: String,
    pub path: String,
    pub last_seen: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPositionInput {
    #[serde(default, deserialize_with = "opaque_id")]
    pub device_id: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Where the slowest active device is, and how many devices are active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartySnapshot {
    /// `None` when no active device is on a tracked step
    pub step: Option<String>,
    pub total_players: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_paths: Option<Vec<String>>,
}
