use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::opaque_id;

/// One hero bound to one device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeroClaim {
    pub hero_id: String,
    pub device_id: String,
    pub claimed_at: DateTime<Utc>,
}

/// Result of a successful claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub claim: HeroClaim,
    /// Hero the device held before this claim, now free again
    pub released: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimHeroInput {
    #[serde(default, deserialize_with = "opaque_id")]
    pub hero_id: Option<String>,
    #[serde(default, deserialize_with = "opaque_id")]
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakenHeroes {
    pub taken: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Claimed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimHeroResponse {
    pub success: bool,
    pub status: ClaimStatus,
}
