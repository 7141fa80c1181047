use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operator-forced navigation target. Only one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationOverride {
    pub path: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNavigationInput {
    #[serde(default)]
    pub nav_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationTarget {
    pub nav_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNavigationResponse {
    pub success: bool,
    pub nav_to: Option<String>,
}
