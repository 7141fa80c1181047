use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentStep {
    pub step: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnounceStepInput {
    #[serde(default)]
    pub step: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnounceStepResponse {
    pub success: bool,
    pub step: String,
}
