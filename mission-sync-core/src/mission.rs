//! The ordered list of mission steps every device path is measured against.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;

use crate::error::{Result, SyncError};

/// Routes of the event, welcome page first.
pub const DEFAULT_MISSION_ORDER: &[&str] = &[
    "/game/kappa-grid-27",
    "/game/x7-alpha-92",
    "/game/delta-vortex-11",
    "/game/sigma-nexus-4",
    "/game/omega-rift-55",
    "/game/gamma-prime-8",
    "/game/zeta-flux-33",
    "/game/theta-pulse-19",
    "/game/iota-stream-6",
    "/game/rho-system-88",
];

/// Immutable, totally ordered sequence of unique step identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionOrder {
    steps: Vec<String>,
    index: HashMap<String, usize>,
}

impl MissionOrder {
    pub fn new<I, S>(steps: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps: Vec<String> = steps.into_iter().map(Into::into).collect();
        if steps.is_empty() {
            return Err(SyncError::invalid("Mission order has no steps"));
        }

        let mut index = HashMap::with_capacity(steps.len());
        for (i, step) in steps.iter().enumerate() {
            if step.is_empty() {
                return Err(SyncError::invalid(format!("Mission step {} is empty", i)));
            }
            if index.insert(step.clone(), i).is_some() {
                return Err(SyncError::invalid(format!(
                    "Mission step {} appears more than once",
                    step
                )));
            }
        }

        Ok(Self { steps, index })
    }

    /// Load a JSON array of step identifiers.
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mission order from {}", path.display()))?;
        let steps: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a JSON array of strings", path.display()))?;
        Ok(Self::new(steps)?)
    }

    /// Position of `path` in the order.
    ///
    /// Tries an exact match first, then the same path with a single trailing
    /// `/` removed. Anything else is untracked.
    pub fn resolve(&self, path: &str) -> Option<usize> {
        self.index.get(path).copied().or_else(|| {
            path.strip_suffix('/')
                .and_then(|trimmed| self.index.get(trimmed).copied())
        })
    }

    pub fn step(&self, index: usize) -> Option<&str> {
        self.steps.get(index).map(String::as_str)
    }

    pub fn first(&self) -> &str {
        // `new` guarantees at least one step
        &self.steps[0]
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(String::as_str)
    }
}

impl Default for MissionOrder {
    fn default() -> Self {
        Self {
            steps: DEFAULT_MISSION_ORDER.iter().map(|s| s.to_string()).collect(),
            index: DEFAULT_MISSION_ORDER
                .iter()
                .enumerate()
                .map(|(i, s)| (s.to_string(), i))
                .collect(),
        }
    }
}
