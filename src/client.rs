//! Small HTTP client used by `msync status`.

use std::fmt;

use anyhow::Context;
use mission_sync_core::models::{NavigationTarget, PartySnapshot, TakenHeroes};
use serde::de::DeserializeOwned;

pub struct StatusClient {
    http: reqwest::Client,
    base_url: String,
}

/// Everything a host wants to see at a glance.
#[derive(Debug, Clone)]
pub struct PartyStatus {
    pub party: PartySnapshot,
    pub taken: Vec<String>,
    pub nav_to: Option<String>,
}

impl StatusClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch(&self) -> anyhow::Result<PartyStatus> {
        let party: PartySnapshot = self.get("/api/mission").await?;
        let heroes: TakenHeroes = self.get("/api/heroes").await?;
        let nav: NavigationTarget = self.get("/api/mission/nav").await?;

        Ok(PartyStatus {
            party,
            taken: heroes.taken,
            nav_to: nav.nav_to,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?
            .error_for_status()
            .with_context(|| format!("{} returned an error", url))?
            .json()
            .await
            .with_context(|| format!("Unexpected response from {}", url))
    }
}

impl fmt::Display for PartyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Players:   {}", self.party.total_players)?;
        writeln!(
            f,
            "Step:      {}",
            self.party.step.as_deref().unwrap_or("(none)")
        )?;
        if let Some(paths) = &self.party.all_paths {
            for path in paths {
                writeln!(f, "  - {}", path)?;
            }
        }
        writeln!(
            f,
            "Heroes:    {}",
            if self.taken.is_empty() {
                "(none)".to_string()
            } else {
                self.taken.join(", ")
            }
        )?;
        write!(
            f,
            "Override:  {}",
            self.nav_to.as_deref().unwrap_or("(none)")
        )
    }
}
