//! PokéAPI v2 client
//!
//! Every call issues exactly one GET and never retries. Non-2xx statuses are
//! mapped through [`FacadeError::from_upstream_status`].

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::models::{RawEncounterRecord, RawPokemon};
use crate::config::Upstream;
use crate::error::FacadeError;

pub struct PokeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(config: &Upstream) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    /// `GET /api/v2/pokemon/{name}`, used for both the profile and the move list.
    pub async fn pokemon(&self, name: &str) -> Result<RawPokemon, FacadeError> {
        self.get(&format!("pokemon/{}", name)).await
    }

    /// `GET /api/v2/pokemon/{name}/encounters`
    pub async fn encounters(&self, name: &str) -> Result<Vec<RawEncounterRecord>, FacadeError> {
        self.get(&format!("pokemon/{}/encounters", name)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FacadeError> {
        let url = format!("{}/api/v2/{}", self.base_url, path);

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::error!("PokéAPI request to {} failed: {}", url, e);
            FacadeError::Transport(e)
        })?;

        let status = response.status();
        if let Some(err) = FacadeError::from_upstream_status(status) {
            tracing::warn!("PokéAPI answered {} for {}", status, url);
            return Err(err);
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Could not decode PokéAPI body from {}: {}", url, e);
            FacadeError::Decode(e)
        })
    }
}
