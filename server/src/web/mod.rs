use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::{Cache, Config};
use crate::pokeapi::PokeApiClient;

pub mod conditional;
pub mod handlers;
pub mod routes;

pub async fn start(config: Arc<Config>) -> Result<()> {
    let state = State::new(&config)?;

    tracing::info!("listening at {}", config.web.host);
    tracing::info!("proxying {}", config.upstream.base_url);
    warp::serve(routes::router(state)).run(config.web.host).await;
    Ok(())
}

/// Shared by every request; holds no per-request data.
pub struct State {
    pub pokeapi: PokeApiClient,
    pub cache: Cache,
}

impl State {
    pub fn new(config: &Config) -> Result<Arc<Self>> {
        let pokeapi =
            PokeApiClient::new(&config.upstream).context("could not create PokéAPI client")?;

        Ok(Arc::new(Self {
            pokeapi,
            cache: config.cache.clone(),
        }))
    }
}
