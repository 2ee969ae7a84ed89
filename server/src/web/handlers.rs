use std::convert::Infallible;
use std::sync::Arc;

use warp::reply::Response;

use super::conditional;
use super::State;
use crate::error::FacadeError;
use crate::shape::{
    group_locations_by_version, group_moves_by_version, LocationsPayload, MovesPayload, Profile,
};

pub async fn profile_handler(
    state: Arc<State>,
    name: String,
    if_none_match: Option<String>,
) -> Result<Response, Infallible> {
    tracing::debug!("profile for {}", name);
    Ok(conditional::reply(&state.cache, if_none_match.as_deref(), async {
        let raw = state.pokeapi.pokemon(&name).await?;
        Ok::<_, FacadeError>(Profile::from(raw))
    })
    .await)
}

pub async fn moves_handler(
    state: Arc<State>,
    name: String,
    if_none_match: Option<String>,
) -> Result<Response, Infallible> {
    tracing::debug!("moves for {}", name);
    Ok(conditional::reply(&state.cache, if_none_match.as_deref(), async {
        let raw = state.pokeapi.pokemon(&name).await?;
        Ok::<_, FacadeError>(MovesPayload {
            versions: group_moves_by_version(&raw.moves),
        })
    })
    .await)
}

pub async fn locations_handler(
    state: Arc<State>,
    name: String,
    if_none_match: Option<String>,
) -> Result<Response, Infallible> {
    tracing::debug!("locations for {}", name);
    Ok(conditional::reply(&state.cache, if_none_match.as_deref(), async {
        let raw = state.pokeapi.encounters(&name).await?;
        Ok::<_, FacadeError>(LocationsPayload {
            versions: group_locations_by_version(&raw),
        })
    })
    .await)
}
