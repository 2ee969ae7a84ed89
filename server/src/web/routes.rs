use std::convert::Infallible;
use std::sync::Arc;

use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

use super::handlers;
use super::State;
use crate::error::{error_reply, ErrorKind};

pub fn router(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    profile(Arc::clone(&state))
        .or(moves(Arc::clone(&state)))
        .or(locations(Arc::clone(&state)))
        .recover(handle_rejection)
        .with(warp::trace::request())
        .boxed()
}

fn if_none_match() -> BoxedFilter<(Option<String>,)> {
    warp::header::optional::<String>("if-none-match")
        .or(warp::any().map(|| None))
        .unify()
        .boxed()
}

fn profile(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    let route = warp::path("pokemon")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(if_none_match())
        .and_then(move |name: String, tag: Option<String>| {
            handlers::profile_handler(Arc::clone(&state), name, tag)
        });

    warp::get().and(route).boxed()
}

fn moves(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    let route = warp::path("pokemon")
        .and(warp::path::param::<String>())
        .and(warp::path("moves"))
        .and(warp::path::end())
        .and(if_none_match())
        .and_then(move |name: String, tag: Option<String>| {
            handlers::moves_handler(Arc::clone(&state), name, tag)
        });

    warp::get().and(route).boxed()
}

fn locations(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    let route = warp::path("pokemon")
        .and(warp::path::param::<String>())
        .and(warp::path("locations"))
        .and(warp::path::end())
        .and(if_none_match())
        .and_then(move |name: String, tag: Option<String>| {
            handlers::locations_handler(Arc::clone(&state), name, tag)
        });

    warp::get().and(route).boxed()
}

/// Unmatched paths and methods get the same JSON error body as handler failures.
async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    if err.is_not_found() {
        let kind = ErrorKind::NotFound;
        return Ok(error_reply(kind.status(), kind.message()));
    }

    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"));
    }

    tracing::warn!("unhandled rejection: {:?}", err);
    Ok(error_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    ))
}
