//! Conditional GET handling.
//!
//! The shaped payload is serialized once; its token goes out as `ETag` and is
//! compared byte for byte with the client's `If-None-Match`. No token is kept
//! on the server.

use std::future::Future;

use serde::Serialize;
use warp::http::header::{CACHE_CONTROL, CONTENT_TYPE, ETAG};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use crate::config::Cache;
use crate::error::FacadeError;
use crate::etag::TaggedBody;

/// Runs `produce` and replies with its payload, or with `304 Not Modified`
/// when the client already holds the same representation.
pub async fn reply<T, F>(policy: &Cache, if_none_match: Option<&str>, produce: F) -> Response
where
    T: Serialize,
    F: Future<Output = Result<T, FacadeError>>,
{
    match produce.await.and_then(|payload| respond(policy, if_none_match, &payload)) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("request failed: {}", e);
            e.into_response()
        }
    }
}

pub fn respond<T: Serialize>(
    policy: &Cache,
    if_none_match: Option<&str>,
    payload: &T,
) -> Result<Response, FacadeError> {
    let TaggedBody { body, etag } = TaggedBody::new(payload).map_err(FacadeError::Encode)?;

    let not_modified = policy.etag_validation
        && matches!(if_none_match, Some(token) if !token.is_empty() && token == etag);

    tracing::debug!(
        "If-None-Match: {:?}, ETag: {}, not modified: {}",
        if_none_match,
        etag,
        not_modified
    );

    let response = if not_modified {
        warp::reply::with_status(warp::reply(), StatusCode::NOT_MODIFIED).into_response()
    } else {
        warp::reply::with_header(body, CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .into_response()
    };

    let response = warp::reply::with_header(response, ETAG, etag);
    Ok(warp::reply::with_header(response, CACHE_CONTROL, policy.header_value()).into_response())
}
