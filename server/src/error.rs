//! Facade error taxonomy and its HTTP rendering.

use serde::Serialize;
use thiserror::Error;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

/// How a failed request is reported to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    UpstreamUnavailable,
    DecodeFailure,
    /// Failure inside the facade itself, e.g. encoding a response body.
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::UpstreamUnavailable | ErrorKind::DecodeFailure | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "Not Found",
            ErrorKind::InvalidArgument => "Bad Request",
            ErrorKind::UpstreamUnavailable | ErrorKind::DecodeFailure | ErrorKind::Internal => {
                "Internal Server Error"
            }
        }
    }
}

/// Upstream statuses that get their own facade error; anything else
/// outside 2xx is treated as the provider being unavailable.
const UPSTREAM_STATUS_TABLE: &[(StatusCode, ErrorKind)] = &[
    (StatusCode::NOT_FOUND, ErrorKind::NotFound),
    (StatusCode::BAD_REQUEST, ErrorKind::InvalidArgument),
];

#[derive(Debug, Error)]
pub enum FacadeError {
    #[error("upstream answered {status}")]
    Upstream { status: StatusCode, kind: ErrorKind },
    #[error("could not reach upstream: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("could not decode upstream body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not encode response body: {0}")]
    Encode(#[source] serde_json::Error),
}

impl FacadeError {
    /// Maps an upstream status to a facade error, `None` for 2xx.
    pub fn from_upstream_status(status: StatusCode) -> Option<Self> {
        if status.is_success() {
            return None;
        }

        let kind = UPSTREAM_STATUS_TABLE
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind)
            .unwrap_or(ErrorKind::UpstreamUnavailable);

        Some(FacadeError::Upstream { status, kind })
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FacadeError::Upstream { kind, .. } => *kind,
            FacadeError::Transport(_) => ErrorKind::UpstreamUnavailable,
            FacadeError::Decode(_) => ErrorKind::DecodeFailure,
            FacadeError::Encode(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

pub fn error_reply(status: StatusCode, message: &'static str) -> Response {
    warp::reply::with_status(warp::reply::json(&ErrorBody { error: message }), status)
        .into_response()
}

impl Reply for FacadeError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        error_reply(kind.status(), kind.message())
    }
}
