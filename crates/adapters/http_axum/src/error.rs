//! HTTP error response mapping.

use std::fmt;

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use podium_domain::error::PodiumError;

/// JSON error body returned by every failing request.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Operations that need an identifier in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdRequiredFor {
    Update,
    Deletion,
}

impl fmt::Display for IdRequiredFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Update => f.write_str("updates"),
            Self::Deletion => f.write_str("deletion"),
        }
    }
}

/// Every way a request can fail, mapped to a status code in [`IntoResponse`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized. Invalid or missing API Key.")]
    Unauthorized,

    #[error("Not Found. Please use the /api/presenters endpoint.")]
    RouteNotFound,

    #[error("Presenter ID is required for {0}.")]
    MissingId(IdRequiredFor),

    #[error("Method {0} not allowed.")]
    MethodNotAllowed(Method),

    /// The request body was not the expected JSON document.
    #[error("An unexpected error occurred: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// The request body could not be read, e.g. it exceeded the body limit.
    #[error("An unexpected error occurred: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error(transparent)]
    Domain(#[from] PodiumError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MissingId(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::MalformedBody(_) | Self::UnreadableBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Domain(err) => match err {
                PodiumError::Validation(_) => StatusCode::BAD_REQUEST,
                PodiumError::NotFound(_) => StatusCode::NOT_FOUND,
                PodiumError::NotPersisted | PodiumError::Storage(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Domain(PodiumError::Storage(err)) => {
                format!("An unexpected error occurred: {err}")
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(error = %message, "request failed");
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
