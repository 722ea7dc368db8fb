use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors from the remote catalog service.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The HTTP request could not be completed, or its body could not be decoded.
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The catalog answered with a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the catalog.
        status: StatusCode,
        /// Raw response body for debugging.
        body: String,
    },
}

impl CatalogError {
    /// HTTP status of the failure, if the catalog produced a response at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(err) => err.status(),
        }
    }

    /// Whether the catalog refused the request because dependents still reference the target.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(StatusCode::PRECONDITION_FAILED)
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self.status() {
            Some(status) if status.is_client_error() => {
                tracing::debug!("{}", self);

                (
                    status,
                    Json(ErrorDto {
                        error: format!("Catalog rejected the request with status {}", status),
                    }),
                )
                    .into_response()
            }
            _ => {
                tracing::error!("{}", self);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Catalog service unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
