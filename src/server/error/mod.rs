//! Error types for the Folio server application.
//!
//! This module provides the error hierarchy for the service, with specialized error types for
//! configuration, the remote catalog, and author requests. All errors implement `IntoResponse`
//! for Axum HTTP responses and use `thiserror` for their `Display` and `Error` implementations.

pub mod author;
pub mod catalog;
pub mod config;
pub mod remediation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{author::AuthorError, catalog::CatalogError, config::ConfigError},
};

/// Main error type for the Folio server application.
///
/// Aggregates the domain-specific error types into a single type so that `?` works across
/// layers. Dependency-level failures during a cascading deletion never become an `Error`; they
/// are accumulated into the deletion outcome instead. Only failures that end a run early (a
/// transport failure on the author delete or the aggregate fetch) surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Remote catalog error (transport failure or non-success response).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Invalid author request.
    #[error(transparent)]
    AuthorError(#[from] AuthorError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For malformed author IDs
/// - 4xx - Catalog client errors are passed through with their original status
/// - 502 Bad Gateway - The catalog could not be reached or failed on its side
/// - 500 Internal Server Error - For configuration errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::AuthorError(err) => err.into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
