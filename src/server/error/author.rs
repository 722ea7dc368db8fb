use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthorError {
    #[error("Author ID must be a positive integer, got {0}")]
    InvalidId(i64),
}

impl IntoResponse for AuthorError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidId(author_id) => {
                tracing::debug!(author_id = %author_id, "{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
