//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status mapping and response
//! bodies on top of the services.

mod author;

use axum::{body::to_bytes, response::Response};
use folio_test_utils::prelude::*;
use serde::de::DeserializeOwned;

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
