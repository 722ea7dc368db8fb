//! Tests for BookDetacher::remove_book.
//!
//! Verifies the flat route is tried first, the nested route is only used as a fallback, and
//! failures of both routes are reported without an error.

use folio::server::{catalog::CatalogClient, service::orchestrator::book::BookDetacher};
use folio_test_utils::prelude::*;

use super::*;

/// Expected: true without touching the nested route
#[tokio::test]
async fn deletes_book_through_flat_route() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_book_delete_endpoint(101, 204, 1)
        .with_nested_book_delete_endpoint(7, 101, 204, 0)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let removed = BookDetacher::new(&catalog)
        .remove_book(author_id(7), book_id(101))
        .await;

    assert!(removed);
    test.assert_mocks();

    Ok(())
}

/// Expected: true after the flat route fails and the nested route succeeds
#[tokio::test]
async fn falls_back_to_nested_route() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_book_delete_endpoint(102, 404, 1)
        .with_nested_book_delete_endpoint(7, 102, 200, 1)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let removed = BookDetacher::new(&catalog)
        .remove_book(author_id(7), book_id(102))
        .await;

    assert!(removed);
    test.assert_mocks();

    Ok(())
}

/// Expected: false, each route attempted exactly once
#[tokio::test]
async fn reports_failure_when_both_routes_fail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_book_delete_endpoint(102, 500, 1)
        .with_nested_book_delete_endpoint(7, 102, 404, 1)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let removed = BookDetacher::new(&catalog)
        .remove_book(author_id(7), book_id(102))
        .await;

    assert!(!removed);
    test.assert_mocks();

    Ok(())
}

/// Expected: false when the catalog cannot be reached at all
#[tokio::test]
async fn reports_failure_when_catalog_unreachable() {
    let catalog = CatalogClient::new("http://127.0.0.1:1");

    let removed = BookDetacher::new(&catalog)
        .remove_book(author_id(7), book_id(101))
        .await;

    assert!(!removed);
}
