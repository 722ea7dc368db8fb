//! Tests for PrizeReconciler::release_prize.
//!
//! Verifies the three stages of prize removal: partial updates, full replacements built from the
//! fetched record, and the last resort delete. Each stage must only run once the previous one has
//! failed entirely, and a successful update is always followed by exactly one delete.

use folio::server::{
    catalog::CatalogClient, config::CascadeConfig, service::orchestrator::prize::PrizeReconciler,
};
use folio_test_utils::prelude::*;

use super::*;

fn strict() -> CascadeConfig {
    CascadeConfig {
        last_resort_prize_delete: false,
    }
}

/// Queue every partial update for prize 9 answering with `status`
fn with_failing_patches(builder: TestBuilder, status: usize) -> TestBuilder {
    patch_bodies()
        .into_iter()
        .fold(builder, |builder, body| {
            builder.with_prize_patch_endpoint(9, body, status, 1)
        })
}

/// Queue every full replacement of `record` for prize 9 answering with `status`
fn with_failing_replacements(builder: TestBuilder, record: &Value, status: usize) -> TestBuilder {
    replacement_bodies(9, record)
        .into_iter()
        .fold(builder, |builder, body| {
            builder.with_prize_put_endpoint(9, body, status, 1)
        })
}

/// Tests the first partial update succeeding.
///
/// Expected: true, prize deleted, no further update attempted and the record never fetched
#[tokio::test]
async fn first_partial_update_short_circuits() -> Result<(), TestError> {
    let [author_null, author_id_null, author_object_null] = patch_bodies();

    let test = TestBuilder::new()
        .with_prize_patch_endpoint(9, author_null, 200, 1)
        .with_prize_patch_endpoint(9, author_id_null, 200, 0)
        .with_prize_patch_endpoint(9, author_object_null, 200, 0)
        .with_prize_endpoint(9, factory::mock_prize(9, Some(7)), 0)
        .with_prize_delete_endpoint(9, 204, 1)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let config = CascadeConfig::default();
    let released = PrizeReconciler::new(&catalog, &config)
        .release_prize(prize_id(9))
        .await;

    assert!(released);
    test.assert_mocks();

    Ok(())
}

/// Tests a later partial update variant succeeding.
///
/// Expected: true after two rejected variants
#[tokio::test]
async fn falls_through_partial_update_variants() -> Result<(), TestError> {
    let [author_null, author_id_null, author_object_null] = patch_bodies();

    let test = TestBuilder::new()
        .with_prize_patch_endpoint(9, author_null, 400, 1)
        .with_prize_patch_endpoint(9, author_id_null, 422, 1)
        .with_prize_patch_endpoint(9, author_object_null, 200, 1)
        .with_prize_endpoint(9, factory::mock_prize(9, Some(7)), 0)
        .with_prize_delete_endpoint(9, 204, 1)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let config = CascadeConfig::default();
    let released = PrizeReconciler::new(&catalog, &config)
        .release_prize(prize_id(9))
        .await;

    assert!(released);
    test.assert_mocks();

    Ok(())
}

/// Tests falling back to full replacements once every partial update failed.
///
/// Expected: true, record fetched once, replacement stops at the second variant
#[tokio::test]
async fn falls_back_to_full_replacement() -> Result<(), TestError> {
    let record = factory::mock_prize(9, Some(7));
    let [without_author, minimal, without_author_id] = replacement_bodies(9, &record);

    let test = with_failing_patches(TestBuilder::new(), 400)
        .with_prize_endpoint(9, record.clone(), 1)
        .with_prize_put_endpoint(9, without_author, 400, 1)
        .with_prize_put_endpoint(9, minimal, 200, 1)
        .with_prize_put_endpoint(9, without_author_id, 200, 0)
        .with_prize_delete_endpoint(9, 204, 1)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let config = CascadeConfig::default();
    let released = PrizeReconciler::new(&catalog, &config)
        .release_prize(prize_id(9))
        .await;

    assert!(released);
    test.assert_mocks();

    Ok(())
}

/// Tests the last resort delete after every update strategy failed.
///
/// Expected: true, delete issued exactly once
#[tokio::test]
async fn deletes_as_last_resort() -> Result<(), TestError> {
    let record = factory::mock_prize(9, Some(7));

    let test = with_failing_patches(TestBuilder::new(), 400);
    let test = with_failing_replacements(test, &record, 400)
        .with_prize_endpoint(9, record.clone(), 1)
        .with_prize_delete_endpoint(9, 204, 1)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let config = CascadeConfig::default();
    let released = PrizeReconciler::new(&catalog, &config)
        .release_prize(prize_id(9))
        .await;

    assert!(released);
    test.assert_mocks();

    Ok(())
}

/// Tests the last resort delete being disabled.
///
/// Expected: false without any delete request
#[tokio::test]
async fn skips_last_resort_when_disabled() -> Result<(), TestError> {
    let record = factory::mock_prize(9, Some(7));

    let test = with_failing_patches(TestBuilder::new(), 400);
    let test = with_failing_replacements(test, &record, 400)
        .with_prize_endpoint(9, record.clone(), 1)
        .with_prize_delete_endpoint(9, 204, 0)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let config = strict();
    let released = PrizeReconciler::new(&catalog, &config)
        .release_prize(prize_id(9))
        .await;

    assert!(!released);
    test.assert_mocks();

    Ok(())
}

/// Tests a prize the catalog refuses to delete even as last resort.
///
/// Expected: false, the delete attempted exactly once
#[tokio::test]
async fn reports_prize_resisting_every_strategy() -> Result<(), TestError> {
    let record = factory::mock_prize(9, Some(7));

    let test = with_failing_patches(TestBuilder::new(), 400);
    let test = with_failing_replacements(test, &record, 400)
        .with_prize_endpoint(9, record.clone(), 1)
        .with_prize_delete_endpoint(9, 412, 1)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let config = CascadeConfig::default();
    let released = PrizeReconciler::new(&catalog, &config)
        .release_prize(prize_id(9))
        .await;

    assert!(!released);
    test.assert_mocks();

    Ok(())
}

/// Tests the record fetch failing before full replacement.
///
/// Expected: true through the last resort delete, no replacement attempted
#[tokio::test]
async fn skips_replacement_when_record_fetch_fails() -> Result<(), TestError> {
    let record = factory::mock_prize(9, Some(7));
    let [without_author, minimal, without_author_id] = replacement_bodies(9, &record);

    let test = with_failing_patches(TestBuilder::new(), 400)
        .with_prize_error_endpoint(9, 500, 1)
        .with_prize_put_endpoint(9, without_author, 200, 0)
        .with_prize_put_endpoint(9, minimal, 200, 0)
        .with_prize_put_endpoint(9, without_author_id, 200, 0)
        .with_prize_delete_endpoint(9, 204, 1)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let config = CascadeConfig::default();
    let released = PrizeReconciler::new(&catalog, &config)
        .release_prize(prize_id(9))
        .await;

    assert!(released);
    test.assert_mocks();

    Ok(())
}

/// Tests the delete after a successful detachment failing.
///
/// Expected: false; the delete result is final, no replacement or second delete follows
#[tokio::test]
async fn delete_after_detachment_is_final() -> Result<(), TestError> {
    let [author_null, _, _] = patch_bodies();

    let test = TestBuilder::new()
        .with_prize_patch_endpoint(9, author_null, 200, 1)
        .with_prize_endpoint(9, factory::mock_prize(9, None), 0)
        .with_prize_delete_endpoint(9, 500, 1)
        .build()
        .await?;

    let catalog: CatalogClient = test.to_catalog_client();
    let config = CascadeConfig::default();
    let released = PrizeReconciler::new(&catalog, &config)
        .release_prize(prize_id(9))
        .await;

    assert!(!released);
    test.assert_mocks();

    Ok(())
}
