//! Prize removal for cascading author deletion.
//!
//! A prize is linked to the author it was awarded to and to the organization that awards it.
//! The catalog refuses to delete a prize that still points at an author, and it accepts a
//! different shape of "no author" depending on the prize, so the link is cleared through ordered
//! [`StrategyChain`]s of request bodies before the prize itself is deleted.
//!
//! The variant enums, [`PrizePatch`] and [`PrizeReplacement`], only describe bodies; the order
//! of their `ALL` constants is the order they are sent in.

use dioxus_logger::tracing;
use serde_json::{json, Value};

use crate::server::{
    catalog::{
        model::{PrizeId, PrizeRecord},
        CatalogClient,
    },
    config::CascadeConfig,
    service::strategy::StrategyChain,
};

/// Partial update bodies clearing a prize's author link, in the order they are tried.
///
/// The catalog does not accept the same shape for every prize, so each known representation of
/// "no author" is attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrizePatch {
    /// `{"author": null}`
    AuthorNull,
    /// `{"authorId": null}`
    AuthorIdNull,
    /// `{"author": {"id": null}}`
    AuthorObjectIdNull,
}

impl PrizePatch {
    pub const ALL: [PrizePatch; 3] = [
        PrizePatch::AuthorNull,
        PrizePatch::AuthorIdNull,
        PrizePatch::AuthorObjectIdNull,
    ];

    pub fn body(self) -> Value {
        match self {
            Self::AuthorNull => json!({ "author": null }),
            Self::AuthorIdNull => json!({ "authorId": null }),
            Self::AuthorObjectIdNull => json!({ "author": { "id": null } }),
        }
    }
}

/// Full record bodies replacing a prize without its author link, in the order they are tried
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrizeReplacement {
    /// The fetched record with `author` set to null
    RecordWithoutAuthor,
    /// Only the prize ID and a null `author`
    MinimalWithoutAuthor,
    /// The fetched record with `authorId` set to null
    RecordWithoutAuthorId,
}

impl PrizeReplacement {
    pub const ALL: [PrizeReplacement; 3] = [
        PrizeReplacement::RecordWithoutAuthor,
        PrizeReplacement::MinimalWithoutAuthor,
        PrizeReplacement::RecordWithoutAuthorId,
    ];

    pub fn body(self, prize_id: PrizeId, record: &PrizeRecord) -> Value {
        match self {
            Self::RecordWithoutAuthor => record.with_null_field("author"),
            Self::MinimalWithoutAuthor => json!({ "id": prize_id, "author": null }),
            Self::RecordWithoutAuthorId => record.with_null_field("authorId"),
        }
    }
}

/// Releases prizes from an author before deleting them.
///
/// Prizes are shared with the organization that awarded them, so the author link is removed
/// before the prize record is destroyed. Removal is attempted in three stages:
/// 1. Partial updates clearing the author link ([`PrizePatch`])
/// 2. Full record replacements without the author link ([`PrizeReplacement`]), only fetching the
///    current record once the partial updates have all failed
/// 3. A direct delete regardless of the link, unless disabled by
///    [`CascadeConfig::last_resort_prize_delete`]
///
/// The first stage that updates the prize ends the chain with a delete, whose result is final.
pub struct PrizeReconciler<'a> {
    catalog: &'a CatalogClient,
    config: &'a CascadeConfig,
}

impl<'a> PrizeReconciler<'a> {
    /// Creates a new instance of [`PrizeReconciler`]
    ///
    /// # Arguments
    /// - `catalog` - Client for the catalog holding the prizes
    /// - `config` - Cascade switches, read for the last resort delete
    pub fn new(catalog: &'a CatalogClient, config: &'a CascadeConfig) -> Self {
        Self { catalog, config }
    }

    /// Detaches a prize from its author and deletes it.
    ///
    /// The prize record is only fetched once every partial update has failed, and at most once.
    /// Failures of any stage are logged and never propagated.
    ///
    /// # Arguments
    /// - `prize_id` - Prize to release, taken from the author's snapshot
    ///
    /// # Returns
    /// - `true` - A delete of the prize record eventually succeeded
    /// - `false` - The prize resisted every strategy
    pub async fn release_prize(&self, prize_id: PrizeId) -> bool {
        let prizes = self.catalog.prize();

        let patched = StrategyChain::new(PrizePatch::ALL)
            .execute(
                &format!("partial update of prize ID {}", prize_id),
                |patch| {
                    let body = patch.body();
                    async move { prizes.patch(prize_id, &body).await }
                },
            )
            .await;

        if patched.succeeded() {
            return self.delete_prize(prize_id).await;
        }

        match prizes.get(prize_id).await {
            Ok(record) => {
                let replaced = StrategyChain::new(PrizeReplacement::ALL)
                    .execute(
                        &format!("full replacement of prize ID {}", prize_id),
                        |replacement| {
                            let body = replacement.body(prize_id, &record);
                            async move { prizes.put(prize_id, &body).await }
                        },
                    )
                    .await;

                if replaced.succeeded() {
                    return self.delete_prize(prize_id).await;
                }
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch prize ID {} for full replacement, skipping to last resort: {}",
                    prize_id,
                    e
                );
            }
        }

        if !self.config.last_resort_prize_delete {
            tracing::warn!(
                "Every update strategy failed for prize ID {} and the last resort delete is disabled",
                prize_id
            );
            return false;
        }

        // The catalog may not enforce the author link at all, in which case this succeeds and
        // leaves a dangling reference behind.
        tracing::warn!(
            "Every update strategy failed for prize ID {}, deleting it without detachment",
            prize_id
        );
        self.delete_prize(prize_id).await
    }

    async fn delete_prize(&self, prize_id: PrizeId) -> bool {
        match self.catalog.prize().delete(prize_id).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Failed to delete prize ID {}: {}", prize_id, e);
                false
            }
        }
    }
}
