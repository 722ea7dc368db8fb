use dioxus_logger::tracing;
use reqwest::StatusCode;

use crate::server::{
    catalog::{
        model::{AuthorId, BookId, PrizeId},
        CatalogClient,
    },
    config::CascadeConfig,
    error::{catalog::CatalogError, remediation::RemediationStrategy, Error},
    service::orchestrator::{book::BookDetacher, prize::PrizeReconciler},
};

/// Caller-visible result of a cascading author deletion.
///
/// `author_deleted` is decided by the catalog alone. When it is `true` the catalog's constraint
/// check passed, so no book or prize references the author anymore, even if some entries in
/// `failed_prize_ids` suggest otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct DeletionOutcome {
    pub author_id: AuthorId,
    pub author_deleted: bool,
    /// Status of the last author delete request
    pub status_code: StatusCode,
    /// Whether dependents were resolved before a retried delete
    pub remediated: bool,
    /// Prizes that resisted every strategy, in snapshot order
    pub failed_prize_ids: Vec<PrizeId>,
    /// Books that could not be deleted through either route, in snapshot order
    pub failed_book_ids: Vec<BookId>,
}

impl DeletionOutcome {
    fn unremediated(author_id: AuthorId, author_deleted: bool, status_code: StatusCode) -> Self {
        Self {
            author_id,
            author_deleted,
            status_code,
            remediated: false,
            failed_prize_ids: Vec::new(),
            failed_book_ids: Vec::new(),
        }
    }

    /// One sentence summary for display, naming the prizes that resisted removal.
    pub fn summary(&self) -> String {
        let failed_prizes = join_ids(&self.failed_prize_ids);
        let failed_books = join_ids(&self.failed_book_ids);

        if self.author_deleted {
            if !self.failed_prize_ids.is_empty() {
                let noun = if self.failed_prize_ids.len() == 1 {
                    "prize"
                } else {
                    "prizes"
                };
                return format!(
                    "Author {} deleted, but {} {} could not be detached and may still exist",
                    self.author_id, noun, failed_prizes
                );
            }
            if self.remediated {
                return format!(
                    "Author {} deleted after removing its books and prizes",
                    self.author_id
                );
            }
            return format!("Author {} deleted", self.author_id);
        }

        let mut message = format!(
            "Author {} could not be deleted (status {})",
            self.author_id, self.status_code
        );
        if !self.failed_prize_ids.is_empty() {
            message.push_str(&format!("; prizes that resisted removal: {}", failed_prizes));
        }
        if !self.failed_book_ids.is_empty() {
            message.push_str(&format!(
                "; books that could not be deleted: {}",
                failed_books
            ));
        }
        message
    }
}

fn join_ids<T: std::fmt::Display>(ids: &[T]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// States of a single deletion run
enum CascadeState {
    /// Delete the author without touching its dependents
    DirectAttempt,
    /// Fetch the author's dependents and remove them
    Resolve,
    /// Delete the author a second time after resolving dependents
    Retry {
        failed_prize_ids: Vec<PrizeId>,
        failed_book_ids: Vec<BookId>,
    },
    Done(DeletionOutcome),
}

/// Orchestrator deleting an author together with the books and prizes referencing it.
///
/// The catalog rejects an author delete with `412 Precondition Failed` while dependents exist and
/// has no cascading delete. The orchestrator reacts to that signal only: it fetches the author's
/// books and prizes once, removes books through [`BookDetacher`] and then prizes through
/// [`PrizeReconciler`], one at a time in snapshot order, and retries the delete exactly once.
///
/// Failures of individual dependents never abort a run, they are accumulated into the
/// [`DeletionOutcome`]. Only transport failures on the author delete or on the dependents fetch
/// end a run with an `Err`. Nothing is rolled back: every removed dependent stays removed.
///
/// Concurrent runs for the same author are not coordinated; the catalog's own constraint check
/// is the only safeguard.
pub struct CascadeDeletionOrchestrator<'a> {
    catalog: &'a CatalogClient,
    config: &'a CascadeConfig,
}

impl<'a> CascadeDeletionOrchestrator<'a> {
    pub fn new(catalog: &'a CatalogClient, config: &'a CascadeConfig) -> Self {
        Self { catalog, config }
    }

    /// Deletes an author, resolving its dependents if the catalog reports any.
    ///
    /// # Returns
    /// - `Ok(DeletionOutcome)` - The run completed; check `author_deleted` for the verdict
    /// - `Err(Error::CatalogError)` - The catalog could not be reached for the author delete or
    ///   the dependents fetch
    pub async fn delete_author(&self, author_id: AuthorId) -> Result<DeletionOutcome, Error> {
        let mut state = CascadeState::DirectAttempt;

        loop {
            state = match state {
                CascadeState::DirectAttempt => self.direct_attempt(author_id).await?,
                CascadeState::Resolve => self.resolve(author_id).await?,
                CascadeState::Retry {
                    failed_prize_ids,
                    failed_book_ids,
                } => {
                    self.retry(author_id, failed_prize_ids, failed_book_ids)
                        .await?
                }
                CascadeState::Done(outcome) => {
                    if outcome.author_deleted {
                        tracing::info!("{}", outcome.summary());
                    } else {
                        tracing::warn!("{}", outcome.summary());
                    }
                    return Ok(outcome);
                }
            };
        }
    }

    async fn direct_attempt(&self, author_id: AuthorId) -> Result<CascadeState, Error> {
        let err = match self.catalog.author().delete(author_id).await {
            Ok(status) => {
                return Ok(CascadeState::Done(DeletionOutcome::unremediated(
                    author_id, true, status,
                )))
            }
            Err(err) => err,
        };

        match err.to_remediation_strategy() {
            RemediationStrategy::Remediate => {
                tracing::info!(
                    "Author ID {} is still referenced by dependents, resolving them",
                    author_id
                );
                Ok(CascadeState::Resolve)
            }
            RemediationStrategy::Surface => {
                let status = Self::response_status(err)?;
                Ok(CascadeState::Done(DeletionOutcome::unremediated(
                    author_id, false, status,
                )))
            }
        }
    }

    async fn resolve(&self, author_id: AuthorId) -> Result<CascadeState, Error> {
        let aggregate = match self.catalog.author().get(author_id).await {
            Ok(aggregate) => aggregate,
            Err(err) => {
                tracing::warn!(
                    "Failed to fetch dependents of author ID {}, cannot resolve them: {}",
                    author_id,
                    err
                );
                let status = Self::response_status(err)?;
                return Ok(CascadeState::Done(DeletionOutcome::unremediated(
                    author_id, false, status,
                )));
            }
        };

        tracing::debug!(
            "Resolving {} books and {} prizes of author ID {}",
            aggregate.books.len(),
            aggregate.prizes.len(),
            author_id
        );

        let book_detacher = BookDetacher::new(self.catalog);
        let mut failed_book_ids = Vec::new();
        for book in &aggregate.books {
            if !book_detacher.remove_book(author_id, book.id).await {
                failed_book_ids.push(book.id);
            }
        }

        let prize_reconciler = PrizeReconciler::new(self.catalog, self.config);
        let mut failed_prize_ids = Vec::new();
        for prize in &aggregate.prizes {
            if !prize_reconciler.release_prize(prize.id).await {
                failed_prize_ids.push(prize.id);
            }
        }

        Ok(CascadeState::Retry {
            failed_prize_ids,
            failed_book_ids,
        })
    }

    async fn retry(
        &self,
        author_id: AuthorId,
        failed_prize_ids: Vec<PrizeId>,
        failed_book_ids: Vec<BookId>,
    ) -> Result<CascadeState, Error> {
        let (author_deleted, status_code) = match self.catalog.author().delete(author_id).await {
            Ok(status) => (true, status),
            Err(err) => (false, Self::response_status(err)?),
        };

        Ok(CascadeState::Done(DeletionOutcome {
            author_id,
            author_deleted,
            status_code,
            remediated: true,
            failed_prize_ids,
            failed_book_ids,
        }))
    }

    /// Status of a catalog failure, or the failure itself if no response was received
    fn response_status(err: CatalogError) -> Result<StatusCode, Error> {
        match err.status() {
            Some(status) => Ok(status),
            None => {
                tracing::error!("Catalog unreachable during author deletion: {}", err);
                Err(err.into())
            }
        }
    }
}
