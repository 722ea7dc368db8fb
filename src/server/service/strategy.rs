//! Ordered fallback execution for remote actions.
//!
//! This module provides the `StrategyChain` for running a list of semantically equivalent
//! candidate actions against a target until one of them succeeds. It is used where the exact
//! shape of a catalog request is not known in advance, e.g. which field name clears a prize's
//! author link. Every attempt is recorded so callers can report a concrete status even when
//! all candidates fail.

use std::future::Future;

use dioxus_logger::tracing;
use reqwest::StatusCode;

use crate::server::error::catalog::CatalogError;

/// Result of a single candidate action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptResult {
    /// Position of the candidate within its chain
    pub strategy_index: usize,
    pub succeeded: bool,
    /// Status returned by the catalog, `None` when the request never got a response
    pub status: Option<StatusCode>,
}

/// Attempt history of one chain execution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainOutcome {
    attempts: Vec<AttemptResult>,
}

impl ChainOutcome {
    /// Whether any candidate succeeded
    pub fn succeeded(&self) -> bool {
        self.result().is_some_and(|attempt| attempt.succeeded)
    }

    /// The first successful attempt, otherwise the last failed one.
    ///
    /// Execution stops at the first success, so both cases are the final attempt. `None` only
    /// for a chain without candidates.
    pub fn result(&self) -> Option<&AttemptResult> {
        self.attempts.last()
    }

    /// Status of [`ChainOutcome::result`]
    pub fn status(&self) -> Option<StatusCode> {
        self.result().and_then(|attempt| attempt.status)
    }

    /// Every attempt in execution order
    pub fn attempts(&self) -> &[AttemptResult] {
        &self.attempts
    }
}

/// Ordered list of candidates tried one after another until the first success.
///
/// Candidates are plain data (a route, a request body shape) and the action turning a candidate
/// into a catalog request is supplied on execution, so the list can be reordered or extended
/// without touching control flow.
///
/// No side effect is undone when a candidate fails; every candidate must be safe to attempt on
/// its own.
///
/// # Example
///
/// ```ignore
/// let chain = StrategyChain::new([BookRoute::Flat, BookRoute::NestedUnderAuthor]);
///
/// let outcome = chain
///     .execute(&format!("deletion of book ID {}", book_id), |route| async move {
///         match route {
///             BookRoute::Flat => catalog.book().delete(book_id).await,
///             BookRoute::NestedUnderAuthor => catalog.book().delete_nested(author_id, book_id).await,
///         }
///     })
///     .await;
///
/// if !outcome.succeeded() {
///     tracing::warn!("Book ID {} resisted deletion: {:?}", book_id, outcome.status());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct StrategyChain<C> {
    candidates: Vec<C>,
}

impl<C> StrategyChain<C>
where
    C: Clone,
{
    pub fn new(candidates: impl IntoIterator<Item = C>) -> Self {
        Self {
            candidates: candidates.into_iter().collect(),
        }
    }

    /// Runs `action` for each candidate in order, stopping at the first success.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "detachment of prize ID 9")
    /// - `action` - Issues the catalog request for one candidate. `Ok` counts as success, any
    ///   `Err` (including transport failures) as a failed attempt.
    ///
    /// # Returns
    /// - `ChainOutcome` - History of every attempt made, ending with the success if there was one
    pub async fn execute<F, Fut>(&self, description: &str, mut action: F) -> ChainOutcome
    where
        F: FnMut(C) -> Fut,
        Fut: Future<Output = Result<StatusCode, CatalogError>>,
    {
        let mut outcome = ChainOutcome::default();

        for (strategy_index, candidate) in self.candidates.iter().cloned().enumerate() {
            let attempt = match action(candidate).await {
                Ok(status) => AttemptResult {
                    strategy_index,
                    succeeded: true,
                    status: Some(status),
                },
                Err(e) => {
                    tracing::debug!(
                        "Strategy {}/{} for {} failed: {}",
                        strategy_index + 1,
                        self.candidates.len(),
                        description,
                        e
                    );

                    AttemptResult {
                        strategy_index,
                        succeeded: false,
                        status: e.status(),
                    }
                }
            };

            outcome.attempts.push(attempt);

            if attempt.succeeded {
                tracing::debug!(
                    "Strategy {}/{} for {} succeeded with status {:?}",
                    strategy_index + 1,
                    self.candidates.len(),
                    description,
                    attempt.status
                );
                break;
            }
        }

        outcome
    }
}
