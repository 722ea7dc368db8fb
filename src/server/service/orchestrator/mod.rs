//! Orchestration layer for cascading author deletion.
//!
//! The catalog enforces referential integrity but has no cascading delete, so removing an author
//! means removing everything that references it first. Each orchestrator handles one kind of
//! dependent:
//!
//! - [`book::BookDetacher`] deletes books, which belong to a single author
//! - [`prize::PrizeReconciler`] unlinks prizes, shared with their awarding organization, before
//!   deleting them
//! - [`cascade::CascadeDeletionOrchestrator`] drives both around the author delete and produces
//!   the caller-visible outcome

pub mod book;
pub mod cascade;
pub mod prize;

pub use cascade::{CascadeDeletionOrchestrator, DeletionOutcome};
