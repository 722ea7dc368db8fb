//! Service layer for business logic and orchestration.
//!
//! This module contains the services controllers call into, the orchestrators resolving an
//! author's dependents against the catalog, and the strategy chain they use to try alternative
//! request shapes.

pub mod author;
pub mod orchestrator;
pub mod strategy;
