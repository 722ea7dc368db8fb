//! Folio: cascading author deletion for bookstore catalog services.
//!
//! The remote catalog enforces referential integrity between authors, their books and the
//! prizes they were awarded, but offers no cascading delete. Folio resolves those dependents
//! client-side and retries the author deletion, reporting exactly what could not be removed.

pub mod model;
pub mod server;
