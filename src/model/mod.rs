//! Data transfer objects returned by the Folio HTTP API.

pub mod api;
pub mod author;
