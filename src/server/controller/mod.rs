//! HTTP controller endpoints for the Folio web API.
//!
//! Controllers validate path parameters, call into the service layer and translate its results
//! into HTTP responses. Endpoints are documented for OpenAPI through utoipa.

pub mod author;
