//! Client for the remote bookstore catalog service.
//!
//! The catalog owns authors, books and prizes and enforces referential integrity between them.
//! Requests are grouped by resource in the same way the catalog's REST API is:
//!
//! ```ignore
//! let catalog = CatalogClient::new("http://127.0.0.1:8080");
//! let aggregate = catalog.author().get(author_id).await?;
//! catalog.book().delete(aggregate.books[0].id).await?;
//! ```

pub mod author;
pub mod book;
pub mod client;
pub mod model;
pub mod prize;

pub use client::CatalogClient;
