use reqwest::StatusCode;

use crate::server::{
    catalog::{
        model::{AuthorAggregate, AuthorId},
        CatalogClient,
    },
    error::catalog::CatalogError,
};

#[derive(Clone, Copy)]
pub struct AuthorEndpoints<'a> {
    client: &'a CatalogClient,
}

impl<'a> AuthorEndpoints<'a> {
    pub(super) fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// `DELETE /api/authors/{author_id}`
    ///
    /// Fails with `412 Precondition Failed` while books or prizes still reference the author.
    pub async fn delete(&self, author_id: AuthorId) -> Result<StatusCode, CatalogError> {
        CatalogClient::execute(self.client.delete(&format!("/api/authors/{}", author_id))).await
    }

    /// `GET /api/authors/{author_id}` including the author's books and prizes
    pub async fn get(&self, author_id: AuthorId) -> Result<AuthorAggregate, CatalogError> {
        CatalogClient::fetch(self.client.get(&format!("/api/authors/{}", author_id))).await
    }
}
