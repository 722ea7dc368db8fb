use reqwest::StatusCode;

use crate::server::{
    catalog::{
        model::{AuthorId, BookId},
        CatalogClient,
    },
    error::catalog::CatalogError,
};

#[derive(Clone, Copy)]
pub struct BookEndpoints<'a> {
    client: &'a CatalogClient,
}

impl<'a> BookEndpoints<'a> {
    pub(super) fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// `DELETE /api/books/{book_id}`
    pub async fn delete(&self, book_id: BookId) -> Result<StatusCode, CatalogError> {
        CatalogClient::execute(self.client.delete(&format!("/api/books/{}", book_id))).await
    }

    /// `DELETE /api/authors/{author_id}/books/{book_id}`
    pub async fn delete_nested(
        &self,
        author_id: AuthorId,
        book_id: BookId,
    ) -> Result<StatusCode, CatalogError> {
        CatalogClient::execute(
            self.client
                .delete(&format!("/api/authors/{}/books/{}", author_id, book_id)),
        )
        .await
    }
}
