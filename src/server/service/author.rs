use crate::server::{
    catalog::{
        model::{AuthorAggregate, AuthorId},
        CatalogClient,
    },
    config::CascadeConfig,
    error::Error,
    service::orchestrator::{CascadeDeletionOrchestrator, DeletionOutcome},
};

pub struct AuthorService<'a> {
    catalog: &'a CatalogClient,
    config: &'a CascadeConfig,
}

impl<'a> AuthorService<'a> {
    /// Creates a new instance of [`AuthorService`]
    pub fn new(catalog: &'a CatalogClient, config: &'a CascadeConfig) -> Self {
        Self { catalog, config }
    }

    /// Deletes an author from the catalog along with the books and prizes referencing it
    pub async fn delete_author(&self, author_id: AuthorId) -> Result<DeletionOutcome, Error> {
        CascadeDeletionOrchestrator::new(self.catalog, self.config)
            .delete_author(author_id)
            .await
    }

    /// Fetches the books and prizes currently referencing an author
    pub async fn get_dependents(&self, author_id: AuthorId) -> Result<AuthorAggregate, Error> {
        Ok(self.catalog.author().get(author_id).await?)
    }
}
