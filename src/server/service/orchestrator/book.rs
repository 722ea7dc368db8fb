//! Book removal for cascading author deletion.
//!
//! A book references exactly one author and the catalog exposes two delete routes for it, a flat
//! one and one nested under the author. Which of them a deployment accepts varies, so both are
//! tried in a [`StrategyChain`], flat route first.

use dioxus_logger::tracing;

use crate::server::{
    catalog::{
        model::{AuthorId, BookId},
        CatalogClient,
    },
    service::strategy::{ChainOutcome, StrategyChain},
};

/// Catalog routes a book can be deleted through, in the order they are tried
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookRoute {
    /// `DELETE /api/books/{id}`
    Flat,
    /// `DELETE /api/authors/{author_id}/books/{id}`
    NestedUnderAuthor,
}

impl BookRoute {
    pub const ALL: [BookRoute; 2] = [BookRoute::Flat, BookRoute::NestedUnderAuthor];
}

/// Removes books referencing an author.
///
/// Books belong to exactly one author, so deleting them is always the correct resolution and no
/// detachment step is needed.
pub struct BookDetacher<'a> {
    catalog: &'a CatalogClient,
}

impl<'a> BookDetacher<'a> {
    /// Creates a new instance of [`BookDetacher`]
    pub fn new(catalog: &'a CatalogClient) -> Self {
        Self { catalog }
    }

    /// Deletes a book through its flat route, falling back to the route nested under the author.
    ///
    /// Transport failures count as a failed route; nothing is propagated.
    ///
    /// # Arguments
    /// - `author_id` - Author the book belongs to, used for the nested route
    /// - `book_id` - Book to delete
    ///
    /// # Returns
    /// - `true` - Either route reported success
    /// - `false` - Both routes failed, the author delete retry will most likely fail again
    pub async fn remove_book(&self, author_id: AuthorId, book_id: BookId) -> bool {
        let outcome = self.delete_book(author_id, book_id).await;

        if !outcome.succeeded() {
            tracing::warn!(
                "Book ID {} of author ID {} could not be deleted through any route (last status {:?})",
                book_id,
                author_id,
                outcome.status()
            );
        }

        outcome.succeeded()
    }

    async fn delete_book(&self, author_id: AuthorId, book_id: BookId) -> ChainOutcome {
        let books = self.catalog.book();

        StrategyChain::new(BookRoute::ALL)
            .execute(&format!("deletion of book ID {}", book_id), |route| async move {
                match route {
                    BookRoute::Flat => books.delete(book_id).await,
                    BookRoute::NestedUnderAuthor => books.delete_nested(author_id, book_id).await,
                }
            })
            .await
    }
}
