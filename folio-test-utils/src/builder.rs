//! Builder for mock catalog test environments.
//!
//! Queues the catalog endpoints a test expects and registers them with a fresh mock server on
//! [`TestBuilder::build`], in the order they were queued. Queue order matters when a route is
//! mocked more than once, e.g. an author delete that first fails with `412` and then succeeds.
//!
//! # Example
//!
//! ```ignore
//! let test = TestBuilder::new()
//!     .with_author_delete_endpoint(7, 412, 1)
//!     .with_author_delete_endpoint(7, 204, 1)
//!     .with_author_endpoint(7, factory::mock_author(7, &[101], &[]), 1)
//!     .with_book_delete_endpoint(101, 204, 1)
//!     .build()
//!     .await?;
//! ```

use mockito::{Mock, ServerGuard};
use serde_json::Value;

use crate::{context::TestContext, error::TestError};

enum CatalogEndpoint {
    AuthorDelete {
        author_id: i64,
        status: usize,
    },
    Author {
        author_id: i64,
        author: Value,
    },
    AuthorError {
        author_id: i64,
        status: usize,
    },
    BookDelete {
        book_id: i64,
        status: usize,
    },
    NestedBookDelete {
        author_id: i64,
        book_id: i64,
        status: usize,
    },
    PrizePatch {
        prize_id: i64,
        body: Value,
        status: usize,
    },
    Prize {
        prize_id: i64,
        prize: Value,
    },
    PrizeError {
        prize_id: i64,
        status: usize,
    },
    PrizePut {
        prize_id: i64,
        body: Value,
        status: usize,
    },
    PrizeDelete {
        prize_id: i64,
        status: usize,
    },
    Custom(Box<dyn FnOnce(&mut ServerGuard) -> Mock>),
}

/// Builder for a [`TestContext`] with pre-registered catalog endpoints.
///
/// Every shortcut takes the number of requests the endpoint is expected to receive;
/// [`TestContext::assert_mocks`] verifies the counts. Pass `0` to assert a route is never called.
pub struct TestBuilder {
    endpoints: Vec<(CatalogEndpoint, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            endpoints: Vec::new(),
        }
    }

    fn with(mut self, endpoint: CatalogEndpoint, expected_requests: usize) -> Self {
        self.endpoints.push((endpoint, expected_requests));
        self
    }

    /// Queue `DELETE /api/authors/{author_id}` answering with `status`
    pub fn with_author_delete_endpoint(
        self,
        author_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with(
            CatalogEndpoint::AuthorDelete { author_id, status },
            expected_requests,
        )
    }

    /// Queue `GET /api/authors/{author_id}` returning `author`, see
    /// [`factory::mock_author`](crate::fixtures::factory::mock_author)
    pub fn with_author_endpoint(self, author_id: i64, author: Value, expected_requests: usize) -> Self {
        self.with(CatalogEndpoint::Author { author_id, author }, expected_requests)
    }

    /// Queue `GET /api/authors/{author_id}` failing with `status`
    pub fn with_author_error_endpoint(
        self,
        author_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with(
            CatalogEndpoint::AuthorError { author_id, status },
            expected_requests,
        )
    }

    /// Queue `DELETE /api/books/{book_id}` answering with `status`
    pub fn with_book_delete_endpoint(
        self,
        book_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with(CatalogEndpoint::BookDelete { book_id, status }, expected_requests)
    }

    /// Queue `DELETE /api/authors/{author_id}/books/{book_id}` answering with `status`
    pub fn with_nested_book_delete_endpoint(
        self,
        author_id: i64,
        book_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with(
            CatalogEndpoint::NestedBookDelete {
                author_id,
                book_id,
                status,
            },
            expected_requests,
        )
    }

    /// Queue `PATCH /api/prizes/{prize_id}` matching exactly `body`
    pub fn with_prize_patch_endpoint(
        self,
        prize_id: i64,
        body: Value,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with(
            CatalogEndpoint::PrizePatch {
                prize_id,
                body,
                status,
            },
            expected_requests,
        )
    }

    /// Queue `GET /api/prizes/{prize_id}` returning `prize`, see
    /// [`factory::mock_prize`](crate::fixtures::factory::mock_prize)
    pub fn with_prize_endpoint(self, prize_id: i64, prize: Value, expected_requests: usize) -> Self {
        self.with(CatalogEndpoint::Prize { prize_id, prize }, expected_requests)
    }

    /// Queue `GET /api/prizes/{prize_id}` failing with `status`
    pub fn with_prize_error_endpoint(
        self,
        prize_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with(
            CatalogEndpoint::PrizeError { prize_id, status },
            expected_requests,
        )
    }

    /// Queue `PUT /api/prizes/{prize_id}` matching exactly `body`
    pub fn with_prize_put_endpoint(
        self,
        prize_id: i64,
        body: Value,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with(
            CatalogEndpoint::PrizePut {
                prize_id,
                body,
                status,
            },
            expected_requests,
        )
    }

    /// Queue `DELETE /api/prizes/{prize_id}` answering with `status`
    pub fn with_prize_delete_endpoint(
        self,
        prize_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.with(
            CatalogEndpoint::PrizeDelete { prize_id, status },
            expected_requests,
        )
    }

    /// Queue an arbitrary mock, e.g. a route answering with a malformed body.
    ///
    /// The closure sets its own expectations, so the request count passed alongside it is unused.
    pub fn with_mock_endpoint<F>(self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.with(CatalogEndpoint::Custom(Box::new(setup)), 0)
    }

    /// Start the mock catalog and register every queued endpoint in queue order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Mock server running with all endpoints registered
    /// - `Err(TestError::HttpClient)` - The HTTP client could not be built
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let mut mocks = Vec::with_capacity(self.endpoints.len());

        for (endpoint, expected) in self.endpoints {
            let mock = match endpoint {
                CatalogEndpoint::AuthorDelete { author_id, status } => {
                    setup.catalog().create_author_delete_endpoint(author_id, status, expected)
                }
                CatalogEndpoint::Author { author_id, author } => {
                    setup.catalog().create_author_endpoint(author_id, author, expected)
                }
                CatalogEndpoint::AuthorError { author_id, status } => {
                    setup.catalog().create_author_error_endpoint(author_id, status, expected)
                }
                CatalogEndpoint::BookDelete { book_id, status } => {
                    setup.catalog().create_book_delete_endpoint(book_id, status, expected)
                }
                CatalogEndpoint::NestedBookDelete {
                    author_id,
                    book_id,
                    status,
                } => setup.catalog().create_nested_book_delete_endpoint(author_id, book_id, status, expected),
                CatalogEndpoint::PrizePatch {
                    prize_id,
                    body,
                    status,
                } => setup.catalog().create_prize_patch_endpoint(prize_id, body, status, expected),
                CatalogEndpoint::Prize { prize_id, prize } => {
                    setup.catalog().create_prize_endpoint(prize_id, prize, expected)
                }
                CatalogEndpoint::PrizeError { prize_id, status } => {
                    setup.catalog().create_prize_error_endpoint(prize_id, status, expected)
                }
                CatalogEndpoint::PrizePut {
                    prize_id,
                    body,
                    status,
                } => setup.catalog().create_prize_put_endpoint(prize_id, body, status, expected),
                CatalogEndpoint::PrizeDelete { prize_id, status } => {
                    setup.catalog().create_prize_delete_endpoint(prize_id, status, expected)
                }
                CatalogEndpoint::Custom(builder) => builder(&mut setup.server),
            };
            mocks.push(mock);
        }

        // Stored so the mocks live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
