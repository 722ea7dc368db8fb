//! Catalog HTTP mock endpoint creation utilities.
//!
//! Each method registers one mock route with the test context's mockito server. Mocks for the
//! same route are served in creation order: a mock answers until it has received its expected
//! number of requests, then the next one takes over. Requests matching no mock get a `501`.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::context::TestContext;

pub struct CatalogFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl TestContext {
    /// Mock endpoint helpers for the catalog routes
    pub fn catalog(&mut self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

impl<'a> CatalogFixtures<'a> {
    /// Create a mock `DELETE /api/authors/{author_id}` answering with `status`.
    ///
    /// # Arguments
    /// - `author_id` - The author ID for the endpoint path
    /// - `status` - Status to respond with, e.g. `412` while dependents exist
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_author_delete_endpoint(
        &mut self,
        author_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_status_endpoint(
            "DELETE",
            &format!("/api/authors/{}", author_id),
            status,
            expected_requests,
        )
    }

    /// Create a mock `GET /api/authors/{author_id}` returning `author` as JSON.
    pub fn create_author_endpoint(
        &mut self,
        author_id: i64,
        author: Value,
        expected_requests: usize,
    ) -> Mock {
        self.create_json_endpoint(
            &format!("/api/authors/{}", author_id),
            &author,
            expected_requests,
        )
    }

    /// Create a mock `GET /api/authors/{author_id}` failing with `status`.
    pub fn create_author_error_endpoint(
        &mut self,
        author_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_status_endpoint(
            "GET",
            &format!("/api/authors/{}", author_id),
            status,
            expected_requests,
        )
    }

    /// Create a mock `DELETE /api/books/{book_id}` answering with `status`.
    pub fn create_book_delete_endpoint(
        &mut self,
        book_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_status_endpoint(
            "DELETE",
            &format!("/api/books/{}", book_id),
            status,
            expected_requests,
        )
    }

    /// Create a mock `DELETE /api/authors/{author_id}/books/{book_id}` answering with `status`.
    pub fn create_nested_book_delete_endpoint(
        &mut self,
        author_id: i64,
        book_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_status_endpoint(
            "DELETE",
            &format!("/api/authors/{}/books/{}", author_id, book_id),
            status,
            expected_requests,
        )
    }

    /// Create a mock `PATCH /api/prizes/{prize_id}` only matching the exact JSON `body`.
    pub fn create_prize_patch_endpoint(
        &mut self,
        prize_id: i64,
        body: Value,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("PATCH", format!("/api/prizes/{}", prize_id).as_str())
            .match_body(Matcher::Json(body))
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `GET /api/prizes/{prize_id}` returning `prize` as JSON.
    pub fn create_prize_endpoint(
        &mut self,
        prize_id: i64,
        prize: Value,
        expected_requests: usize,
    ) -> Mock {
        self.create_json_endpoint(
            &format!("/api/prizes/{}", prize_id),
            &prize,
            expected_requests,
        )
    }

    /// Create a mock `GET /api/prizes/{prize_id}` failing with `status`.
    pub fn create_prize_error_endpoint(
        &mut self,
        prize_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_status_endpoint(
            "GET",
            &format!("/api/prizes/{}", prize_id),
            status,
            expected_requests,
        )
    }

    /// Create a mock `PUT /api/prizes/{prize_id}` only matching the exact JSON `body`.
    pub fn create_prize_put_endpoint(
        &mut self,
        prize_id: i64,
        body: Value,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("PUT", format!("/api/prizes/{}", prize_id).as_str())
            .match_body(Matcher::Json(body))
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `DELETE /api/prizes/{prize_id}` answering with `status`.
    pub fn create_prize_delete_endpoint(
        &mut self,
        prize_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_status_endpoint(
            "DELETE",
            &format!("/api/prizes/{}", prize_id),
            status,
            expected_requests,
        )
    }

    fn create_status_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }

    fn create_json_endpoint(&mut self, path: &str, body: &Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
