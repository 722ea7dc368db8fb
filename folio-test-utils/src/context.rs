//! Per-test environment around a mock catalog server.

use std::time::Duration;

use mockito::{Mock, Server, ServerGuard};

use crate::{
    constant::{TEST_REQUEST_TIMEOUT_SECS, TEST_USER_AGENT},
    error::TestError,
};

/// A running mock catalog and the HTTP client pointed at it.
///
/// Mocks registered through the [`TestBuilder`](crate::TestBuilder) live as long as the
/// context; call [`TestContext::assert_mocks`] at the end of a test to verify request counts.
pub struct TestContext {
    pub server: ServerGuard,
    pub http_client: reqwest::Client,
    pub mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Mock server started and HTTP client built
    /// - `Err(TestError::HttpClient)` - The HTTP client could not be built
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let http_client = reqwest::Client::builder()
            .user_agent(TEST_USER_AGENT)
            .timeout(Duration::from_secs(TEST_REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            server,
            http_client,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock catalog
    pub fn catalog_url(&self) -> String {
        self.server.url()
    }

    /// Build a catalog client targeting the mock catalog.
    ///
    /// Generic so the harness does not depend on the application crate; any type implementing
    /// `From<(reqwest::Client, String)>` works.
    pub fn to_catalog_client<T>(&self) -> T
    where
        T: From<(reqwest::Client, String)>,
    {
        T::from((self.http_client.clone(), self.catalog_url()))
    }

    /// Build application state targeting the mock catalog, see
    /// [`TestContext::to_catalog_client`].
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(reqwest::Client, String)>,
    {
        self.to_catalog_client::<T>()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
