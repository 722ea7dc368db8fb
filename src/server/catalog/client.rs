use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::server::{
    catalog::{author::AuthorEndpoints, book::BookEndpoints, prize::PrizeEndpoints},
    error::catalog::CatalogError,
};

/// HTTP client for a single catalog instance.
///
/// Cloning is cheap, the underlying [`reqwest::Client`] shares its connection pool.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    client: reqwest::Client,
    api_url: String,
}

impl CatalogClient {
    /// Create a new client for a catalog instance.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://127.0.0.1:8080`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`], e.g. one configured with a
    /// request timeout.
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();

        Self { client, api_url }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Author routes, `/api/authors`
    pub fn author(&self) -> AuthorEndpoints<'_> {
        AuthorEndpoints::new(self)
    }

    /// Book routes, `/api/books` and `/api/authors/{id}/books`
    pub fn book(&self) -> BookEndpoints<'_> {
        BookEndpoints::new(self)
    }

    /// Prize routes, `/api/prizes`
    pub fn prize(&self) -> PrizeEndpoints<'_> {
        PrizeEndpoints::new(self)
    }

    pub(super) fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    pub(super) fn put(&self, path: &str) -> RequestBuilder {
        self.client.put(self.url(path))
    }

    pub(super) fn patch(&self, path: &str) -> RequestBuilder {
        self.client.patch(self.url(path))
    }

    pub(super) fn delete(&self, path: &str) -> RequestBuilder {
        self.client.delete(self.url(path))
    }

    /// Send a command whose response body is irrelevant, returning the success status.
    pub(super) async fn execute(request: RequestBuilder) -> Result<StatusCode, CatalogError> {
        let response = Self::ensure_success(request.send().await?).await?;

        Ok(response.status())
    }

    /// Send a query and decode its JSON body.
    pub(super) async fn fetch<T: DeserializeOwned>(
        request: RequestBuilder,
    ) -> Result<T, CatalogError> {
        let response = Self::ensure_success(request.send().await?).await?;

        Ok(response.json::<T>().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Returns the response unchanged on a 2xx status, or a [`CatalogError::Api`] carrying the
    /// status and body text otherwise.
    async fn ensure_success(response: Response) -> Result<Response, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogError::Api { status, body });
        }
        Ok(response)
    }
}

impl From<(reqwest::Client, String)> for CatalogClient {
    fn from((client, api_url): (reqwest::Client, String)) -> Self {
        Self::with_client(client, api_url)
    }
}
