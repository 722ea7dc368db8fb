use crate::server::{
    catalog::CatalogClient,
    config::Config,
    error::{catalog::CatalogError, Error},
};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the catalog client with the configured base URL and request timeout
pub fn build_catalog_client(config: &Config) -> Result<CatalogClient, Error> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.request_timeout)
        .build()
        .map_err(CatalogError::from)?;

    Ok(CatalogClient::with_client(
        client,
        config.catalog_api_url.clone(),
    ))
}
