use crate::server::{catalog::CatalogClient, config::CascadeConfig};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub cascade: CascadeConfig,
}

/// State backed by an existing HTTP client and catalog URL with the default cascade behaviour
impl From<(reqwest::Client, String)> for AppState {
    fn from(parts: (reqwest::Client, String)) -> Self {
        Self {
            catalog: CatalogClient::from(parts),
            cascade: CascadeConfig::default(),
        }
    }
}
