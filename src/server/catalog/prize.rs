use reqwest::StatusCode;
use serde_json::Value;

use crate::server::{
    catalog::{
        model::{PrizeId, PrizeRecord},
        CatalogClient,
    },
    error::catalog::CatalogError,
};

#[derive(Clone, Copy)]
pub struct PrizeEndpoints<'a> {
    client: &'a CatalogClient,
}

impl<'a> PrizeEndpoints<'a> {
    pub(super) fn new(client: &'a CatalogClient) -> Self {
        Self { client }
    }

    /// `PATCH /api/prizes/{prize_id}` with a partial JSON body
    pub async fn patch(&self, prize_id: PrizeId, body: &Value) -> Result<StatusCode, CatalogError> {
        CatalogClient::execute(
            self.client
                .patch(&format!("/api/prizes/{}", prize_id))
                .json(body),
        )
        .await
    }

    /// `GET /api/prizes/{prize_id}`
    pub async fn get(&self, prize_id: PrizeId) -> Result<PrizeRecord, CatalogError> {
        CatalogClient::fetch(self.client.get(&format!("/api/prizes/{}", prize_id))).await
    }

    /// `PUT /api/prizes/{prize_id}` replacing the whole record
    pub async fn put(&self, prize_id: PrizeId, body: &Value) -> Result<StatusCode, CatalogError> {
        CatalogClient::execute(
            self.client
                .put(&format!("/api/prizes/{}", prize_id))
                .json(body),
        )
        .await
    }

    /// `DELETE /api/prizes/{prize_id}`
    pub async fn delete(&self, prize_id: PrizeId) -> Result<StatusCode, CatalogError> {
        CatalogClient::execute(self.client.delete(&format!("/api/prizes/{}", prize_id))).await
    }
}
