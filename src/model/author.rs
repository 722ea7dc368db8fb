use serde::{Deserialize, Serialize};

/// Result of a cascading author deletion.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletionOutcomeDto {
    pub author_id: i64,
    /// Whether the catalog accepted the author deletion
    pub author_deleted: bool,
    /// Status code of the final author delete request against the catalog
    pub status_code: u16,
    /// Whether dependents had to be removed before the deletion was retried
    pub remediated: bool,
    /// Prizes that resisted every detachment strategy
    pub failed_prize_ids: Vec<i64>,
    /// Books that could not be deleted through either route
    pub failed_book_ids: Vec<i64>,
    /// Human-readable summary suitable for display
    pub message: String,
}

/// Books and prizes currently referencing an author.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDependentsDto {
    pub author_id: i64,
    pub book_ids: Vec<i64>,
    pub prize_ids: Vec<i64>,
}
