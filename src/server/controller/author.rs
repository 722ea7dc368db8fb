use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        author::{AuthorDependentsDto, DeletionOutcomeDto},
    },
    server::{
        catalog::model::AuthorId,
        error::{author::AuthorError, Error},
        model::app::AppState,
        service::{author::AuthorService, orchestrator::DeletionOutcome},
    },
};

pub static AUTHOR_TAG: &str = "author";

/// Delete an author along with the books and prizes referencing it
///
/// Attempts the deletion directly and, if the catalog reports remaining dependents, deletes the
/// author's books, detaches and deletes its prizes, then retries once.
///
/// # Responses
/// - 200 (OK): The catalog deleted the author
/// - 400 (Bad Request): The author ID is not a positive integer
/// - 4xx: The catalog refused the deletion with this status, e.g. 412 when dependents remain or
///   404 when the author does not exist; the body names the prizes that resisted removal
/// - 502 (Bad Gateway): The catalog failed or could not be reached
#[utoipa::path(
    delete,
    path = "/api/authors/{author_id}",
    tag = AUTHOR_TAG,
    params(("author_id" = i64, Path, description = "Catalog ID of the author")),
    responses(
        (status = 200, description = "Author deleted", body = DeletionOutcomeDto),
        (status = 400, description = "Invalid author ID", body = ErrorDto),
        (status = 404, description = "Author not found in the catalog", body = DeletionOutcomeDto),
        (status = 412, description = "Dependents still reference the author", body = DeletionOutcomeDto),
        (status = 502, description = "Catalog failed or unreachable", body = DeletionOutcomeDto)
    ),
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let author_id = AuthorId::new(author_id).ok_or(AuthorError::InvalidId(author_id))?;

    let author_service = AuthorService::new(&state.catalog, &state.cascade);
    let outcome = author_service.delete_author(author_id).await?;

    let status = response_status(&outcome);

    Ok((status, Json(DeletionOutcomeDto::from(outcome))).into_response())
}

/// List the books and prizes currently referencing an author
///
/// # Responses
/// - 200 (OK): IDs of the author's books and prizes
/// - 400 (Bad Request): The author ID is not a positive integer
/// - 4xx: The catalog rejected the lookup with this status, e.g. 404 for an unknown author
/// - 502 (Bad Gateway): The catalog failed or could not be reached
#[utoipa::path(
    get,
    path = "/api/authors/{author_id}/dependents",
    tag = AUTHOR_TAG,
    params(("author_id" = i64, Path, description = "Catalog ID of the author")),
    responses(
        (status = 200, description = "Dependents of the author", body = AuthorDependentsDto),
        (status = 400, description = "Invalid author ID", body = ErrorDto),
        (status = 404, description = "Author not found in the catalog", body = ErrorDto),
        (status = 502, description = "Catalog failed or unreachable", body = ErrorDto)
    ),
)]
pub async fn get_author_dependents(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let author_id = AuthorId::new(author_id).ok_or(AuthorError::InvalidId(author_id))?;

    let author_service = AuthorService::new(&state.catalog, &state.cascade);
    let aggregate = author_service.get_dependents(author_id).await?;

    let dependents = AuthorDependentsDto {
        author_id: aggregate.id.get(),
        book_ids: aggregate.books.iter().map(|book| book.id.get()).collect(),
        prize_ids: aggregate.prizes.iter().map(|prize| prize.id.get()).collect(),
    };

    Ok((StatusCode::OK, Json(dependents)).into_response())
}

/// Client errors from the catalog are passed through, anything else is the catalog's fault
fn response_status(outcome: &DeletionOutcome) -> StatusCode {
    if outcome.author_deleted {
        StatusCode::OK
    } else if outcome.status_code.is_client_error() {
        outcome.status_code
    } else {
        StatusCode::BAD_GATEWAY
    }
}

impl From<DeletionOutcome> for DeletionOutcomeDto {
    fn from(outcome: DeletionOutcome) -> Self {
        Self {
            message: outcome.summary(),
            author_id: outcome.author_id.get(),
            author_deleted: outcome.author_deleted,
            status_code: outcome.status_code.as_u16(),
            remediated: outcome.remediated,
            failed_prize_ids: outcome.failed_prize_ids.iter().map(|id| id.get()).collect(),
            failed_book_ids: outcome.failed_book_ids.iter().map(|id| id.get()).collect(),
        }
    }
}
