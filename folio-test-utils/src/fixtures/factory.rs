//! JSON representations of catalog records.
//!
//! Field names and nesting follow what the catalog returns, including relations the cascade
//! never reads, so decoding is exercised against realistic payloads.

use serde_json::{json, Value};

/// Create a mock book owned by an author.
pub fn mock_book(book_id: i64) -> Value {
    json!({
        "id": book_id,
        "name": format!("Book {}", book_id),
        "isbn": format!("978842063{:04}", book_id % 10_000),
        "image": format!("https://example.com/books/{}.jpg", book_id),
        "publishingDate": "1944-01-01",
        "description": "string",
        "editorial": { "id": 1, "name": "Editorial Sur" }
    })
}

/// Create a mock prize as listed on its author, without the author back reference.
pub fn mock_prize_summary(prize_id: i64) -> Value {
    json!({
        "id": prize_id,
        "premiationDate": "1980-04-23",
        "name": format!("Prize {}", prize_id),
        "description": "string",
        "organization": mock_organization()
    })
}

/// Create a full mock prize record as returned by `GET /api/prizes/{id}`.
///
/// # Arguments
/// - `prize_id` - ID of the prize
/// - `author_id` - Author the prize is linked to, `None` for an already detached prize
pub fn mock_prize(prize_id: i64, author_id: Option<i64>) -> Value {
    let mut prize = mock_prize_summary(prize_id);
    prize["author"] = match author_id {
        Some(id) => json!({ "id": id, "name": format!("Author {}", id) }),
        None => Value::Null,
    };
    prize["authorId"] = author_id.map_or(Value::Null, Value::from);
    prize
}

/// Create a mock author with the given books and prizes, in the given order.
pub fn mock_author(author_id: i64, book_ids: &[i64], prize_ids: &[i64]) -> Value {
    json!({
        "id": author_id,
        "birthDate": "1899-08-24",
        "name": format!("Author {}", author_id),
        "description": "string",
        "image": format!("https://example.com/authors/{}.jpg", author_id),
        "books": book_ids.iter().map(|id| mock_book(*id)).collect::<Vec<_>>(),
        "prizes": prize_ids.iter().map(|id| mock_prize_summary(*id)).collect::<Vec<_>>()
    })
}

fn mock_organization() -> Value {
    json!({ "id": 3, "name": "Ministerio de Cultura", "tipo": "PUBLICA" })
}
