mod book;
mod prize;

use serde_json::{json, Value};

use super::*;

/// Partial update bodies in the order the prize reconciler sends them
fn patch_bodies() -> [Value; 3] {
    [
        json!({ "author": null }),
        json!({ "authorId": null }),
        json!({ "author": { "id": null } }),
    ]
}

/// Full replacement bodies for `record` in the order the prize reconciler sends them
fn replacement_bodies(prize_id: i64, record: &Value) -> [Value; 3] {
    let mut without_author = record.clone();
    without_author["author"] = Value::Null;

    let mut without_author_id = record.clone();
    without_author_id["authorId"] = Value::Null;

    [
        without_author,
        json!({ "id": prize_id, "author": null }),
        without_author_id,
    ]
}
