//! Records exchanged with the remote catalog.
//!
//! Only the fields the cascade needs are decoded. Prize records are kept as raw JSON objects so
//! a full replacement can send back every field it does not intentionally clear.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A catalog payload carried an identifier the catalog never issues
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Catalog IDs must be positive integers, got {0}")]
pub struct NonPositiveId(pub i64);

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Returns `None` for non-positive identifiers, which the catalog never issues.
            pub fn new(id: i64) -> Option<Self> {
                (id > 0).then_some(Self(id))
            }

            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = NonPositiveId;

            fn try_from(id: i64) -> Result<Self, Self::Error> {
                Self::new(id).ok_or(NonPositiveId(id))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

catalog_id!(
    /// Identifier of an author in the catalog
    AuthorId
);
catalog_id!(
    /// Identifier of a book in the catalog
    BookId
);
catalog_id!(
    /// Identifier of a prize in the catalog
    PrizeId
);

/// Snapshot of an author and the records referencing it.
///
/// Fetched at most once per deletion run. It is stale as soon as any dependent is removed, so
/// it is never re-read mid-run.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthorAggregate {
    pub id: AuthorId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub books: Vec<BookRef>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prizes: Vec<PrizeRef>,
}

/// Book owned exclusively by one author
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct BookRef {
    pub id: BookId,
}

/// Prize shared between an author and the organization that awarded it
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PrizeRef {
    pub id: PrizeId,
}

/// Full prize representation as returned by `GET /api/prizes/{id}`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeRecord(Map<String, Value>);

impl PrizeRecord {
    /// The record as a JSON object with `field` set to `null`
    pub fn with_null_field(&self, field: &str) -> Value {
        let mut fields = self.0.clone();
        fields.insert(field.to_string(), Value::Null);
        Value::Object(fields)
    }
}

/// The catalog omits or nulls empty relations depending on how the author was created
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
