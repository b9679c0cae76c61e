use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Catalog entry offered by the storefront.
///
/// Products are owned by catalog management; the search service only reads
/// them.
///
/// # Invariants
/// - `id` is unique across the catalog
/// - `price` is never negative
/// - `tags` behaves as an unordered set, membership is an exact string match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Type-ahead entry returned by the autocomplete lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSuggestion {
    pub id: Uuid,
    pub name: String,
}

impl From<&Product> for ProductSuggestion {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
        }
    }
}
