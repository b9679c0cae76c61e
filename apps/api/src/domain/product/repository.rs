use super::entity::{Product, ProductSuggestion};
use super::errors::DomainError;
use super::filter::ProductFilter;
use crate::domain::shared::pagination::PageRequest;
use async_trait::async_trait;

/// Read access to the product catalog store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Products matching `filter`, newest first, windowed by `page`.
    async fn find_products(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<Vec<Product>, DomainError>;

    /// At most `limit` products whose name starts with `prefix` (ignoring case), sorted by name.
    async fn suggest_by_name_prefix(
        &self,
        prefix: &str,
        limit: u32,
    ) -> Result<Vec<ProductSuggestion>, DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;
}
