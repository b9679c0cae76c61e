use crate::domain::{
    product::{
        entity::{Product, ProductSuggestion},
        errors::DomainError,
        filter::ProductFilter,
        repository::ProductCatalog,
    },
    shared::pagination::PageRequest,
};
use async_trait::async_trait;

/// Catalog held in memory, evaluated with the same filter semantics as the Postgres store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductCatalog {
    products: Vec<Product>,
}

impl InMemoryProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn find_products(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<Vec<Product>, DomainError> {
        let skip = page
            .skip()
            .and_then(|s| usize::try_from(s).ok())
            .ok_or_else(|| DomainError::ValidationError("page offset out of range".into()))?;

        let mut matching: Vec<&Product> =
            self.products.iter().filter(|p| filter.matches(p)).collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(matching
            .into_iter()
            .skip(skip)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn suggest_by_name_prefix(
        &self,
        prefix: &str,
        limit: u32,
    ) -> Result<Vec<ProductSuggestion>, DomainError> {
        let prefix = prefix.to_lowercase();
        let mut matching: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.name.to_lowercase().starts_with(&prefix))
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(matching
            .into_iter()
            .take(limit as usize)
            .map(ProductSuggestion::from)
            .collect())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
