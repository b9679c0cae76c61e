use super::dto::AutocompleteRequest;
use crate::domain::product::{
    entity::ProductSuggestion, errors::DomainError, repository::ProductCatalog,
};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

pub const DEFAULT_SUGGESTION_LIMIT: u32 = 10;

pub struct AutocompleteProductsUseCase {
    catalog: Arc<dyn ProductCatalog>,
    limit: u32,
}

impl AutocompleteProductsUseCase {
    pub fn new(catalog: Arc<dyn ProductCatalog>, limit: u32) -> Self {
        Self {
            catalog,
            limit: limit.max(1),
        }
    }

    #[instrument(skip(self, request), fields(query_len = request.query.len(), limit = self.limit))]
    pub async fn execute(
        &self,
        request: AutocompleteRequest,
    ) -> Result<Vec<ProductSuggestion>, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        self.catalog
            .suggest_by_name_prefix(&request.query, self.limit)
            .await
    }
}
