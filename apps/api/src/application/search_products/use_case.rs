use super::dto::{SearchRequest, SearchResponse};
use crate::domain::product::{
    errors::DomainError, filter::ProductFilter, repository::ProductCatalog,
};
use std::sync::Arc;
use tracing::{debug, instrument};
use validator::Validate;

pub struct SearchProductsUseCase {
    catalog: Arc<dyn ProductCatalog>,
}

impl SearchProductsUseCase {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self { catalog }
    }

    #[instrument(skip(self, request), fields(
        query_len = request.query.len(),
        page = request.page.page,
        limit = request.page.limit,
    ))]
    pub async fn execute(&self, request: SearchRequest) -> Result<SearchResponse, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        if request.page.skip().is_none() {
            return Err(DomainError::ValidationError(
                "page offset out of range".into(),
            ));
        }
        for price in [request.min_price, request.max_price].into_iter().flatten() {
            if !price.is_finite() {
                return Err(DomainError::ValidationError(format!(
                    "price bound {} is not finite",
                    price
                )));
            }
        }

        let filter = ProductFilter::builder()
            .text(&request.query)
            .min_price(request.min_price)
            .max_price(request.max_price)
            .build();

        debug!(
            conditions = filter.conditions().len(),
            "Built product search filter"
        );

        let products = self.catalog.find_products(&filter, &request.page).await?;
        let has_more = request.page.has_more(products.len());

        Ok(SearchResponse { products, has_more })
    }
}
