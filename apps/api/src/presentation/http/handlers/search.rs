use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use std::{str::FromStr, time::Instant};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    application::{
        autocomplete_products::{dto::AutocompleteRequest, use_case::AutocompleteProductsUseCase},
        search_products::{
            dto::{SearchRequest, SearchResponse},
            use_case::SearchProductsUseCase,
        },
    },
    domain::{
        product::entity::ProductSuggestion,
        shared::pagination::{DEFAULT_PAGE, PageRequest},
    },
    presentation::http::{
        errors::{
            AUTOCOMPLETE_FAILED, AppError, INVALID_QUERY_PARAMETERS, QUERY_TOO_SHORT,
            SEARCH_FAILED,
        },
        state::AppState,
    },
};

/// Raw query string of `GET /search`.
///
/// Values stay strings until [`SearchParams::into_request`] so that malformed
/// numbers surface as our own 400 body rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    pub q: Option<String>,
}

fn invalid_parameters() -> AppError {
    AppError::BadRequest(INVALID_QUERY_PARAMETERS.into())
}

/// Parses an optional parameter; an empty value counts as absent.
fn parse_optional<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(|_| invalid_parameters()),
    }
}

fn parse_price(raw: Option<&str>) -> Result<Option<f64>, AppError> {
    match parse_optional::<f64>(raw)? {
        Some(price) if !price.is_finite() => Err(invalid_parameters()),
        price => Ok(price),
    }
}

impl SearchParams {
    /// Validates the raw parameters and converts them into a search request.
    ///
    /// `limit` defaults to `default_limit` and is clamped to `max_limit`.
    pub fn into_request(self, default_limit: u32, max_limit: u32) -> Result<SearchRequest, AppError> {
        let min_price = parse_price(self.min_price.as_deref())?;
        let max_price = parse_price(self.max_price.as_deref())?;
        let page = parse_optional::<u32>(self.page.as_deref())?.unwrap_or(DEFAULT_PAGE);
        let limit = parse_optional::<u32>(self.limit.as_deref())?.unwrap_or(default_limit);

        let mut request = SearchRequest {
            query: self.q.unwrap_or_default(),
            min_price,
            max_price,
            page: PageRequest::new(page, limit),
        };
        request.validate()?;

        if limit > max_limit {
            warn!("Search limit clamped from {} to {}", limit, max_limit);
            request.page.limit = max_limit;
        }
        if request.page.skip().is_none() {
            return Err(invalid_parameters());
        }

        Ok(request)
    }
}

/// Paginated product search.
///
/// # Query Parameters
/// - `q`: free text matched against name, description and tags (optional)
/// - `minPrice`, `maxPrice`: inclusive price bounds (optional)
/// - `page`: one-based page number (default 1)
/// - `limit`: page size (default 20)
///
/// # Errors
/// `400 Invalid query parameters` for malformed numbers or out-of-range
/// pagination, `500 Search failed` when the catalog cannot be read.
#[instrument(skip(state, params))]
pub async fn search_products(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let start_time = Instant::now();

    let Query(params) = params.map_err(|e| {
        warn!("Rejected search query string: {}", e);
        invalid_parameters()
    })?;
    let request = params.into_request(
        state.config.search_default_limit,
        state.config.search_max_limit,
    )?;

    let response = SearchProductsUseCase::new(state.catalog.clone())
        .execute(request)
        .await
        .map_err(|e| AppError::from_domain(e, INVALID_QUERY_PARAMETERS, SEARCH_FAILED))?;

    info!(
        "Search completed in {:?}, returned {} products (has_more={})",
        start_time.elapsed(),
        response.products.len(),
        response.has_more
    );

    Ok(Json(response))
}

/// Name-prefix suggestions for type-ahead.
///
/// # Errors
/// `400 Query too short` when `q` is missing or blank, `500 Autocomplete
/// failed` when the catalog cannot be read.
#[instrument(skip(state, params))]
pub async fn autocomplete_products(
    State(state): State<AppState>,
    params: Result<Query<AutocompleteParams>, QueryRejection>,
) -> Result<Json<Vec<ProductSuggestion>>, AppError> {
    let request = params
        .ok()
        .and_then(|Query(p)| p.q)
        .map(|q| AutocompleteRequest::new(&q))
        .filter(|r| r.validate().is_ok())
        .ok_or_else(|| AppError::BadRequest(QUERY_TOO_SHORT.into()))?;

    let suggestions =
        AutocompleteProductsUseCase::new(state.catalog.clone(), state.config.autocomplete_limit)
            .execute(request)
            .await
            .map_err(|e| AppError::from_domain(e, QUERY_TOO_SHORT, AUTOCOMPLETE_FAILED))?;

    Ok(Json(suggestions))
}
