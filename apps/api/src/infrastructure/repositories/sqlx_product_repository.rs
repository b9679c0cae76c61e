use crate::domain::{
    product::{
        entity::{Product, ProductSuggestion},
        errors::DomainError,
        filter::{Condition, ProductFilter},
        repository::ProductCatalog,
    },
    shared::pagination::PageRequest,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

const PRODUCT_SELECT: &str =
    "SELECT id, name, description, tags, price, created_at FROM products";

const SUGGESTION_SELECT: &str = "SELECT id, name FROM products";

#[derive(FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: String,
    tags: Vec<String>,
    price: f64,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        if r.price < 0.0 {
            warn!("Negative price {} stored for product {}", r.price, r.id);
        }

        Product {
            id: r.id,
            name: r.name,
            description: r.description,
            tags: r.tags,
            price: r.price,
            created_at: r.created_at,
        }
    }
}

#[derive(FromRow)]
struct SuggestionRow {
    id: Uuid,
    name: String,
}

impl From<SuggestionRow> for ProductSuggestion {
    fn from(r: SuggestionRow) -> Self {
        ProductSuggestion {
            id: r.id,
            name: r.name,
        }
    }
}

/// Escapes `LIKE` metacharacters so user input only ever matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Appends the filter's conditions as a `WHERE` clause.
///
/// Nothing is appended for an unconstrained filter.
fn apply_search_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    let mut separator = " WHERE ";

    for condition in filter.conditions() {
        qb.push(separator);
        match condition {
            Condition::Text(text) => {
                let pattern = format!("%{}%", escape_like(text.term()));
                qb.push("(name ILIKE ")
                    .push_bind(pattern.clone())
                    .push(" OR description ILIKE ")
                    .push_bind(pattern)
                    .push(" OR ")
                    .push_bind(text.term().to_string())
                    .push(" = ANY(tags))");
            }
            Condition::MinPrice(min) => {
                qb.push("price >= ").push_bind(*min);
            }
            Condition::MaxPrice(max) => {
                qb.push("price <= ").push_bind(*max);
            }
        }
        separator = " AND ";
    }
}

fn build_search_query(
    filter: &ProductFilter,
    limit: i64,
    offset: i64,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new(PRODUCT_SELECT);
    apply_search_filters(&mut qb, filter);
    qb.push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);
    qb
}

fn build_suggestion_query(prefix: &str, limit: i64) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::<Postgres>::new(SUGGESTION_SELECT);
    qb.push(" WHERE name ILIKE ")
        .push_bind(format!("{}%", escape_like(prefix)))
        .push(" ORDER BY name ASC LIMIT ")
        .push_bind(limit);
    qb
}

pub struct SqlxProductRepository {
    pub pool: PgPool,
}

impl SqlxProductRepository {
    /// Creates a new instance of the repository with the provided database pool.
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxProductRepository with connection pool");
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalog for SqlxProductRepository {
    /// Runs a filtered, newest-first product search.
    ///
    /// # Errors
    /// Returns `DomainError::ValidationError` when the page offset overflows and
    /// `DomainError::InfrastructureError` when the query fails.
    #[instrument(skip(self, filter), fields(
        conditions = filter.conditions().len(),
        page = page.page,
        limit = page.limit,
    ))]
    async fn find_products(
        &self,
        filter: &ProductFilter,
        page: &PageRequest,
    ) -> Result<Vec<Product>, DomainError> {
        let offset = page
            .skip()
            .ok_or_else(|| DomainError::ValidationError("page offset out of range".into()))?;

        let mut qb = build_search_query(filter, i64::from(page.limit), offset);
        debug!("Executing product search: {}", qb.sql());

        let rows: Vec<ProductRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Product search query failed: {}", e);
                DomainError::InfrastructureError(format!("Product search failed: {}", e))
            })?;

        debug!("Product search returned {} rows", rows.len());
        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self), fields(prefix_len = prefix.len()))]
    async fn suggest_by_name_prefix(
        &self,
        prefix: &str,
        limit: u32,
    ) -> Result<Vec<ProductSuggestion>, DomainError> {
        let mut qb = build_suggestion_query(prefix, i64::from(limit));

        let rows: Vec<SuggestionRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("Autocomplete query failed: {}", e);
                DomainError::InfrastructureError(format!("Autocomplete lookup failed: {}", e))
            })?;

        Ok(rows.into_iter().map(ProductSuggestion::from).collect())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::InfrastructureError(format!("Database unreachable: {}", e)))
    }
}
