//! Composable product filter.
//!
//! Search parameters are optional, so the filter is assembled from optional
//! fragments: every parameter that is present contributes one [`Condition`],
//! absent parameters contribute nothing, and the surviving conditions are
//! combined with logical AND. A filter with no conditions is unconstrained
//! and matches the whole catalog.
//!
//! The same [`ProductFilter`] value is rendered to SQL by the Postgres
//! catalog and evaluated directly by [`ProductFilter::matches`] in the
//! in-memory catalog, so both stores return the same products.

use super::entity::Product;

/// Free-text match against a product.
///
/// Satisfied when any of the following holds:
/// - the name contains the term, ignoring case
/// - the description contains the term, ignoring case
/// - one tag equals the term exactly
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatch {
    term: String,
}

impl TextMatch {
    /// Returns `None` when the term is blank.
    pub fn new(term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        Some(Self {
            term: term.to_string(),
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.term.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
            || product.has_tag(&self.term)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Text(TextMatch),
    MinPrice(f64),
    MaxPrice(f64),
}

impl Condition {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Condition::Text(text) => text.matches(product),
            Condition::MinPrice(min) => product.price >= *min,
            Condition::MaxPrice(max) => product.price <= *max,
        }
    }
}

/// Conjunction of the conditions that were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    conditions: Vec<Condition>,
}

impl ProductFilter {
    pub fn builder() -> ProductFilterBuilder {
        ProductFilterBuilder::default()
    }

    /// A filter that matches every product.
    pub fn unconstrained() -> Self {
        Self::default()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_unconstrained(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.conditions.iter().all(|c| c.matches(product))
    }
}

#[derive(Debug, Default)]
pub struct ProductFilterBuilder {
    text: Option<TextMatch>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl ProductFilterBuilder {
    pub fn text(mut self, query: &str) -> Self {
        self.text = TextMatch::new(query);
        self
    }

    pub fn min_price(mut self, min_price: Option<f64>) -> Self {
        self.min_price = min_price;
        self
    }

    pub fn max_price(mut self, max_price: Option<f64>) -> Self {
        self.max_price = max_price;
        self
    }

    pub fn build(self) -> ProductFilter {
        let conditions = [
            self.text.map(Condition::Text),
            self.min_price.map(Condition::MinPrice),
            self.max_price.map(Condition::MaxPrice),
        ]
        .into_iter()
        .flatten()
        .collect();

        ProductFilter { conditions }
    }
}
