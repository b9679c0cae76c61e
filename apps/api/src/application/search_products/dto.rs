use crate::domain::{product::entity::Product, shared::pagination::PageRequest};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Default, Validate)]
pub struct SearchRequest {
    pub query: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[validate(nested)]
    pub page: PageRequest,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SearchResponse {
    pub products: Vec<Product>,
    pub has_more: bool,
}
