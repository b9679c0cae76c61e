use crate::{config::Config, domain::product::repository::ProductCatalog};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn ProductCatalog>,
}
