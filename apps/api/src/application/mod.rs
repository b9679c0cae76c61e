pub mod autocomplete_products;
pub mod search_products;
