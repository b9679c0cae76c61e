pub mod in_memory_product_catalog;
pub mod sqlx_product_repository;
