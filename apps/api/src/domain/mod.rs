pub mod product;
pub mod shared;
