pub mod product;
pub mod query;

pub use product::{Product, ProductRecord};
pub use query::SearchQuery;
