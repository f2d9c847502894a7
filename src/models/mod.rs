mod enriched;
mod product;
mod transaction;

pub use enriched::{EnrichedTransaction, ProductMetadata};
pub use product::{CatalogProduct, ProductInfo};
pub use transaction::Transaction;
