mod catalog;
mod enricher;
mod errors;
#[cfg(test)]
mod tests;
mod writer;

pub use catalog::{fetch_catalog, CatalogSource, HttpCatalog, OfflineCatalog, ProductCatalog, DEFAULT_CATALOG_LIMIT, DEFAULT_CATALOG_URL};
pub use enricher::{enrich_sales_data, enrich_transaction, extract_catalog_id, EnrichmentStats};
pub use errors::{CatalogError, PersistError};
pub use writer::{save_enriched_data, write_enriched, ENRICHED_HEADER};
