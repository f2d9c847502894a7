use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::enrichment::catalog::ProductCatalog;
use crate::models::{EnrichedTransaction, ProductMetadata, Transaction};
use crate::types::{percentage, CatalogId};

static PRODUCT_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("product number pattern is valid"));

/// The first run of digits in a product id (`P101` -> 101), if it fits a catalog id.
pub fn extract_catalog_id(product_id: &str) -> Option<CatalogId> {
    PRODUCT_NUMBER.find(product_id)?.as_str().parse().ok()
}

pub fn enrich_transaction(transaction: &Transaction, catalog: &ProductCatalog) -> EnrichedTransaction {
    let info = extract_catalog_id(&transaction.product_id).and_then(|id| catalog.get(id));

    match info {
        Some(info) => EnrichedTransaction::matched(transaction.clone(), ProductMetadata::from(info)),
        None => {
            debug!("No catalog entry for product [{}]", transaction.product_id);
            EnrichedTransaction::unmatched(transaction.clone())
        }
    }
}

/// Attaches catalog metadata to every transaction; misses are kept as unmatched.
pub fn enrich_sales_data(transactions: &[Transaction], catalog: &ProductCatalog) -> Vec<EnrichedTransaction> {
    let enriched: Vec<EnrichedTransaction> = transactions.iter()
        .map(|transaction| enrich_transaction(transaction, catalog))
        .collect();

    let stats = EnrichmentStats::from_enriched(&enriched);
    info!("Enriched {}/{} transactions ({}%)", stats.matched, stats.total, stats.success_rate);

    enriched
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichmentStats {
    pub matched: usize,
    pub total: usize,
    /// Percentage of matched transactions, two decimals; zero when there are none.
    pub success_rate: Decimal,
    /// Product ids of unmatched transactions, in input order.
    pub unmatched_product_ids: Vec<String>
}

impl EnrichmentStats {
    pub fn from_enriched(enriched: &[EnrichedTransaction]) -> Self {
        let matched = enriched.iter().filter(|record| record.api_match()).count();
        let total = enriched.len();

        let success_rate = percentage(Decimal::from(matched), Decimal::from(total));

        let unmatched_product_ids = enriched.iter()
            .filter(|record| !record.api_match())
            .map(|record| record.transaction.product_id.clone())
            .collect();

        Self { matched, total, success_rate, unmatched_product_ids }
    }
}
