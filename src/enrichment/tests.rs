use super::{
    enrich_sales_data, enrich_transaction, extract_catalog_id, fetch_catalog, save_enriched_data, write_enriched,
    CatalogError, CatalogSource, EnrichmentStats, HttpCatalog, OfflineCatalog, ProductCatalog
};

use std::io::{Read, Write};
use std::net::TcpListener;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use rust_decimal::Decimal;
use tempfile::tempdir;

use crate::models::{CatalogProduct, Transaction};

struct FailingCatalog;

impl CatalogSource for FailingCatalog {
    fn fetch_products(&self, _limit: usize) -> Result<Vec<CatalogProduct>, CatalogError> {
        Err(CatalogError::Status(503))
    }
}

struct FixedCatalog(Vec<CatalogProduct>);

impl CatalogSource for FixedCatalog {
    fn fetch_products(&self, limit: usize) -> Result<Vec<CatalogProduct>, CatalogError> {
        Ok(self.0.iter().take(limit).cloned().collect())
    }
}

fn create_product(id: u32, category: &str, brand: &str, rating: f64) -> CatalogProduct {
    CatalogProduct {
        id,
        title: format!("Product {id}"),
        category: category.to_string(),
        brand: brand.to_string(),
        price: 9.99,
        rating
    }
}

fn create_transaction(transaction_id: &str, product_id: &str) -> Result<Transaction> {
    Ok(Transaction {
        transaction_id: transaction_id.to_string(),
        date: "2024-12-01".to_string(),
        product_id: product_id.to_string(),
        product_name: "Laptop".to_string(),
        quantity: 2,
        unit_price: Decimal::from_str("1500.50")?,
        customer_id: "C001".to_string(),
        region: "North".to_string()
    })
}

fn sample_catalog() -> ProductCatalog {
    ProductCatalog::from_products(vec![
        create_product(101, "laptops", "Apple", 4.57),
        create_product(102, "accessories", "", 3.2),
    ])
}

/// Serves a single canned HTTP response and returns the URL to request.
fn serve_once(status_line: &'static str, body: &'static str) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let address = listener.local_addr()?;

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];

            while !request.windows(4).any(|window| window == b"\r\n\r\n") {
                match stream.read(&mut buffer) {
                    Ok(0) | Err(_) => break,
                    Ok(read) => request.extend_from_slice(&buffer[..read])
                }
            }

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    Ok(format!("http://{address}/products"))
}

#[test]
fn test_catalog_id_is_first_digit_run() {
    assert_eq!(extract_catalog_id("P101"), Some(101));
    assert_eq!(extract_catalog_id("P5"), Some(5));
    assert_eq!(extract_catalog_id("PX-12-34"), Some(12));
    assert_eq!(extract_catalog_id("P007"), Some(7));
    assert_eq!(extract_catalog_id("PXYZ"), None);
    assert_eq!(extract_catalog_id("P99999999999999"), None);
}

#[test]
fn test_matched_transaction_copies_catalog_fields() -> Result<()> {
    let enriched = enrich_transaction(&create_transaction("T001", "P101")?, &sample_catalog());

    assert!(enriched.api_match());
    assert_eq!(enriched.api_category(), Some("laptops"));
    assert_eq!(enriched.api_brand(), Some("Apple"));
    assert_eq!(enriched.api_rating(), Some(4.57));
    assert_eq!(enriched.transaction.product_id, "P101");

    Ok(())
}

#[test]
fn test_missing_catalog_id_leaves_fields_absent() -> Result<()> {
    let enriched = enrich_transaction(&create_transaction("T001", "P5")?, &sample_catalog());

    assert!(!enriched.api_match());
    assert_eq!(enriched.api_category(), None);
    assert_eq!(enriched.api_brand(), None);
    assert_eq!(enriched.api_rating(), None);

    Ok(())
}

#[test]
fn test_enrichment_is_repeatable_with_the_same_catalog() -> Result<()> {
    let catalog = sample_catalog();
    let transactions = vec![create_transaction("T001", "P101")?, create_transaction("T002", "P404")?];

    let first = enrich_sales_data(&transactions, &catalog);
    let second: Vec<_> = first.iter()
        .map(|record| enrich_transaction(&record.transaction, &catalog))
        .collect();

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_bad_product_ids_do_not_stop_the_batch() -> Result<()> {
    let transactions = vec![
        create_transaction("T001", "PXYZ")?,
        create_transaction("T002", "P102")?,
        create_transaction("T003", "P")?,
    ];

    let enriched = enrich_sales_data(&transactions, &sample_catalog());

    assert_eq!(enriched.len(), 3);
    assert_eq!(enriched.iter().map(|record| record.api_match()).collect::<Vec<_>>(), vec![false, true, false]);

    Ok(())
}

#[test]
fn test_enrichment_stats_report_rate_and_misses() -> Result<()> {
    let transactions = vec![
        create_transaction("T001", "P101")?,
        create_transaction("T002", "P5")?,
        create_transaction("T003", "P102")?,
    ];

    let stats = EnrichmentStats::from_enriched(&enrich_sales_data(&transactions, &sample_catalog()));

    assert_eq!(stats.matched, 2);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.success_rate, Decimal::from_str("66.67")?);
    assert_eq!(stats.unmatched_product_ids, vec!["P5"]);

    let empty = EnrichmentStats::from_enriched(&[]);

    assert!(empty.success_rate.is_zero());

    Ok(())
}

#[test]
fn test_enriched_output_format() -> Result<()> {
    let transactions = vec![create_transaction("T001", "P101")?, create_transaction("T002", "P5")?];
    let enriched = enrich_sales_data(&transactions, &sample_catalog());

    let mut output = Vec::new();
    write_enriched(&mut output, &enriched)?;
    let text = String::from_utf8(output)?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines, vec![
        "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region|API_Category|API_Brand|API_Rating|API_Match",
        "T001|2024-12-01|P101|Laptop|2|1500.50|C001|North|laptops|Apple|4.57|true",
        "T002|2024-12-01|P5|Laptop|2|1500.50|C001|North||||false",
    ]);

    Ok(())
}

#[test]
fn test_enriched_output_always_has_header() -> Result<()> {
    let mut output = Vec::new();
    write_enriched(&mut output, &[])?;

    assert_eq!(String::from_utf8(output)?.lines().count(), 1);

    Ok(())
}

#[test]
fn test_save_enriched_data_creates_directories() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join("data").join("enriched_sales_data.txt");
    let enriched = enrich_sales_data(&[create_transaction("T001", "P101")?], &sample_catalog());

    save_enriched_data(&path, &enriched)?;

    assert_eq!(std::fs::read_to_string(&path)?.lines().count(), 2);

    Ok(())
}

#[test]
fn test_save_enriched_data_reports_failure_without_losing_records() -> Result<()> {
    let directory = tempdir()?;
    let enriched = enrich_sales_data(&[create_transaction("T001", "P101")?], &sample_catalog());

    assert!(save_enriched_data(directory.path(), &enriched).is_err());
    assert_eq!(enriched.len(), 1);

    Ok(())
}

#[test]
fn test_catalog_failures_degrade_to_empty_mapping() {
    assert!(fetch_catalog(&FailingCatalog, 120).is_empty());
    assert!(fetch_catalog(&OfflineCatalog, 120).is_empty());
}

#[test]
fn test_fetch_catalog_respects_limit() {
    let source = FixedCatalog(vec![
        create_product(1, "smartphones", "Apple", 4.69),
        create_product(2, "smartphones", "Apple", 4.44),
        create_product(3, "laptops", "Samsung", 4.1),
    ]);

    let catalog = fetch_catalog(&source, 2);

    assert_eq!(catalog.len(), 2);
    assert!(catalog.get(3).is_none());
    assert_eq!(catalog.get(2).map(|info| info.rating), Some(4.44));
}

#[test]
fn test_duplicate_catalog_ids_keep_last_entry() {
    let catalog = ProductCatalog::from_products(vec![
        create_product(7, "first", "A", 1.0),
        create_product(7, "second", "B", 2.0),
    ]);

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(7).map(|info| info.category.as_str()), Some("second"));
}

#[test]
fn test_http_catalog_reads_product_page() -> Result<()> {
    let url = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"products": [{"id": 1, "title": "iPhone 9", "category": "smartphones", "brand": "Apple", "price": 549, "rating": 4.69},
                         {"id": 2, "title": "Lipstick", "category": "beauty", "price": 12.5, "rating": 3.9}],
            "total": 2, "skip": 0, "limit": 120}"#
    )?;

    let catalog = HttpCatalog::new(url, Duration::from_secs(5))?;
    let products = catalog.fetch_products(120)?;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].brand, "Apple");
    assert_eq!(products[1].brand, "");

    Ok(())
}

#[test]
fn test_http_catalog_rejects_error_status() -> Result<()> {
    let url = serve_once("HTTP/1.1 500 Internal Server Error", "{}")?;
    let catalog = HttpCatalog::new(url, Duration::from_secs(5))?;

    assert!(matches!(catalog.fetch_products(120), Err(CatalogError::Status(500))));

    Ok(())
}

#[test]
fn test_http_catalog_rejects_malformed_payload() -> Result<()> {
    let url = serve_once("HTTP/1.1 200 OK", r#"{"products": [{"id": "one"}]}"#)?;
    let catalog = HttpCatalog::new(url, Duration::from_secs(5))?;

    assert!(matches!(catalog.fetch_products(120), Err(CatalogError::Json(_))));

    Ok(())
}
