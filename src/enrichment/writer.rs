use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info};

use crate::enrichment::errors::PersistError;
use crate::models::EnrichedTransaction;
use crate::types::Quantity;

pub const ENRICHED_HEADER: [&str; 12] = [
    "TransactionID", "Date", "ProductID", "ProductName",
    "Quantity", "UnitPrice", "CustomerID", "Region",
    "API_Category", "API_Brand", "API_Rating", "API_Match"
];

#[derive(Serialize)]
struct EnrichedRow<'a> {
    transaction_id: &'a str,
    date: &'a str,
    product_id: &'a str,
    product_name: &'a str,
    quantity: Quantity,
    unit_price: Decimal,
    customer_id: &'a str,
    region: &'a str,
    api_category: Option<&'a str>,
    api_brand: Option<&'a str>,
    api_rating: Option<f64>,
    api_match: bool
}

impl<'a> From<&'a EnrichedTransaction> for EnrichedRow<'a> {
    fn from(record: &'a EnrichedTransaction) -> Self {
        let transaction = &record.transaction;

        Self {
            transaction_id: &transaction.transaction_id,
            date: &transaction.date,
            product_id: &transaction.product_id,
            product_name: &transaction.product_name,
            quantity: transaction.quantity,
            unit_price: transaction.unit_price,
            customer_id: &transaction.customer_id,
            region: &transaction.region,
            api_category: record.api_category(),
            api_brand: record.api_brand(),
            api_rating: record.api_rating(),
            api_match: record.api_match()
        }
    }
}

/// Writes the header and one `|`-delimited row per record; absent metadata becomes an empty field.
pub fn write_enriched<W: Write>(output: W, enriched: &[EnrichedTransaction]) -> Result<(), PersistError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'|')
        .quote_style(QuoteStyle::Never)
        .has_headers(false)
        .from_writer(output);

    writer.write_record(ENRICHED_HEADER)?;

    for record in enriched {
        writer.serialize(EnrichedRow::from(record))?;
    }

    writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Saves the enriched records to `path`, creating its directory if needed.
///
/// Failures are logged and returned; the records themselves are untouched.
pub fn save_enriched_data(path: &Path, enriched: &[EnrichedTransaction]) -> Result<(), PersistError> {
    let result = create_file(path).and_then(|file| write_enriched(file, enriched));

    match &result {
        Ok(()) => info!("Enriched data saved to {}", path.display()),
        Err(error) => error!("Failed to save enriched data: {error}")
    }

    result
}

fn create_file(path: &Path) -> Result<File, PersistError> {
    let to_persist_error = |source| PersistError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(to_persist_error)?;
    }

    File::create(path).map_err(to_persist_error)
}
