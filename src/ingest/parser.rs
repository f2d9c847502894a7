use tracing::{debug, info};

use crate::ingest::errors::ParseError;
use crate::models::Transaction;
use crate::types::{parse_decimal, parse_quantity};

pub const FIELD_COUNT: usize = 8;

/// Result of parsing a batch of raw lines.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub transactions: Vec<Transaction>,
    /// Lines dropped for a wrong field count or a non-numeric quantity/price.
    pub unparsed: usize
}

/// Parses one `|`-delimited line into a [`Transaction`].
///
/// Fields are trimmed, commas in the product name become spaces and commas in
/// quantity and unit price are treated as thousands separators.
pub fn parse_line(line: &str) -> Result<Transaction, ParseError> {
    let fields: Vec<&str> = line.split('|').collect();

    let [transaction_id, date, product_id, product_name, quantity, unit_price, customer_id, region] = fields.as_slice() else {
        return Err(ParseError::FieldCount { expected: FIELD_COUNT, found: fields.len() });
    };

    let quantity = parse_quantity(quantity).map_err(ParseError::InvalidQuantity)?;
    let unit_price = parse_decimal(unit_price).map_err(ParseError::InvalidUnitPrice)?;

    Ok(Transaction {
        transaction_id: transaction_id.trim().to_string(),
        date: date.trim().to_string(),
        product_id: product_id.trim().to_string(),
        product_name: product_name.replace(',', " ").trim().to_string(),
        quantity,
        unit_price,
        customer_id: customer_id.trim().to_string(),
        region: region.trim().to_string()
    })
}

/// Parses every line, dropping the ones that do not form a transaction.
pub fn parse_transactions<S: AsRef<str>>(lines: &[S]) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (index, line) in lines.iter().enumerate() {
        match parse_line(line.as_ref()) {
            Ok(transaction) => outcome.transactions.push(transaction),
            Err(error) => {
                debug!("Skipping data line {}: {error}", index + 1);
                outcome.unparsed += 1;
            }
        }
    }

    info!("Parsed {} records, skipped {} unparseable lines", outcome.transactions.len(), outcome.unparsed);

    outcome
}
