use rust_decimal::Decimal;

use crate::types::Quantity;

/// A single sales line item parsed from the pipe-delimited input.
///
/// Prefix rules (`T`, `P`, `C`) and positive quantity/price are not enforced
/// at construction; see [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: String,
    /// Kept as the raw `YYYY-MM-DD` string; ordering is lexicographic.
    pub date: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: Quantity,
    pub unit_price: Decimal,
    pub customer_id: String,
    pub region: String
}

impl Transaction {
    /// Quantity multiplied by unit price.
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.quantity).saturating_mul(self.unit_price)
    }
}
