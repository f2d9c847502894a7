use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::validation::errors::ValidationError;

/// Checks a transaction against the business rules.
///
/// Rules are evaluated in order and the first failure is returned:
/// required fields, positive quantity and unit price, then the `T`, `P`
/// and `C` prefixes of the transaction, product and customer ids.
pub fn validate(transaction: &Transaction) -> Result<(), ValidationError> {
    if let Some(field) = missing_field(transaction) {
        return Err(ValidationError::missing_field(transaction, field))
    }

    if transaction.quantity <= 0 {
        return Err(ValidationError::non_positive_quantity(transaction))
    }

    if transaction.unit_price <= Decimal::ZERO {
        return Err(ValidationError::non_positive_unit_price(transaction))
    }

    if !transaction.transaction_id.starts_with('T') {
        return Err(ValidationError::invalid_transaction_id(transaction))
    }

    if !transaction.product_id.starts_with('P') {
        return Err(ValidationError::invalid_product_id(transaction))
    }

    if !transaction.customer_id.starts_with('C') {
        return Err(ValidationError::invalid_customer_id(transaction))
    }

    Ok(())
}

fn missing_field(transaction: &Transaction) -> Option<&'static str> {
    let text_fields = [
        ("TransactionID", &transaction.transaction_id),
        ("Date", &transaction.date),
        ("ProductID", &transaction.product_id),
        ("ProductName", &transaction.product_name),
        ("CustomerID", &transaction.customer_id),
        ("Region", &transaction.region)
    ];

    text_fields.into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
}
