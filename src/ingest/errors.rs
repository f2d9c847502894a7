use thiserror::Error;

use crate::types::AmountError;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Expected {expected} fields but found {found}")]
    FieldCount {
        expected: usize,
        found: usize
    },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[source] AmountError),
    #[error("Invalid unit price: {0}")]
    InvalidUnitPrice(#[source] AmountError)
}
