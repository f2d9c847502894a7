use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: value is an empty string")]
    Empty,
    #[error("Amount error: '{raw}' is not a whole number: {source}")]
    InvalidInteger {
        raw: String,
        source: ParseIntError
    },
    #[error("Amount error: '{raw}' is not a decimal number: {source}")]
    InvalidDecimal {
        raw: String,
        source: rust_decimal::Error
    }
}
