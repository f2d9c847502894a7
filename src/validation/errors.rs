use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Transaction;
use crate::types::Quantity;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Transaction [{transaction_id}] is missing required field [{field}]")]
    MissingField {
        transaction_id: String,
        field: &'static str
    },
    #[error("Transaction [{transaction_id}] has non-positive quantity [{quantity}]")]
    NonPositiveQuantity {
        transaction_id: String,
        quantity: Quantity
    },
    #[error("Transaction [{transaction_id}] has non-positive unit price [{unit_price}]")]
    NonPositiveUnitPrice {
        transaction_id: String,
        unit_price: Decimal
    },
    #[error("Transaction [{transaction_id}] has an id that does not start with 'T'")]
    InvalidTransactionId {
        transaction_id: String
    },
    #[error("Transaction [{transaction_id}] has product [{product_id}] that does not start with 'P'")]
    InvalidProductId {
        transaction_id: String,
        product_id: String
    },
    #[error("Transaction [{transaction_id}] has customer [{customer_id}] that does not start with 'C'")]
    InvalidCustomerId {
        transaction_id: String,
        customer_id: String
    }
}

impl ValidationError {
    pub fn missing_field(tx: &Transaction, field: &'static str) -> Self {
        Self::MissingField { transaction_id: tx.transaction_id.clone(), field }
    }

    pub fn non_positive_quantity(tx: &Transaction) -> Self {
        Self::NonPositiveQuantity {
            transaction_id: tx.transaction_id.clone(),
            quantity: tx.quantity
        }
    }

    pub fn non_positive_unit_price(tx: &Transaction) -> Self {
        Self::NonPositiveUnitPrice {
            transaction_id: tx.transaction_id.clone(),
            unit_price: tx.unit_price
        }
    }

    pub fn invalid_transaction_id(tx: &Transaction) -> Self {
        Self::InvalidTransactionId { transaction_id: tx.transaction_id.clone() }
    }

    pub fn invalid_product_id(tx: &Transaction) -> Self {
        Self::InvalidProductId {
            transaction_id: tx.transaction_id.clone(),
            product_id: tx.product_id.clone()
        }
    }

    pub fn invalid_customer_id(tx: &Transaction) -> Self {
        Self::InvalidCustomerId {
            transaction_id: tx.transaction_id.clone(),
            customer_id: tx.customer_id.clone()
        }
    }
}
