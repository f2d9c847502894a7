use crate::models::{ProductInfo, Transaction};

/// Catalog fields copied onto a transaction when its product id matched.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductMetadata {
    pub category: String,
    pub brand: String,
    pub rating: f64
}

impl From<&ProductInfo> for ProductMetadata {
    fn from(info: &ProductInfo) -> Self {
        Self {
            category: info.category.clone(),
            brand: info.brand.clone(),
            rating: info.rating
        }
    }
}

/// A transaction paired with its catalog metadata, if any was found.
///
/// Category, brand and rating are either all present or all absent.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTransaction {
    pub transaction: Transaction,
    pub metadata: Option<ProductMetadata>
}

impl EnrichedTransaction {
    pub fn matched(transaction: Transaction, metadata: ProductMetadata) -> Self {
        Self { transaction, metadata: Some(metadata) }
    }

    pub fn unmatched(transaction: Transaction) -> Self {
        Self { transaction, metadata: None }
    }

    pub fn api_match(&self) -> bool {
        self.metadata.is_some()
    }

    pub fn api_category(&self) -> Option<&str> {
        self.metadata.as_ref().map(|metadata| metadata.category.as_str())
    }

    pub fn api_brand(&self) -> Option<&str> {
        self.metadata.as_ref().map(|metadata| metadata.brand.as_str())
    }

    pub fn api_rating(&self) -> Option<f64> {
        self.metadata.as_ref().map(|metadata| metadata.rating)
    }
}
