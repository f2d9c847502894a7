use serde::Deserialize;

use crate::types::CatalogId;

/// One product as returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogProduct {
    pub id: CatalogId,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub brand: String,
    pub price: f64,
    pub rating: f64
}

/// The subset of catalog data kept for lookups by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInfo {
    pub title: String,
    pub category: String,
    pub brand: String,
    pub rating: f64
}

impl From<CatalogProduct> for ProductInfo {
    fn from(product: CatalogProduct) -> Self {
        Self {
            title: product.title,
            category: product.category,
            brand: product.brand,
            rating: product.rating
        }
    }
}
