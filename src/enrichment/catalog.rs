use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::enrichment::errors::CatalogError;
use crate::models::{CatalogProduct, ProductInfo};
use crate::types::CatalogId;

pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";
pub const DEFAULT_CATALOG_LIMIT: usize = 120;

/// Something that can list catalog products.
pub trait CatalogSource {
    fn fetch_products(&self, limit: usize) -> Result<Vec<CatalogProduct>, CatalogError>;
}

/// Product metadata keyed by numeric catalog id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: HashMap<CatalogId, ProductInfo>
}

impl ProductCatalog {
    /// Builds the lookup table; a repeated id keeps the last product seen.
    pub fn from_products(products: Vec<CatalogProduct>) -> Self {
        Self {
            products: products.into_iter().map(|product| (product.id, ProductInfo::from(product))).collect()
        }
    }

    pub fn get(&self, id: CatalogId) -> Option<&ProductInfo> {
        self.products.get(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Deserialize)]
struct ProductPage {
    #[serde(default)]
    products: Vec<CatalogProduct>
}

/// Catalog backed by a DummyJSON-style `GET {base_url}?limit=N` endpoint.
pub struct HttpCatalog {
    client: Client,
    base_url: String
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into()
        })
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch_products(&self, limit: usize) -> Result<Vec<CatalogProduct>, CatalogError> {
        let response = self.client.get(&self.base_url)
            .query(&[("limit", limit)])
            .send()?;

        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let page: ProductPage = serde_json::from_str(&body)?;

        Ok(page.products)
    }
}

/// A catalog with no products, used when the network is not wanted.
pub struct OfflineCatalog;

impl CatalogSource for OfflineCatalog {
    fn fetch_products(&self, _limit: usize) -> Result<Vec<CatalogProduct>, CatalogError> {
        Ok(Vec::new())
    }
}

/// Fetches up to `limit` products, falling back to an empty catalog on any failure.
pub fn fetch_catalog<S: CatalogSource + ?Sized>(source: &S, limit: usize) -> ProductCatalog {
    match source.fetch_products(limit) {
        Ok(products) => {
            info!("Fetched {} products from the catalog", products.len());
            ProductCatalog::from_products(products)
        }
        Err(error) => {
            warn!("Catalog unavailable, continuing without enrichment: {error}");
            ProductCatalog::default()
        }
    }
}
