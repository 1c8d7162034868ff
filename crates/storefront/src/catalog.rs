//! Read-only product catalog.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shopfront_core::{Product, ProductId};
use thiserror::Error;

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),

    #[error("Invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered product catalog with an id index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if two products share an id or a price is negative.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            let negative = |price: Decimal| price.is_sign_negative() && !price.is_zero();
            if negative(product.price) || product.discount_price.is_some_and(negative) {
                return Err(CatalogError::NegativePrice(product.id));
            }
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products, index })
    }

    /// Parse a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document is malformed or fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// Look up a product by the textual id carried in a page address.
    #[must_use]
    pub fn find_by_param(&self, param: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.to_string() == param)
    }

    /// Products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
