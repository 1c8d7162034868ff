//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product in the catalog.
///
/// Supplied by the catalog source at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Plain text description.
    #[serde(default)]
    pub description: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Reduced price, shown alongside the regular one when present.
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Explicit details page URL, overriding the generated one.
    #[serde(default)]
    pub link: Option<String>,
}
