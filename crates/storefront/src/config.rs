//! Widget configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SHOPFRONT_STORAGE_KEY` - Storage key holding the saved state (default: shopfront-state)
//! - `SHOPFRONT_DETAILS_PAGE` - Product details page address (default: /product-details.html)
//! - `SHOPFRONT_DETAILS_PARAM` - Query parameter carrying the product id (default: productId)
//! - `SHOPFRONT_CURRENCY` - ISO 4217 code used for price display (default: USD)
//!
//! Browser builds have no environment and use [`WidgetConfig::default`].

use shopfront_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_STORAGE_KEY: &str = "shopfront-state";
const DEFAULT_DETAILS_PAGE: &str = "/product-details.html";
const DEFAULT_DETAILS_PARAM: &str = "productId";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Key under which the cart and favorites are persisted
    pub storage_key: String,
    /// Address of the product details page, relative or absolute
    pub details_page: String,
    /// Query parameter naming the product on the details page
    pub details_param: String,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            details_page: DEFAULT_DETAILS_PAGE.to_string(),
            details_param: DEFAULT_DETAILS_PARAM.to_string(),
            currency: CurrencyCode::default(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be interpreted.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be interpreted.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let currency = get_or_default("SHOPFRONT_CURRENCY", CurrencyCode::default().code())
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPFRONT_CURRENCY".to_string(), e.to_string())
            })?;

        Ok(Self {
            storage_key: get_or_default("SHOPFRONT_STORAGE_KEY", DEFAULT_STORAGE_KEY),
            details_page: get_or_default("SHOPFRONT_DETAILS_PAGE", DEFAULT_DETAILS_PAGE),
            details_param: get_or_default("SHOPFRONT_DETAILS_PARAM", DEFAULT_DETAILS_PARAM),
            currency,
        })
    }

    /// Details page address for a product, e.g. `/product-details.html?productId=5`.
    #[must_use]
    pub fn details_url(&self, id: impl std::fmt::Display) -> String {
        let separator = if self.details_page.contains('?') {
            '&'
        } else {
            '?'
        };
        format!(
            "{}{separator}{}={id}",
            self.details_page, self.details_param
        )
    }
}
