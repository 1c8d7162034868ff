//! Unified error handling.
//!
//! Each layer has its own error enum; `WidgetError` wraps them for callers
//! that drive the whole widget, such as the browser entry point and the CLI.
//! Nothing in the render or click path returns an error: those failures are
//! logged and the widget carries on.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Widget-level error type.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing saved state failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The product catalog is invalid.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The host environment is missing something the widget needs.
    #[error("Host error: {0}")]
    Host(String),
}

/// Result type alias for `WidgetError`.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use shopfront_core::ProductId;

    use super::*;

    #[test]
    fn test_widget_error_display() {
        let err = WidgetError::Host("no document".to_string());
        assert_eq!(err.to_string(), "Host error: no document");

        let err = WidgetError::from(CatalogError::DuplicateId(ProductId::new(3)));
        assert_eq!(err.to_string(), "Catalog error: Duplicate product id: 3");
    }

    #[test]
    fn test_widget_error_from_storage() {
        let err: WidgetError = StorageError::Unavailable("quota exceeded".to_string()).into();
        assert!(matches!(err, WidgetError::Storage(_)));
        assert_eq!(
            err.to_string(),
            "Storage error: Storage unavailable: quota exceeded"
        );
    }
}
