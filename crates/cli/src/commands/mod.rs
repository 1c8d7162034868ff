//! CLI command implementations.

pub mod click;
pub mod render;
pub mod state;

use std::path::Path;

use shopfront_core::Product;
use shopfront_widget::dom::MemoryDocument;
use shopfront_widget::dom::layout::{PageKind, build_page};
use shopfront_widget::{Catalog, CatalogError, FileStorage, Widget, WidgetConfig, WidgetError};
use thiserror::Error;
use tracing::info;

/// Errors raised by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML catalog could not be parsed.
    #[error("Invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Widget setup failed.
    #[error(transparent)]
    Widget(#[from] WidgetError),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        Self::Widget(err.into())
    }
}

/// A widget wired to a catalog file and a state file.
pub struct Session {
    pub widget: Widget<FileStorage>,
}

impl Session {
    /// Load configuration and catalog, then restore saved state.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the configuration or catalog is invalid.
    pub fn open(catalog_path: &Path, state_path: &Path) -> Result<Self, CliError> {
        let config = WidgetConfig::from_env().map_err(WidgetError::from)?;
        let catalog = load_catalog(catalog_path)?;
        info!(
            catalog = %catalog_path.display(),
            state = %state_path.display(),
            products = catalog.len(),
            "Session opened"
        );

        let widget = Widget::new(config, catalog, FileStorage::new(state_path));
        Ok(Self { widget })
    }

    /// Build a page skeleton, positioned at `location` if given.
    #[must_use]
    pub fn page(kind: PageKind, location: Option<&str>) -> MemoryDocument {
        let doc = build_page(kind);
        if let Some(location) = location {
            doc.set_location(location);
        }
        doc
    }
}

/// Read a catalog file, choosing the format by extension.
///
/// `.yaml` and `.yml` files are parsed as YAML; anything else as JSON.
///
/// # Errors
///
/// Returns `CliError` if the file cannot be read, parsed or validated.
pub fn load_catalog(path: &Path) -> Result<Catalog, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let catalog = if is_yaml {
        let products: Vec<Product> = serde_yaml::from_str(&content)?;
        Catalog::new(products)?
    } else {
        Catalog::from_json_str(&content)?
    };
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;

    use shopfront_core::ProductId;

    use super::*;

    #[test]
    fn test_load_json_catalog() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "Ring", "price": "10"}}, {{"id": 2, "title": "Band", "price": "4.5"}}]"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().title, "Band");
    }

    #[test]
    fn test_load_yaml_catalog() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "- id: 7\n  title: Necklace\n  price: \"25.00\"\n  discountPrice: \"20.00\"").unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        let product = catalog.get(ProductId::new(7)).unwrap();
        assert_eq!(product.title, "Necklace");
        assert!(product.discount_price.is_some());
    }

    #[test]
    fn test_load_catalog_rejects_duplicates() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "A", "price": "1"}}, {{"id": 1, "title": "B", "price": "2"}}]"#
        )
        .unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Widget(WidgetError::Catalog(CatalogError::DuplicateId(_)))
        ));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
    }
}
