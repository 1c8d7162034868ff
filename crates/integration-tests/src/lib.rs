//! End-to-end tests for the Shopfront widget.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `widget_scenarios` - click flows through a mounted widget and page
//! - `persistence` - state surviving across widget instances and storage media
//!
//! Everything runs against the in-memory document; no browser is needed.

use rust_decimal::Decimal;
use shopfront_core::{Product, ProductId};
use shopfront_widget::dom::layout::{PageKind, build_page};
use shopfront_widget::dom::{MemoryDocument, NodeId, RenderTarget};
use shopfront_widget::markup::Role;
use shopfront_widget::{Catalog, KeyValueStore, Widget, WidgetConfig};

/// A catalog product with predictable fields.
#[must_use]
pub fn product(id: i32, price: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        description: format!("About product {id}"),
        price: Decimal::from(price),
        discount_price: None,
        image: format!("/img/{id}.jpg"),
        link: None,
    }
}

/// A mounted widget together with the page it renders into.
pub struct TestPage<S> {
    pub widget: Widget<S>,
    pub doc: MemoryDocument,
}

impl<S: KeyValueStore> TestPage<S> {
    /// Mount a widget over `products` on a fresh `kind` page.
    ///
    /// # Panics
    ///
    /// Panics if the products do not form a valid catalog.
    #[must_use]
    pub fn mount(kind: PageKind, products: Vec<Product>, storage: S) -> Self {
        let catalog = Catalog::new(products).expect("valid catalog");
        let widget = Widget::new(WidgetConfig::default(), catalog, storage);
        let doc = build_page(kind);
        widget.mount(&doc);
        Self { widget, doc }
    }

    /// Element with `role` inside the `index`th item of the `list` container.
    #[must_use]
    pub fn control(&self, list: Role, index: usize, role: Role) -> Option<NodeId> {
        let container = self.doc.query_role(None, list)?;
        let item = *self.doc.child_elements(container).get(index)?;
        self.doc.query_role(Some(&item), role)
    }

    /// Text of the first element with `role` on the page.
    #[must_use]
    pub fn text(&self, role: Role) -> Option<String> {
        self.doc.query_role(None, role).map(|node| self.doc.text(node))
    }

    /// Number of rendered items in the `list` container.
    #[must_use]
    pub fn item_count(&self, list: Role) -> usize {
        self.doc
            .query_role(None, list)
            .map_or(0, |container| self.doc.child_elements(container).len())
    }

    /// Click the element with `role` in item `index` of `list`.
    ///
    /// # Panics
    ///
    /// Panics if there is no such element.
    pub fn click(&mut self, list: Role, index: usize, role: Role) {
        let node = self
            .control(list, index, role)
            .expect("control present on page");
        self.widget.handle_click(&self.doc, &node);
    }
}
