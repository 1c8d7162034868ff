//! Region renderers.
//!
//! After every dispatch (and once at mount) each region is re-derived from
//! the current state and the catalog. Regions are guarded independently: a
//! page that lacks a region's container or template simply skips it, so the
//! same widget runs on catalog, favorites, cart and details pages alike.

mod binding;
mod cart;
mod counters;
mod details;
mod lists;

pub use binding::{bind_action, bind_item};

use rust_decimal::Decimal;
use shopfront_core::Price;

use crate::catalog::Catalog;
use crate::config::WidgetConfig;
use crate::dom::RenderTarget;
use crate::markup::Role;
use crate::state::AppState;

/// Everything a region renderer reads.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub catalog: &'a Catalog,
    pub state: &'a AppState,
    pub config: &'a WidgetConfig,
}

impl RenderContext<'_> {
    /// Format an amount in the configured currency.
    #[must_use]
    pub fn format_price(&self, amount: Decimal) -> String {
        Price::new(amount, self.config.currency).to_string()
    }
}

/// Regions that were rendered on the last pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub favorites_count: bool,
    pub cart_count: bool,
    pub catalog: bool,
    pub favorites: bool,
    pub cart: bool,
    pub details: bool,
}

/// Re-render every region present on the page.
pub fn render_all<T: RenderTarget>(target: &T, ctx: &RenderContext<'_>) -> RenderReport {
    let report = RenderReport {
        favorites_count: counters::render_favorites_count(target, ctx),
        cart_count: counters::render_cart_count(target, ctx),
        catalog: lists::render_catalog(target, ctx),
        favorites: lists::render_favorites(target, ctx),
        cart: cart::render_cart(target, ctx),
        details: details::render_details(target, ctx),
    };
    tracing::debug!(?report, "Render pass complete");
    report
}

/// Container and template for a list region, or `None` when either is absent.
fn region<T: RenderTarget>(
    target: &T,
    container: Role,
    template: Role,
) -> Option<(T::Node, T::Node)> {
    let Some(container_node) = target.query_role(None, container) else {
        tracing::debug!(region = %container, "Region container not on page, skipping");
        return None;
    };
    let Some(template_node) = target.query_role(None, template) else {
        tracing::debug!(region = %container, template = %template, "Region template not on page, skipping");
        return None;
    };
    Some((container_node, template_node))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopfront_core::ProductId;

    use super::*;
    use crate::catalog::tests::product;
    use crate::dom::layout::{PageKind, build_page};
    use crate::dom::{MemoryDocument, NodeId};
    use crate::markup::{ACTION_ATTR, ACTIVE_CLASS, ARGS_ATTR};
    use crate::state::CartItem;

    fn catalog() -> Catalog {
        Catalog::new(vec![product(1, 10), product(2, 4), product(3, 7)]).unwrap()
    }

    fn state(cart: &[(i32, u32)], favorites: &[i32]) -> AppState {
        AppState {
            cart_items: cart
                .iter()
                .map(|&(id, count)| CartItem {
                    id: ProductId::new(id),
                    count,
                })
                .collect(),
            favorites: favorites.iter().map(|&id| ProductId::new(id)).collect(),
        }
    }

    fn render(doc: &MemoryDocument, catalog: &Catalog, state: &AppState) -> RenderReport {
        let config = WidgetConfig::default();
        let ctx = RenderContext {
            catalog,
            state,
            config: &config,
        };
        render_all(doc, &ctx)
    }

    fn list(doc: &MemoryDocument, role: Role) -> Vec<NodeId> {
        let container = doc.query_role(None, role).unwrap();
        doc.child_elements(container)
    }

    fn titles(doc: &MemoryDocument, role: Role) -> Vec<String> {
        list(doc, role)
            .into_iter()
            .map(|item| doc.text(doc.query_role(Some(&item), Role::Title).unwrap()))
            .collect()
    }

    fn text_of(doc: &MemoryDocument, role: Role) -> String {
        doc.text(doc.query_role(None, role).unwrap())
    }

    #[test]
    fn test_full_page_renders_every_region() {
        let doc = build_page(PageKind::Full);
        doc.set_location("/product-details.html?productId=2");
        let report = render(&doc, &catalog(), &state(&[(1, 2)], &[3]));

        assert_eq!(
            report,
            RenderReport {
                favorites_count: true,
                cart_count: true,
                catalog: true,
                favorites: true,
                cart: true,
                details: true,
            }
        );
    }

    #[test]
    fn test_counters() {
        let doc = build_page(PageKind::Catalog);
        render(&doc, &catalog(), &state(&[(1, 2), (2, 3), (99, 1)], &[1, 2]));

        assert_eq!(text_of(&doc, Role::FavoritesCount), "2");
        // Dangling id 99 still counts toward the badge
        assert_eq!(text_of(&doc, Role::CartCount), "6");
    }

    #[test]
    fn test_catalog_list_in_catalog_order() {
        let doc = build_page(PageKind::Catalog);
        render(&doc, &catalog(), &AppState::default());

        assert_eq!(
            titles(&doc, Role::CatalogList),
            vec!["Product 1", "Product 2", "Product 3"]
        );
    }

    #[test]
    fn test_rerender_replaces_items() {
        let doc = build_page(PageKind::Catalog);
        render(&doc, &catalog(), &AppState::default());
        render(&doc, &catalog(), &state(&[], &[2]));

        let items = list(&doc, Role::CatalogList);
        assert_eq!(items.len(), 3);
        let toggles: Vec<bool> = items
            .iter()
            .map(|item| {
                let toggle = doc.query_role(Some(item), Role::FavoriteToggle).unwrap();
                doc.has_class(toggle, ACTIVE_CLASS)
            })
            .collect();
        assert_eq!(toggles, vec![false, true, false]);
    }

    #[test]
    fn test_favorites_list_filters_in_catalog_order() {
        let doc = build_page(PageKind::Favorites);
        render(&doc, &catalog(), &state(&[], &[3, 1, 42]));

        assert_eq!(
            titles(&doc, Role::FavoritesList),
            vec!["Product 1", "Product 3"]
        );
    }

    #[test]
    fn test_cart_panel() {
        let doc = build_page(PageKind::Cart);
        render(&doc, &catalog(), &state(&[(2, 3), (99, 5), (1, 1)], &[]));

        let lines = list(&doc, Role::CartList);
        assert_eq!(lines.len(), 2);

        let first = lines[0];
        assert_eq!(
            doc.text(doc.query_role(Some(&first), Role::Title).unwrap()),
            "Product 2"
        );
        let quantity = doc.query_role(Some(&first), Role::Quantity).unwrap();
        assert_eq!(doc.value(quantity).as_deref(), Some("3"));
        assert_eq!(
            doc.text(doc.query_role(Some(&first), Role::Subtotal).unwrap()),
            "$12.00"
        );

        let action = |role: Role| {
            let node = doc.query_role(Some(&first), role).unwrap();
            (
                doc.attribute(&node, ACTION_ATTR).unwrap(),
                doc.attribute(&node, ARGS_ATTR).unwrap(),
            )
        };
        assert_eq!(action(Role::Remove), ("removeFromCart".to_string(), "2".to_string()));
        assert_eq!(action(Role::Increment), ("incrementCount".to_string(), "2".to_string()));
        assert_eq!(action(Role::Decrement), ("decrementCount".to_string(), "2".to_string()));

        assert_eq!(text_of(&doc, Role::CartTotal), "$22.00");
        let control = doc.query_role(None, Role::EmptyCart).unwrap();
        assert!(!doc.is_disabled(control));
    }

    #[test]
    fn test_empty_cart_disables_control() {
        let doc = build_page(PageKind::Cart);
        render(&doc, &catalog(), &state(&[(2, 1)], &[]));
        render(&doc, &catalog(), &state(&[(99, 1)], &[]));

        assert!(list(&doc, Role::CartList).is_empty());
        assert_eq!(text_of(&doc, Role::CartTotal), "$0.00");
        let control = doc.query_role(None, Role::EmptyCart).unwrap();
        assert!(doc.is_disabled(control));
    }

    #[test]
    fn test_details_panel_uses_page_address() {
        let doc = build_page(PageKind::Details);
        doc.set_location("https://shop.example/product-details.html?productId=3");
        let report = render(&doc, &catalog(), &state(&[], &[3]));

        assert!(report.details);
        let details = doc.query_role(None, Role::Details).unwrap();
        assert_eq!(
            doc.text(doc.query_role(Some(&details), Role::Title).unwrap()),
            "Product 3"
        );
        let toggle = doc.query_role(Some(&details), Role::FavoriteToggle).unwrap();
        assert!(doc.has_class(toggle, ACTIVE_CLASS));
    }

    #[test]
    fn test_details_panel_skips_unknown_or_missing_product() {
        for location in [
            None,
            Some("/product-details.html"),
            Some("/product-details.html?productId=404"),
            Some("/product-details.html?id=3"),
        ] {
            let doc = build_page(PageKind::Details);
            if let Some(location) = location {
                doc.set_location(location);
            }
            let report = render(&doc, &catalog(), &AppState::default());

            assert!(!report.details, "location: {location:?}");
            let details = doc.query_role(None, Role::Details).unwrap();
            assert!(doc.children(details).is_empty());
        }
    }

    #[test]
    fn test_partial_page_skips_absent_regions() {
        let doc = build_page(PageKind::Favorites);
        let report = render(&doc, &catalog(), &state(&[(1, 1)], &[1]));

        assert!(report.favorites && report.cart_count && report.favorites_count);
        assert!(!report.catalog && !report.cart && !report.details);
    }

    #[test]
    fn test_region_without_template_is_skipped() {
        let doc = MemoryDocument::new();
        let container = doc.append_role(doc.root(), "ul", Role::CatalogList);
        let report = render(&doc, &catalog(), &AppState::default());

        assert!(!report.catalog);
        assert!(doc.children(container).is_empty());
    }
}
