//! Binding a product into a cloned template.

use shopfront_core::Product;

use super::RenderContext;
use crate::actions::Action;
use crate::dom::RenderTarget;
use crate::markup::{ACTION_ATTR, ACTIVE_CLASS, ARGS_ATTR, Role};

/// Fill the role slots under `scope` with `product`.
///
/// Every slot is optional; missing ones are skipped.
pub fn bind_item<T: RenderTarget>(
    target: &T,
    scope: &T::Node,
    product: &Product,
    ctx: &RenderContext<'_>,
) {
    let slot = |role: Role| target.query_role(Some(scope), role);

    if let Some(link) = slot(Role::Link) {
        let href = product
            .link
            .clone()
            .unwrap_or_else(|| ctx.config.details_url(product.id));
        target.set_attribute(&link, "href", &href);
    }

    if let Some(image) = slot(Role::Image) {
        target.set_attribute(&image, "src", &product.image);
        target.set_attribute(&image, "alt", &product.title);
    }

    if let Some(title) = slot(Role::Title) {
        target.set_text(&title, &product.title);
    }

    if let Some(description) = slot(Role::Description) {
        target.set_text(&description, &product.description);
    }

    if let Some(price) = slot(Role::Price) {
        target.set_text(&price, &ctx.format_price(product.price));
    }

    if let Some(discount) = slot(Role::DiscountPrice) {
        let text = product
            .discount_price
            .map(|amount| ctx.format_price(amount))
            .unwrap_or_default();
        target.set_text(&discount, &text);
    }

    if let Some(toggle) = slot(Role::FavoriteToggle) {
        target.set_class(&toggle, ACTIVE_CLASS, ctx.state.is_favorite(product.id));
        bind_action(target, &toggle, &Action::ToggleFavorite(product.id));
    }

    if let Some(button) = slot(Role::AddToCart) {
        bind_action(target, &button, &Action::AddToCart(product.id));
    }
}

/// Attach `action` to `node` so a click on it (or inside it) dispatches it.
pub fn bind_action<T: RenderTarget>(target: &T, node: &T::Node, action: &Action) {
    target.set_attribute(node, ACTION_ATTR, action.name());
    target.set_attribute(node, ARGS_ATTR, &action.args());
}
