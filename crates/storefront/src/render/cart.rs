//! Cart panel: lines, total and the empty-cart control.

use super::{RenderContext, bind_action, bind_item, region};
use crate::actions::Action;
use crate::dom::RenderTarget;
use crate::markup::Role;

/// Render the cart panel. Returns whether any part of it was on the page.
pub fn render_cart<T: RenderTarget>(target: &T, ctx: &RenderContext<'_>) -> bool {
    let lines = ctx.state.cart_lines(ctx.catalog);
    let mut rendered = false;

    if let Some(total) = target.query_role(None, Role::CartTotal) {
        target.set_text(&total, &ctx.format_price(ctx.state.cart_total(ctx.catalog)));
        rendered = true;
    }

    if let Some(control) = target.query_role(None, Role::EmptyCart) {
        target.set_disabled(&control, lines.is_empty());
        rendered = true;
    }

    let Some((container, template)) = region(target, Role::CartList, Role::CartTemplate) else {
        return rendered;
    };

    let fragment = target.create_fragment();
    for line in &lines {
        let Some(item) = target.instantiate(&template) else {
            continue;
        };
        let id = line.product.id;
        bind_item(target, &item, line.product, ctx);

        if let Some(quantity) = target.query_role(Some(&item), Role::Quantity) {
            target.set_value(&quantity, &line.count.to_string());
        }
        if let Some(subtotal) = target.query_role(Some(&item), Role::Subtotal) {
            target.set_text(&subtotal, &ctx.format_price(line.subtotal()));
        }
        if let Some(button) = target.query_role(Some(&item), Role::Increment) {
            bind_action(target, &button, &Action::IncrementCount(id));
        }
        if let Some(button) = target.query_role(Some(&item), Role::Decrement) {
            bind_action(target, &button, &Action::DecrementCount(id));
        }
        if let Some(button) = target.query_role(Some(&item), Role::Remove) {
            bind_action(target, &button, &Action::RemoveFromCart(id));
        }

        target.append(&fragment, &item);
    }
    target.replace_children(&container, &fragment);
    true
}
