//! Header counters.

use super::RenderContext;
use crate::dom::RenderTarget;
use crate::markup::Role;

/// Number of favorites.
pub fn render_favorites_count<T: RenderTarget>(target: &T, ctx: &RenderContext<'_>) -> bool {
    let Some(node) = target.query_role(None, Role::FavoritesCount) else {
        return false;
    };
    target.set_text(&node, &ctx.state.favorites_count().to_string());
    true
}

/// Units in the cart, dangling items included.
pub fn render_cart_count<T: RenderTarget>(target: &T, ctx: &RenderContext<'_>) -> bool {
    let Some(node) = target.query_role(None, Role::CartCount) else {
        return false;
    };
    target.set_text(&node, &ctx.state.cart_count().to_string());
    true
}
