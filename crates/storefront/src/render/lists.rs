//! Catalog and favorites lists.

use shopfront_core::Product;

use super::{RenderContext, bind_item, region};
use crate::dom::RenderTarget;
use crate::markup::Role;

/// Every product, in catalog order.
pub fn render_catalog<T: RenderTarget>(target: &T, ctx: &RenderContext<'_>) -> bool {
    render_product_list(
        target,
        ctx,
        Role::CatalogList,
        Role::CatalogTemplate,
        ctx.catalog.iter(),
    )
}

/// Favorite products, in catalog order.
pub fn render_favorites<T: RenderTarget>(target: &T, ctx: &RenderContext<'_>) -> bool {
    render_product_list(
        target,
        ctx,
        Role::FavoritesList,
        Role::FavoritesTemplate,
        ctx.catalog
            .iter()
            .filter(|product| ctx.state.is_favorite(product.id)),
    )
}

fn render_product_list<'p, T: RenderTarget>(
    target: &T,
    ctx: &RenderContext<'_>,
    container: Role,
    template: Role,
    products: impl Iterator<Item = &'p Product>,
) -> bool {
    let Some((container, template)) = region(target, container, template) else {
        return false;
    };

    // Build offscreen, then swap in one step
    let fragment = target.create_fragment();
    for product in products {
        let Some(item) = target.instantiate(&template) else {
            continue;
        };
        bind_item(target, &item, product, ctx);
        target.append(&fragment, &item);
    }
    target.replace_children(&container, &fragment);
    true
}
