//! Product details panel.

use super::{RenderContext, bind_item, region};
use crate::dom::{RenderTarget, query_param};
use crate::markup::Role;

/// Render the product named by the page address, if any.
pub fn render_details<T: RenderTarget>(target: &T, ctx: &RenderContext<'_>) -> bool {
    let Some((container, template)) = region(target, Role::Details, Role::DetailsTemplate) else {
        return false;
    };

    let Some(param) = target
        .location()
        .and_then(|address| query_param(&address, &ctx.config.details_param))
    else {
        tracing::debug!(param = %ctx.config.details_param, "No product in page address");
        return false;
    };

    let Some(product) = ctx.catalog.find_by_param(&param) else {
        tracing::debug!(%param, "Details product not in catalog");
        return false;
    };

    let Some(item) = target.instantiate(&template) else {
        return false;
    };
    bind_item(target, &item, product, ctx);
    target.replace_children(&container, &item);
    true
}
