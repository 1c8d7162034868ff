//! Markup contract: marker attributes and the role vocabulary.
//!
//! Elements are located by a `data-role` marker. Action-bearing elements
//! carry `data-action` and, optionally, a JSON `data-args` payload.

use std::fmt;

/// Attribute holding an element's role.
pub const ROLE_ATTR: &str = "data-role";
/// Attribute naming the action an element triggers.
pub const ACTION_ATTR: &str = "data-action";
/// Attribute holding the JSON-encoded action argument.
pub const ARGS_ATTR: &str = "data-args";
/// Class set on a favorite toggle whose product is a favorite.
pub const ACTIVE_CLASS: &str = "active";

/// Every role the renderer looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    // Counters
    FavoritesCount,
    CartCount,

    // Region containers and their per-item templates
    CatalogList,
    CatalogTemplate,
    FavoritesList,
    FavoritesTemplate,
    CartList,
    CartTemplate,
    Details,
    DetailsTemplate,

    // Cart panel controls
    CartTotal,
    EmptyCart,

    // Per-item field slots
    Link,
    Image,
    Title,
    Description,
    Price,
    DiscountPrice,
    Quantity,
    Subtotal,

    // Per-item action buttons
    FavoriteToggle,
    AddToCart,
    Increment,
    Decrement,
    Remove,
}

impl Role {
    /// Value of the `data-role` attribute for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FavoritesCount => "favorites-count",
            Self::CartCount => "cart-count",
            Self::CatalogList => "catalog-list",
            Self::CatalogTemplate => "catalog-template",
            Self::FavoritesList => "favorites-list",
            Self::FavoritesTemplate => "favorites-template",
            Self::CartList => "cart-list",
            Self::CartTemplate => "cart-template",
            Self::Details => "details",
            Self::DetailsTemplate => "details-template",
            Self::CartTotal => "cart-total",
            Self::EmptyCart => "empty-cart",
            Self::Link => "link",
            Self::Image => "image",
            Self::Title => "title",
            Self::Description => "description",
            Self::Price => "price",
            Self::DiscountPrice => "discount-price",
            Self::Quantity => "quantity",
            Self::Subtotal => "subtotal",
            Self::FavoriteToggle => "favorite-toggle",
            Self::AddToCart => "add-to-cart",
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Remove => "remove",
        }
    }

    /// CSS selector matching elements with this role.
    #[must_use]
    pub fn selector(self) -> String {
        format!("[{ROLE_ATTR}=\"{}\"]", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
