//! Standard page skeletons for the in-memory document.
//!
//! Real pages ship their own markup; these mirror it closely enough for the
//! CLI and tests. Each page kind carries only the regions that page has.

use std::fmt;
use std::str::FromStr;

use super::RenderTarget;
use super::memory::{MemoryDocument, NodeId};
use crate::markup::Role;

/// Which regions a page contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    /// Every region on one page.
    #[default]
    Full,
    Catalog,
    Favorites,
    Cart,
    Details,
}

impl PageKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Catalog => "catalog",
            Self::Favorites => "favorites",
            Self::Cart => "cart",
            Self::Details => "details",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "catalog" => Ok(Self::Catalog),
            "favorites" => Ok(Self::Favorites),
            "cart" => Ok(Self::Cart),
            "details" => Ok(Self::Details),
            other => Err(format!("unknown page kind: {other}")),
        }
    }
}

/// Build the skeleton for `kind` into a fresh document.
#[must_use]
pub fn build_page(kind: PageKind) -> MemoryDocument {
    let doc = MemoryDocument::new();
    let root = doc.root();

    header(&doc, root);
    let main = doc.append_element(root, "main");

    match kind {
        PageKind::Full => {
            catalog_section(&doc, main);
            favorites_section(&doc, main);
            cart_section(&doc, main);
            details_section(&doc, main);
        }
        PageKind::Catalog => catalog_section(&doc, main),
        PageKind::Favorites => favorites_section(&doc, main),
        PageKind::Cart => cart_section(&doc, main),
        PageKind::Details => details_section(&doc, main),
    }

    doc
}

fn header(doc: &MemoryDocument, root: NodeId) {
    let nav = doc.append_element(root, "nav");
    let favorites = doc.append_element(nav, "a");
    doc.set_attribute(&favorites, "href", "favorites.html");
    doc.append_role(favorites, "span", Role::FavoritesCount);
    let cart = doc.append_element(nav, "a");
    doc.set_attribute(&cart, "href", "cart.html");
    doc.append_role(cart, "span", Role::CartCount);
}

fn catalog_section(doc: &MemoryDocument, main: NodeId) {
    let section = doc.append_element(main, "section");
    doc.set_attribute(&section, "id", "catalog");
    doc.append_role(section, "ul", Role::CatalogList);
    let content = doc.append_template(section, Role::CatalogTemplate);
    product_card(doc, content);
}

fn favorites_section(doc: &MemoryDocument, main: NodeId) {
    let section = doc.append_element(main, "section");
    doc.set_attribute(&section, "id", "favorites");
    doc.append_role(section, "ul", Role::FavoritesList);
    let content = doc.append_template(section, Role::FavoritesTemplate);
    product_card(doc, content);
}

fn cart_section(doc: &MemoryDocument, main: NodeId) {
    let section = doc.append_element(main, "section");
    doc.set_attribute(&section, "id", "cart");
    doc.append_role(section, "ul", Role::CartList);

    let content = doc.append_template(section, Role::CartTemplate);
    let line = doc.append_element(content, "li");
    doc.set_attribute(&line, "class", "cart-line");
    let link = doc.append_role(line, "a", Role::Link);
    doc.append_role(link, "img", Role::Image);
    doc.append_role(line, "h4", Role::Title);
    doc.append_role(line, "span", Role::Price);
    labelled_button(doc, line, Role::Decrement, "-");
    let quantity = doc.append_role(line, "input", Role::Quantity);
    doc.set_attribute(&quantity, "type", "number");
    labelled_button(doc, line, Role::Increment, "+");
    doc.append_role(line, "span", Role::Subtotal);
    labelled_button(doc, line, Role::Remove, "Remove");

    let footer = doc.append_element(section, "footer");
    doc.append_role(footer, "strong", Role::CartTotal);
    labelled_button(doc, footer, Role::EmptyCart, "Checkout");
}

fn details_section(doc: &MemoryDocument, main: NodeId) {
    let section = doc.append_element(main, "section");
    doc.set_attribute(&section, "id", "details");
    doc.append_role(section, "div", Role::Details);

    let content = doc.append_template(section, Role::DetailsTemplate);
    let article = doc.append_element(content, "article");
    doc.append_role(article, "img", Role::Image);
    doc.append_role(article, "h1", Role::Title);
    doc.append_role(article, "p", Role::Description);
    doc.append_role(article, "span", Role::Price);
    doc.append_role(article, "s", Role::DiscountPrice);
    labelled_button(doc, article, Role::FavoriteToggle, "Favorite");
    labelled_button(doc, article, Role::AddToCart, "Add to cart");
}

fn product_card(doc: &MemoryDocument, content: NodeId) {
    let card = doc.append_element(content, "li");
    doc.set_attribute(&card, "class", "product-card");
    let link = doc.append_role(card, "a", Role::Link);
    doc.append_role(link, "img", Role::Image);
    doc.append_role(card, "h3", Role::Title);
    doc.append_role(card, "p", Role::Description);
    doc.append_role(card, "span", Role::Price);
    doc.append_role(card, "s", Role::DiscountPrice);

    let actions = doc.append_element(card, "div");
    labelled_button(doc, actions, Role::FavoriteToggle, "Favorite");
    labelled_button(doc, actions, Role::AddToCart, "Add to cart");
}

fn labelled_button(doc: &MemoryDocument, parent: NodeId, role: Role, label: &str) -> NodeId {
    let button = doc.append_role(parent, "button", role);
    doc.set_text(&button, label);
    button
}
