//! Cart and favorites state with its pure transitions.
//!
//! `AppState` is the only persisted entity. Every mutation here is total: an
//! operation on an id that has no matching entry is a silent no-op.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopfront_core::{Product, ProductId};
use tracing::warn;

use crate::catalog::Catalog;

/// One product in the cart.
///
/// `count` is never below 1 while the item is in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub count: u32,
}

/// A cart item joined with its catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub count: u32,
}

impl CartLine<'_> {
    /// Unit price times count, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product
            .price
            .checked_mul(Decimal::from(self.count))
            .unwrap_or_else(|| {
                warn!(id = %self.product.id, count = self.count, "Cart line subtotal overflowed");
                Decimal::MAX
            })
    }
}

/// Persisted cart and favorites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub cart_items: Vec<CartItem>,
    pub favorites: Vec<ProductId>,
}

impl AppState {
    /// Add `id` to the favorites, or remove it if already there.
    pub fn toggle_favorite(&mut self, id: ProductId) {
        if let Some(position) = self.favorites.iter().position(|&f| f == id) {
            self.favorites.remove(position);
        } else {
            self.favorites.push(id);
        }
    }

    /// Put one more unit of `id` in the cart.
    pub fn add_to_cart(&mut self, id: ProductId) {
        match self.item_mut(id) {
            Some(item) => item.count = item.count.saturating_add(1),
            None => self.cart_items.push(CartItem { id, count: 1 }),
        }
    }

    /// Drop the cart item for `id` entirely.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart_items.retain(|item| item.id != id);
    }

    /// Raise the count of an existing cart item by one.
    pub fn increment_count(&mut self, id: ProductId) {
        if let Some(item) = self.item_mut(id) {
            item.count = item.count.saturating_add(1);
        }
    }

    /// Lower the count of an existing cart item by one, stopping at 1.
    pub fn decrement_count(&mut self, id: ProductId) {
        if let Some(item) = self.item_mut(id) {
            item.count = item.count.saturating_sub(1).max(1);
        }
    }

    /// Whether `id` is a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    /// Number of favorites.
    #[must_use]
    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    /// Total units across all cart items, resolvable or not.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.cart_items.iter().map(|item| u64::from(item.count)).sum()
    }

    /// Cart items that resolve against `catalog`, in cart order.
    #[must_use]
    pub fn cart_lines<'a>(&self, catalog: &'a Catalog) -> Vec<CartLine<'a>> {
        self.cart_items
            .iter()
            .filter_map(|item| {
                catalog.get(item.id).map(|product| CartLine {
                    product,
                    count: item.count,
                })
            })
            .collect()
    }

    /// Sum of price times count over resolvable cart items.
    ///
    /// Saturates at `Decimal::MAX` rather than overflowing.
    #[must_use]
    pub fn cart_total(&self, catalog: &Catalog) -> Decimal {
        self.cart_lines(catalog)
            .iter()
            .map(CartLine::subtotal)
            .fold(Decimal::ZERO, |total, subtotal| {
                total.checked_add(subtotal).unwrap_or(Decimal::MAX)
            })
    }

    /// Restore the invariants on state read from outside.
    ///
    /// Duplicate cart entries are merged, counts below 1 become 1, and
    /// repeated favorites keep their first position.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut cart_items: Vec<CartItem> = Vec::with_capacity(self.cart_items.len());
        for item in self.cart_items {
            match cart_items.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => existing.count = existing.count.saturating_add(item.count),
                None => cart_items.push(item),
            }
        }
        for item in &mut cart_items {
            item.count = item.count.max(1);
        }

        let mut favorites: Vec<ProductId> = Vec::with_capacity(self.favorites.len());
        for id in self.favorites {
            if !favorites.contains(&id) {
                favorites.push(id);
            }
        }

        Self {
            cart_items,
            favorites,
        }
    }

    fn item_mut(&mut self, id: ProductId) -> Option<&mut CartItem> {
        self.cart_items.iter_mut().find(|item| item.id == id)
    }
}
