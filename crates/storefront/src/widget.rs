//! The page controller.
//!
//! `Widget` owns the store, the catalog and the configuration. It renders
//! once at mount and then handles clicks one at a time: resolve the action,
//! mutate the store, persist, re-render every region. A click is handled
//! through `&mut self`, so a second one cannot start until the first returns.

use tracing::instrument;

use crate::actions::Action;
use crate::catalog::Catalog;
use crate::config::WidgetConfig;
use crate::dispatch::{ClickOutcome, find_action_target};
use crate::dom::RenderTarget;
use crate::render::{self, RenderContext, RenderReport};
use crate::storage::KeyValueStore;
use crate::store::Store;

/// Storefront widget bound to one storage medium.
#[derive(Debug)]
pub struct Widget<S> {
    store: Store<S>,
    catalog: Catalog,
    config: WidgetConfig,
}

impl<S: KeyValueStore> Widget<S> {
    /// Create a widget, restoring saved state from `storage`.
    pub fn new(config: WidgetConfig, catalog: Catalog, storage: S) -> Self {
        let store = Store::restore(storage, config.storage_key.clone());
        tracing::info!(
            products = catalog.len(),
            cart_items = store.state().cart_items.len(),
            favorites = store.state().favorites.len(),
            "Widget initialized"
        );

        Self {
            store,
            catalog,
            config,
        }
    }

    /// Initial render of every region present on the page.
    pub fn mount<T: RenderTarget>(&self, target: &T) -> RenderReport {
        self.render(target)
    }

    /// Re-derive every region from current state.
    pub fn render<T: RenderTarget>(&self, target: &T) -> RenderReport {
        let ctx = RenderContext {
            catalog: &self.catalog,
            state: self.store.state(),
            config: &self.config,
        };
        render::render_all(target, &ctx)
    }

    /// Handle a click on `clicked`.
    ///
    /// Clicks outside any action element are ignored. Once an action element
    /// is found, state is persisted and the page re-rendered whether or not
    /// its action could be decoded.
    #[instrument(skip_all)]
    pub fn handle_click<T: RenderTarget>(&mut self, target: &T, clicked: &T::Node) -> ClickOutcome {
        let Some(action_target) = find_action_target(target, clicked) else {
            return ClickOutcome::Ignored;
        };

        let outcome = match action_target.resolve() {
            Ok(action) => {
                tracing::debug!(action = action.name(), product_id = %action.product_id(), "Dispatching");
                action.apply(&mut self.store);
                ClickOutcome::Dispatched(action)
            }
            Err(e) => {
                tracing::warn!(
                    action = %action_target.name,
                    args = ?action_target.args,
                    error = %e,
                    "Ignoring unrecognized action"
                );
                ClickOutcome::Rejected(e)
            }
        };
        self.commit(target);

        outcome
    }

    /// Run `action` directly, then persist and re-render.
    pub fn dispatch<T: RenderTarget>(&mut self, target: &T, action: Action) {
        action.apply(&mut self.store);
        self.commit(target);
    }

    /// The state store.
    #[must_use]
    pub const fn store(&self) -> &Store<S> {
        &self.store
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    fn commit<T: RenderTarget>(&mut self, target: &T) {
        if let Err(e) = self.store.persist() {
            tracing::error!(key = %self.store.key(), error = %e, "Failed to persist state");
        }
        self.render(target);
    }
}
