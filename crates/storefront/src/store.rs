//! Persistent state store.
//!
//! `Store` owns the live [`AppState`] together with the storage medium it is
//! saved to. It is an ordinary value: construct as many as needed, each with
//! its own storage.

use shopfront_core::ProductId;

use crate::state::AppState;
use crate::storage::{KeyValueStore, StorageError};

/// Cart and favorites state bound to a storage key.
#[derive(Debug)]
pub struct Store<S> {
    state: AppState,
    storage: S,
    key: String,
}

impl<S: KeyValueStore> Store<S> {
    /// Restore state saved under `key`, or start empty.
    ///
    /// Any read or parse failure falls back to the empty state.
    pub fn restore(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = load_state(&storage, &key);
        Self {
            state,
            storage,
            key,
        }
    }

    /// Save the current state under the store's key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the state cannot be encoded or written.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.state)?;
        self.storage.set_item(&self.key, &json)?;
        tracing::debug!(
            key = %self.key,
            cart_items = self.state.cart_items.len(),
            favorites = self.state.favorites.len(),
            "State persisted"
        );
        Ok(())
    }

    pub fn toggle_favorite(&mut self, id: ProductId) {
        self.state.toggle_favorite(id);
    }

    pub fn add_to_cart(&mut self, id: ProductId) {
        self.state.add_to_cart(id);
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.state.remove_from_cart(id);
    }

    pub fn increment_count(&mut self, id: ProductId) {
        self.state.increment_count(id);
    }

    pub fn decrement_count(&mut self, id: ProductId) {
        self.state.decrement_count(id);
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Storage key the state is saved under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage medium.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

fn load_state(storage: &impl KeyValueStore, key: &str) -> AppState {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "No saved state, starting empty");
            return AppState::default();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read saved state, starting empty");
            return AppState::default();
        }
    };

    match serde_json::from_str::<AppState>(&raw) {
        Ok(state) => state.normalized(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Saved state is corrupt, starting empty");
            AppState::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::state::CartItem;
    use crate::storage::MemoryStorage;

    const KEY: &str = "test-state";

    struct FailingStorage;

    impl KeyValueStore for FailingStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".to_string()))
        }
    }

    #[test]
    fn test_restore_missing_key_is_empty() {
        let store = Store::restore(MemoryStorage::new(), KEY);
        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn test_restore_corrupt_payload_is_empty() {
        for payload in ["{oops", "null", "[]", r#"{"cartItems": "many"}"#, ""] {
            let store = Store::restore(MemoryStorage::with_item(KEY, payload), KEY);
            assert_eq!(store.state(), &AppState::default(), "payload: {payload}");
        }
    }

    #[test]
    fn test_restore_read_failure_is_empty() {
        let store = Store::restore(FailingStorage, KEY);
        assert_eq!(store.state(), &AppState::default());
    }

    #[test]
    fn test_restore_saved_state() {
        let storage = MemoryStorage::with_item(
            KEY,
            r#"{"cartItems":[{"id":1,"count":3}],"favorites":[2,5]}"#,
        );
        let store = Store::restore(storage, KEY);

        assert_eq!(
            store.state().cart_items,
            vec![CartItem {
                id: ProductId::new(1),
                count: 3
            }]
        );
        assert_eq!(
            store.state().favorites,
            vec![ProductId::new(2), ProductId::new(5)]
        );
    }

    #[test]
    fn test_persist_then_restore_in_new_store() {
        let mut store = Store::restore(MemoryStorage::new(), KEY);
        store.add_to_cart(ProductId::new(1));
        store.increment_count(ProductId::new(1));
        store.toggle_favorite(ProductId::new(4));
        store.persist().unwrap();

        let storage = store.storage().clone();
        let reopened = Store::restore(storage, KEY);
        assert_eq!(reopened.state(), store.state());
    }

    #[test]
    fn test_persist_reports_storage_failure() {
        let mut store = Store::restore(FailingStorage, KEY);
        assert!(matches!(
            store.persist(),
            Err(StorageError::Unavailable(_))
        ));
    }

    #[test]
    fn test_stores_are_independent() {
        let mut first = Store::restore(MemoryStorage::new(), KEY);
        let second = Store::restore(MemoryStorage::new(), KEY);

        first.add_to_cart(ProductId::new(1));
        assert_eq!(first.state().cart_items.len(), 1);
        assert!(second.state().cart_items.is_empty());
    }
}
