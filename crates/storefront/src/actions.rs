//! Click actions and their decoding from markup attributes.
//!
//! An action element names one of a fixed set of actions in `data-action`
//! and carries its argument as JSON in `data-args`: either a bare product id
//! (`5`) or an object with an `id` field (`{"id": 5}`). Decoding happens once,
//! in [`Action::resolve`], so the rest of the widget only sees typed values.

use serde::Deserialize;
use shopfront_core::ProductId;
use thiserror::Error;

use crate::storage::KeyValueStore;
use crate::store::Store;

pub const TOGGLE_FAVORITE: &str = "toggleFavorite";
pub const ADD_TO_CART: &str = "addToCart";
pub const REMOVE_FROM_CART: &str = "removeFromCart";
pub const INCREMENT_COUNT: &str = "incrementCount";
pub const DECREMENT_COUNT: &str = "decrementCount";

/// Errors decoding an action from markup.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Action {0} requires a product id argument")]
    MissingArgument(&'static str),

    #[error("Invalid argument for action {action}: {source}")]
    InvalidArgument {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A decoded, strongly typed click action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleFavorite(ProductId),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    IncrementCount(ProductId),
    DecrementCount(ProductId),
}

/// The action named by `data-action`, before its argument is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionKind {
    ToggleFavorite,
    AddToCart,
    RemoveFromCart,
    IncrementCount,
    DecrementCount,
}

impl ActionKind {
    fn parse(name: &str) -> Result<Self, ActionError> {
        match name {
            TOGGLE_FAVORITE => Ok(Self::ToggleFavorite),
            ADD_TO_CART => Ok(Self::AddToCart),
            REMOVE_FROM_CART => Ok(Self::RemoveFromCart),
            INCREMENT_COUNT => Ok(Self::IncrementCount),
            DECREMENT_COUNT => Ok(Self::DecrementCount),
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::ToggleFavorite => TOGGLE_FAVORITE,
            Self::AddToCart => ADD_TO_CART,
            Self::RemoveFromCart => REMOVE_FROM_CART,
            Self::IncrementCount => INCREMENT_COUNT,
            Self::DecrementCount => DECREMENT_COUNT,
        }
    }

    const fn with(self, id: ProductId) -> Action {
        match self {
            Self::ToggleFavorite => Action::ToggleFavorite(id),
            Self::AddToCart => Action::AddToCart(id),
            Self::RemoveFromCart => Action::RemoveFromCart(id),
            Self::IncrementCount => Action::IncrementCount(id),
            Self::DecrementCount => Action::DecrementCount(id),
        }
    }
}

/// Accepted shapes of the `data-args` payload.
///
/// Only the id is read from the object form; other fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ActionArgument {
    Id(ProductId),
    Target { id: ProductId },
}

impl ActionArgument {
    const fn id(&self) -> ProductId {
        match self {
            Self::Id(id) | Self::Target { id } => *id,
        }
    }
}

impl Action {
    /// Decode an action from its name and optional raw JSON argument.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` if the name is not one of the five actions, or
    /// the argument is absent, `null`, or not a product id payload.
    pub fn resolve(name: &str, raw_args: Option<&str>) -> Result<Self, ActionError> {
        let kind = ActionKind::parse(name)?;
        let Some(argument) = decode_argument(kind.name(), raw_args)? else {
            return Err(ActionError::MissingArgument(kind.name()));
        };
        Ok(kind.with(argument.id()))
    }

    const fn kind(&self) -> ActionKind {
        match self {
            Self::ToggleFavorite(_) => ActionKind::ToggleFavorite,
            Self::AddToCart(_) => ActionKind::AddToCart,
            Self::RemoveFromCart(_) => ActionKind::RemoveFromCart,
            Self::IncrementCount(_) => ActionKind::IncrementCount,
            Self::DecrementCount(_) => ActionKind::DecrementCount,
        }
    }

    /// Value of `data-action` for this action.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Value of `data-args` for this action: the bare product id.
    #[must_use]
    pub fn args(&self) -> String {
        self.product_id().to_string()
    }

    /// Product the action targets.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        match self {
            Self::ToggleFavorite(id)
            | Self::AddToCart(id)
            | Self::RemoveFromCart(id)
            | Self::IncrementCount(id)
            | Self::DecrementCount(id) => *id,
        }
    }

    /// Run the matching store operation.
    pub fn apply<S: KeyValueStore>(&self, store: &mut Store<S>) {
        match *self {
            Self::ToggleFavorite(id) => store.toggle_favorite(id),
            Self::AddToCart(id) => store.add_to_cart(id),
            Self::RemoveFromCart(id) => store.remove_from_cart(id),
            Self::IncrementCount(id) => store.increment_count(id),
            Self::DecrementCount(id) => store.decrement_count(id),
        }
    }
}

fn decode_argument(
    action: &'static str,
    raw_args: Option<&str>,
) -> Result<Option<ActionArgument>, ActionError> {
    let Some(raw) = raw_args.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    serde_json::from_str::<Option<ActionArgument>>(raw)
        .map_err(|source| ActionError::InvalidArgument { action, source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn id(n: i32) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_resolve_bare_id_actions() {
        assert_eq!(
            Action::resolve("toggleFavorite", Some("5")).unwrap(),
            Action::ToggleFavorite(id(5))
        );
        assert_eq!(
            Action::resolve("addToCart", Some("1")).unwrap(),
            Action::AddToCart(id(1))
        );
        assert_eq!(
            Action::resolve("removeFromCart", Some(" 2 ")).unwrap(),
            Action::RemoveFromCart(id(2))
        );
    }

    #[test]
    fn test_resolve_count_actions() {
        assert_eq!(
            Action::resolve("incrementCount", Some("3")).unwrap(),
            Action::IncrementCount(id(3))
        );
        assert_eq!(
            Action::resolve("decrementCount", Some("3")).unwrap(),
            Action::DecrementCount(id(3))
        );
    }

    #[test]
    fn test_resolve_object_reads_only_id() {
        assert_eq!(
            Action::resolve("decrementCount", Some(r#"{"id": 3}"#)).unwrap(),
            Action::DecrementCount(id(3))
        );
        // A stray amount does not change the step
        assert_eq!(
            Action::resolve("incrementCount", Some(r#"{"id": 4, "amount": 3}"#)).unwrap(),
            Action::IncrementCount(id(4))
        );
        assert_eq!(
            Action::resolve("addToCart", Some(r#"{"id": 4}"#)).unwrap(),
            Action::AddToCart(id(4))
        );
    }

    #[test]
    fn test_resolve_unknown_action() {
        let err = Action::resolve("checkout", Some("1")).unwrap_err();
        assert!(matches!(err, ActionError::UnknownAction(ref name) if name == "checkout"));
        assert_eq!(err.to_string(), "Unknown action: checkout");
    }

    #[test]
    fn test_resolve_missing_argument() {
        for raw in [None, Some(""), Some("null")] {
            assert!(matches!(
                Action::resolve("addToCart", raw),
                Err(ActionError::MissingArgument("addToCart"))
            ));
        }
    }

    #[test]
    fn test_resolve_invalid_argument() {
        for raw in ["\"five\"", "{\"amount\": 2}", "true", "{broken"] {
            assert!(matches!(
                Action::resolve("toggleFavorite", Some(raw)),
                Err(ActionError::InvalidArgument {
                    action: "toggleFavorite",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_attribute_values_decode_back() {
        let actions = [
            Action::ToggleFavorite(id(1)),
            Action::AddToCart(id(2)),
            Action::RemoveFromCart(id(3)),
            Action::IncrementCount(id(4)),
            Action::DecrementCount(id(5)),
        ];

        for action in actions {
            let args = action.args();
            assert_eq!(Action::resolve(action.name(), Some(args.as_str())).unwrap(), action);
        }
    }

    #[test]
    fn test_args_are_bare_ids() {
        assert_eq!(Action::IncrementCount(id(7)).args(), "7");
        assert_eq!(Action::DecrementCount(id(7)).args(), "7");
        assert_eq!(Action::AddToCart(id(7)).args(), "7");
    }

    #[test]
    fn test_apply_routes_to_store() {
        let mut store = Store::restore(MemoryStorage::new(), "k");

        Action::AddToCart(id(1)).apply(&mut store);
        Action::IncrementCount(id(1)).apply(&mut store);
        Action::IncrementCount(id(1)).apply(&mut store);
        Action::ToggleFavorite(id(1)).apply(&mut store);
        assert_eq!(store.state().cart_items[0].count, 3);
        assert!(store.state().is_favorite(id(1)));

        Action::DecrementCount(id(1)).apply(&mut store);
        Action::DecrementCount(id(1)).apply(&mut store);
        Action::DecrementCount(id(1)).apply(&mut store);
        assert_eq!(store.state().cart_items[0].count, 1);

        Action::RemoveFromCart(id(1)).apply(&mut store);
        assert!(store.state().cart_items.is_empty());
    }
}
