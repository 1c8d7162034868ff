//! Click dispatch: from a click target to a decoded action.
//!
//! Clicks land on whatever element is under the pointer, which is often an
//! icon or label nested inside the actual button. Resolution therefore walks
//! up from the target to the nearest element carrying `data-action`.

use crate::actions::{Action, ActionError};
use crate::dom::RenderTarget;
use crate::markup::{ACTION_ATTR, ARGS_ATTR};

/// The action-bearing element found for a click, with its raw attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTarget<N> {
    pub node: N,
    pub name: String,
    pub args: Option<String>,
}

impl<N> ActionTarget<N> {
    /// Decode the raw attributes into an [`Action`].
    ///
    /// # Errors
    ///
    /// Returns `ActionError` for an unknown name or undecodable argument.
    pub fn resolve(&self) -> Result<Action, ActionError> {
        Action::resolve(&self.name, self.args.as_deref())
    }
}

/// What a click led to.
#[derive(Debug)]
pub enum ClickOutcome {
    /// No action element between the target and the root.
    Ignored,
    /// The action ran; state was persisted and regions re-rendered.
    Dispatched(Action),
    /// An action element was found but its action could not be decoded. State
    /// was still persisted and regions re-rendered.
    Rejected(ActionError),
}

/// Nearest element at or above `clicked` carrying an action name.
pub fn find_action_target<T: RenderTarget>(
    target: &T,
    clicked: &T::Node,
) -> Option<ActionTarget<T::Node>> {
    let mut current = Some(clicked.clone());
    while let Some(node) = current {
        if let Some(name) = target.attribute(&node, ACTION_ATTR) {
            let args = target.attribute(&node, ARGS_ATTR);
            return Some(ActionTarget { node, name, args });
        }
        current = target.parent(&node);
    }
    None
}
