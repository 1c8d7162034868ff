//! Render target abstraction.
//!
//! The renderer and dispatcher never touch a concrete DOM. They work through
//! [`RenderTarget`], which exposes the handful of capabilities they need:
//! find by role, clone a template, replace children, set text and attributes.
//!
//! Implementations:
//! - [`memory::MemoryDocument`] - in-process tree for tests and the CLI
//! - `crate::browser::BrowserDocument` - the real page (`browser` feature)

pub mod layout;
pub mod memory;

pub use memory::{MemoryDocument, NodeId};

use url::Url;

use crate::markup::Role;

/// Minimal document capabilities the widget renders through.
///
/// Every operation is infallible from the caller's point of view: a backend
/// that hits a host error logs it and carries on.
pub trait RenderTarget {
    /// Handle to an element or fragment.
    type Node: Clone;

    /// First element with `role` inside `scope`, or anywhere on the page when
    /// `scope` is `None`. Template contents are not searched.
    fn query_role(&self, scope: Option<&Self::Node>, role: Role) -> Option<Self::Node>;

    /// Deep copy of a template element's content, as a detached fragment.
    fn instantiate(&self, template: &Self::Node) -> Option<Self::Node>;

    /// New empty detached fragment.
    fn create_fragment(&self) -> Self::Node;

    /// Remove all children and text.
    fn clear(&self, node: &Self::Node);

    /// Append `child` to `parent`. Appending a fragment moves its children.
    fn append(&self, parent: &Self::Node, child: &Self::Node);

    /// Replace all content with `text`.
    fn set_text(&self, node: &Self::Node, text: &str);

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Add or remove a class.
    fn set_class(&self, node: &Self::Node, class: &str, enabled: bool);

    fn set_disabled(&self, node: &Self::Node, disabled: bool);

    /// Set the current value of a form control.
    fn set_value(&self, node: &Self::Node, value: &str);

    /// Parent element, if attached.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Address of the current page.
    fn location(&self) -> Option<String>;

    /// Swap the contents of `container` for `fragment` in one step.
    fn replace_children(&self, container: &Self::Node, fragment: &Self::Node) {
        self.clear(container);
        self.append(container, fragment);
    }
}

/// Value of query parameter `name` in `address`.
///
/// Relative addresses are resolved against a placeholder origin so that
/// `/product-details.html?productId=5` parses the same as an absolute URL.
#[must_use]
pub fn query_param(address: &str, name: &str) -> Option<String> {
    let url = Url::parse(address).or_else(|_| {
        Url::parse("http://localhost/").and_then(|base| base.join(address))
    });
    let url = url.ok()?;

    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
