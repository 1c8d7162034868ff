//! In-memory document.
//!
//! An arena-backed element tree implementing [`RenderTarget`]. It follows the
//! DOM rules the widget relies on: `<template>` content lives outside the main
//! tree, appending a fragment moves its children, text is held in text nodes.
//! Detached nodes stay in the arena; documents are short-lived.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::RenderTarget;
use crate::markup::{ROLE_ATTR, Role};

/// Handle to a node in a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element(String),
    Fragment,
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    value: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    template_content: Option<NodeId>,
}

impl NodeData {
    const fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            value: None,
            children: Vec::new(),
            parent: None,
            template_content: None,
        }
    }
}

const VOID_ELEMENTS: &[&str] = &["img", "input", "br", "hr", "meta", "link"];

/// A document held entirely in memory.
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: RefCell<Vec<NodeData>>,
    root: NodeId,
    location: RefCell<Option<String>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Create a document with an empty `<body>` root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![NodeData::new(NodeKind::Element("body".to_string()))]),
            root: NodeId(0),
            location: RefCell::new(None),
        }
    }

    /// The `<body>` element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Set the address reported by [`RenderTarget::location`].
    pub fn set_location(&self, address: impl Into<String>) {
        *self.location.borrow_mut() = Some(address.into());
    }

    /// Create a detached element.
    pub fn create_element(&self, tag: &str) -> NodeId {
        self.push(NodeData::new(NodeKind::Element(tag.to_string())))
    }

    /// Create an element and append it to `parent`.
    pub fn append_element(&self, parent: NodeId, tag: &str) -> NodeId {
        let node = self.create_element(tag);
        self.append(&parent, &node);
        node
    }

    /// Create an element carrying `role` and append it to `parent`.
    pub fn append_role(&self, parent: NodeId, tag: &str, role: Role) -> NodeId {
        let node = self.append_element(parent, tag);
        self.set_attribute(&node, ROLE_ATTR, role.as_str());
        node
    }

    /// Append a `<template>` carrying `role` and return its content fragment.
    pub fn append_template(&self, parent: NodeId, role: Role) -> NodeId {
        let template = self.append_role(parent, "template", role);
        let content = self.push(NodeData::new(NodeKind::Fragment));
        self.with_node_mut(template, |data| data.template_content = Some(content));
        content
    }

    /// Tag name of an element.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.with_node(node, |data| match &data.kind {
            NodeKind::Element(tag) => Some(tag.clone()),
            NodeKind::Fragment | NodeKind::Text(_) => None,
        })
        .flatten()
    }

    /// Child nodes, text nodes included.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.with_node(node, |data| data.children.clone())
            .unwrap_or_default()
    }

    /// Child elements only.
    #[must_use]
    pub fn child_elements(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .into_iter()
            .filter(|&child| self.tag(child).is_some())
            .collect()
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        collect_text(&nodes, node, &mut out);
        out
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.with_node(node, |data| data.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    #[must_use]
    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.with_node(node, |data| data.attributes.contains_key("disabled"))
            .unwrap_or(false)
    }

    /// Current value of a form control.
    #[must_use]
    pub fn value(&self, node: NodeId) -> Option<String> {
        self.with_node(node, |data| data.value.clone()).flatten()
    }

    /// Serialize `node` and its subtree as HTML.
    #[must_use]
    pub fn to_html(&self, node: NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        write_html(&nodes, node, &mut out);
        out
    }

    fn push(&self, data: NodeData) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(data);
        NodeId(nodes.len() - 1)
    }

    fn with_node<R>(&self, node: NodeId, f: impl FnOnce(&NodeData) -> R) -> Option<R> {
        self.nodes.borrow().get(node.0).map(f)
    }

    fn with_node_mut<R>(&self, node: NodeId, f: impl FnOnce(&mut NodeData) -> R) -> Option<R> {
        self.nodes.borrow_mut().get_mut(node.0).map(f)
    }

    fn deep_clone(nodes: &mut Vec<NodeData>, source: NodeId, parent: Option<NodeId>) -> Option<NodeId> {
        let mut copy = nodes.get(source.0)?.clone();
        let children = std::mem::take(&mut copy.children);
        let template_content = copy.template_content.take();
        copy.parent = parent;

        nodes.push(copy);
        let id = NodeId(nodes.len() - 1);

        let cloned_children: Vec<NodeId> = children
            .into_iter()
            .filter_map(|child| Self::deep_clone(nodes, child, Some(id)))
            .collect();
        let cloned_content =
            template_content.and_then(|content| Self::deep_clone(nodes, content, None));

        if let Some(data) = nodes.get_mut(id.0) {
            data.children = cloned_children;
            data.template_content = cloned_content;
        }
        Some(id)
    }
}

impl RenderTarget for MemoryDocument {
    type Node = NodeId;

    fn query_role(&self, scope: Option<&NodeId>, role: Role) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        let scope = scope.copied().unwrap_or(self.root);
        descendants(&nodes, scope)
            .into_iter()
            .find(|&id| has_role(&nodes, id, role))
    }

    fn instantiate(&self, template: &NodeId) -> Option<NodeId> {
        let content = self.with_node(*template, |data| data.template_content).flatten()?;
        let mut nodes = self.nodes.borrow_mut();
        Self::deep_clone(&mut nodes, content, None)
    }

    fn create_fragment(&self) -> NodeId {
        self.push(NodeData::new(NodeKind::Fragment))
    }

    fn clear(&self, node: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let children = nodes
            .get_mut(node.0)
            .map(|data| std::mem::take(&mut data.children))
            .unwrap_or_default();
        for child in children {
            if let Some(data) = nodes.get_mut(child.0) {
                data.parent = None;
            }
        }
    }

    fn append(&self, parent: &NodeId, child: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        let (parent, child) = (*parent, *child);
        if parent == child || nodes.get(parent.0).is_none() {
            return;
        }

        let moved = match nodes.get_mut(child.0) {
            Some(data) if matches!(data.kind, NodeKind::Fragment) => {
                std::mem::take(&mut data.children)
            }
            Some(data) => {
                if let Some(old_parent) = data.parent.take() {
                    if let Some(old) = nodes.get_mut(old_parent.0) {
                        old.children.retain(|&c| c != child);
                    }
                }
                vec![child]
            }
            None => return,
        };

        for &node in &moved {
            if let Some(data) = nodes.get_mut(node.0) {
                data.parent = Some(parent);
            }
        }
        if let Some(data) = nodes.get_mut(parent.0) {
            data.children.extend(moved);
        }
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.clear(node);
        let text_node = self.push(NodeData::new(NodeKind::Text(text.to_string())));
        self.append(node, &text_node);
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.with_node_mut(*node, |data| {
            if name == "class" {
                data.classes = value.split_whitespace().map(str::to_string).collect();
            } else {
                data.attributes.insert(name.to_string(), value.to_string());
            }
        });
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.with_node(*node, |data| {
            if name == "class" {
                (!data.classes.is_empty()).then(|| data.classes.join(" "))
            } else {
                data.attributes.get(name).cloned()
            }
        })
        .flatten()
    }

    fn set_class(&self, node: &NodeId, class: &str, enabled: bool) {
        self.with_node_mut(*node, |data| {
            let present = data.classes.iter().any(|c| c == class);
            if enabled && !present {
                data.classes.push(class.to_string());
            } else if !enabled && present {
                data.classes.retain(|c| c != class);
            }
        });
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        self.with_node_mut(*node, |data| {
            if disabled {
                data.attributes.insert("disabled".to_string(), String::new());
            } else {
                data.attributes.remove("disabled");
            }
        });
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.with_node_mut(*node, |data| data.value = Some(value.to_string()));
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.with_node(*node, |data| data.parent).flatten()
    }

    fn location(&self) -> Option<String> {
        self.location.borrow().clone()
    }
}

fn has_role(nodes: &[NodeData], id: NodeId, role: Role) -> bool {
    nodes
        .get(id.0)
        .and_then(|data| data.attributes.get(ROLE_ATTR))
        .is_some_and(|value| value == role.as_str())
}

/// Descendants of `scope` in pre-order, `scope` itself excluded.
fn descendants(nodes: &[NodeData], scope: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = nodes
        .get(scope.0)
        .map(|data| data.children.iter().rev().copied().collect())
        .unwrap_or_default();

    while let Some(id) = stack.pop() {
        out.push(id);
        if let Some(data) = nodes.get(id.0) {
            stack.extend(data.children.iter().rev().copied());
        }
    }
    out
}

fn collect_text(nodes: &[NodeData], id: NodeId, out: &mut String) {
    let Some(data) = nodes.get(id.0) else {
        return;
    };
    if let NodeKind::Text(text) = &data.kind {
        out.push_str(text);
    }
    for &child in &data.children {
        collect_text(nodes, child, out);
    }
}

fn write_html(nodes: &[NodeData], id: NodeId, out: &mut String) {
    let Some(data) = nodes.get(id.0) else {
        return;
    };

    match &data.kind {
        NodeKind::Text(text) => out.push_str(&escape(text)),
        NodeKind::Fragment => {
            for &child in &data.children {
                write_html(nodes, child, out);
            }
        }
        NodeKind::Element(tag) => {
            out.push('<');
            out.push_str(tag);
            if !data.classes.is_empty() {
                let _ = write!(out, " class=\"{}\"", escape(&data.classes.join(" ")));
            }
            for (name, value) in &data.attributes {
                if value.is_empty() && name == "disabled" {
                    let _ = write!(out, " {name}");
                } else {
                    let _ = write!(out, " {name}=\"{}\"", escape(value));
                }
            }
            if let Some(value) = &data.value {
                let _ = write!(out, " value=\"{}\"", escape(value));
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }
            if let Some(content) = data.template_content {
                write_html(nodes, content, out);
            }
            for &child in &data.children {
                write_html(nodes, child, out);
            }
            let _ = write!(out, "</{tag}>");
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_query_role_finds_first_in_document_order() {
        let doc = MemoryDocument::new();
        let outer = doc.append_element(doc.root(), "div");
        let first = doc.append_role(outer, "span", Role::Title);
        doc.append_role(doc.root(), "span", Role::Title);

        assert_eq!(doc.query_role(None, Role::Title), Some(first));
        assert_eq!(doc.query_role(Some(&outer), Role::Title), Some(first));
        assert_eq!(doc.query_role(Some(&outer), Role::Price), None);
    }

    #[test]
    fn test_query_role_skips_template_content() {
        let doc = MemoryDocument::new();
        let content = doc.append_template(doc.root(), Role::CatalogTemplate);
        doc.append_role(content, "h3", Role::Title);

        assert!(doc.query_role(None, Role::Title).is_none());
        assert!(doc.query_role(Some(&content), Role::Title).is_some());
    }

    #[test]
    fn test_instantiate_is_a_deep_copy() {
        let doc = MemoryDocument::new();
        let content = doc.append_template(doc.root(), Role::CatalogTemplate);
        let article = doc.append_element(content, "article");
        doc.append_role(article, "h3", Role::Title);
        let template = doc.query_role(None, Role::CatalogTemplate).unwrap();

        let copy = doc.instantiate(&template).unwrap();
        let title = doc.query_role(Some(&copy), Role::Title).unwrap();
        doc.set_text(&title, "Changed");

        let original = doc.query_role(Some(&content), Role::Title).unwrap();
        assert_ne!(original, title);
        assert_eq!(doc.text(original), "");
        assert_eq!(doc.text(copy), "Changed");
    }

    #[test]
    fn test_appending_fragment_moves_children() {
        let doc = MemoryDocument::new();
        let list = doc.append_element(doc.root(), "ul");
        let fragment = doc.create_fragment();
        let a = doc.append_element(fragment, "li");
        let b = doc.append_element(fragment, "li");

        doc.append(&list, &fragment);
        assert_eq!(doc.children(list), vec![a, b]);
        assert!(doc.children(fragment).is_empty());
        assert_eq!(doc.parent(&a), Some(list));
    }

    #[test]
    fn test_append_moves_attached_element() {
        let doc = MemoryDocument::new();
        let left = doc.append_element(doc.root(), "div");
        let right = doc.append_element(doc.root(), "div");
        let item = doc.append_element(left, "span");

        doc.append(&right, &item);
        assert!(doc.children(left).is_empty());
        assert_eq!(doc.children(right), vec![item]);
    }

    #[test]
    fn test_set_text_replaces_content() {
        let doc = MemoryDocument::new();
        let node = doc.append_element(doc.root(), "p");
        doc.append_element(node, "b");
        doc.set_text(&node, "one");
        doc.set_text(&node, "two");

        assert_eq!(doc.text(node), "two");
        assert!(doc.child_elements(node).is_empty());
    }

    #[test]
    fn test_classes_and_disabled() {
        let doc = MemoryDocument::new();
        let node = doc.append_element(doc.root(), "button");

        doc.set_class(&node, "active", true);
        doc.set_class(&node, "active", true);
        assert_eq!(doc.attribute(&node, "class").as_deref(), Some("active"));
        doc.set_class(&node, "active", false);
        assert!(!doc.has_class(node, "active"));

        doc.set_disabled(&node, true);
        assert!(doc.is_disabled(node));
        doc.set_disabled(&node, false);
        assert!(!doc.is_disabled(node));
    }

    #[test]
    fn test_to_html() {
        let doc = MemoryDocument::new();
        let button = doc.append_role(doc.root(), "button", Role::AddToCart);
        doc.set_attribute(&button, "data-args", "1");
        doc.set_disabled(&button, true);
        doc.set_text(&button, "Add <1>");
        let input = doc.append_element(doc.root(), "input");
        doc.set_value(&input, "2");

        assert_eq!(
            doc.to_html(doc.root()),
            r#"<body><button data-args="1" data-role="add-to-cart" disabled>Add &lt;1&gt;</button><input value="2"></body>"#
        );
    }

    #[test]
    fn test_location() {
        let doc = MemoryDocument::new();
        assert!(doc.location().is_none());
        doc.set_location("product.html?id=1");
        assert_eq!(doc.location().as_deref(), Some("product.html?id=1"));
    }
}
