//! [`RenderTarget`] over the live page.

use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentFragment, Element, HtmlInputElement, HtmlTemplateElement, Node};

use crate::dom::RenderTarget;
use crate::markup::Role;

/// The browser document, addressed through `web_sys::Node` handles.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }
}

fn log_js_error(operation: &str, error: &wasm_bindgen::JsValue) {
    tracing::warn!(operation, error = ?error, "DOM operation failed");
}

impl RenderTarget for BrowserDocument {
    type Node = Node;

    fn query_role(&self, scope: Option<&Node>, role: Role) -> Option<Node> {
        let selector = role.selector();
        let found = match scope {
            None => self.document.query_selector(&selector),
            Some(node) => {
                if let Some(element) = node.dyn_ref::<Element>() {
                    element.query_selector(&selector)
                } else if let Some(fragment) = node.dyn_ref::<DocumentFragment>() {
                    fragment.query_selector(&selector)
                } else if let Some(document) = node.dyn_ref::<Document>() {
                    document.query_selector(&selector)
                } else {
                    Ok(None)
                }
            }
        };

        match found {
            Ok(element) => element.map(Into::into),
            Err(e) => {
                log_js_error("query_selector", &e);
                None
            }
        }
    }

    fn instantiate(&self, template: &Node) -> Option<Node> {
        let template = template.dyn_ref::<HtmlTemplateElement>()?;
        match template.content().clone_node_with_deep(true) {
            Ok(copy) => Some(copy),
            Err(e) => {
                log_js_error("clone_node", &e);
                None
            }
        }
    }

    fn create_fragment(&self) -> Node {
        self.document.create_document_fragment().into()
    }

    fn clear(&self, node: &Node) {
        node.set_text_content(None);
    }

    fn append(&self, parent: &Node, child: &Node) {
        if let Err(e) = parent.append_child(child) {
            log_js_error("append_child", &e);
        }
    }

    fn set_text(&self, node: &Node, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) {
        if let Some(element) = node.dyn_ref::<Element>()
            && let Err(e) = element.set_attribute(name, value)
        {
            log_js_error("set_attribute", &e);
        }
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        node.dyn_ref::<Element>()?.get_attribute(name)
    }

    fn set_class(&self, node: &Node, class: &str, enabled: bool) {
        if let Some(element) = node.dyn_ref::<Element>()
            && let Err(e) = element.class_list().toggle_with_force(class, enabled)
        {
            log_js_error("class_list.toggle", &e);
        }
    }

    fn set_disabled(&self, node: &Node, disabled: bool) {
        if let Some(element) = node.dyn_ref::<Element>()
            && let Err(e) = element.toggle_attribute_with_force("disabled", disabled)
        {
            log_js_error("toggle_attribute", &e);
        }
    }

    fn set_value(&self, node: &Node, value: &str) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else {
            self.set_attribute(node, "value", value);
        }
    }

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }

    fn location(&self) -> Option<String> {
        self.document.location()?.href().ok()
    }
}
