//! Browser bindings (`browser` feature).
//!
//! Wires the widget to the live page: [`BrowserDocument`] renders into the
//! DOM, [`LocalStorage`] persists state, and [`start`] mounts the widget and
//! installs a single delegated click listener on the document.

mod document;
mod storage;

pub use document::BrowserDocument;
pub use storage::LocalStorage;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, Node};

use crate::catalog::Catalog;
use crate::config::WidgetConfig;
use crate::error::{Result, WidgetError};
use crate::storage::{KeyValueStore, MemoryStorage};
use crate::widget::Widget;

type PageWidget = Widget<Box<dyn KeyValueStore>>;

/// Mount the widget on the current page.
///
/// Renders every region present, then handles clicks for the lifetime of the
/// page. Falls back to in-memory state if `localStorage` is unavailable.
///
/// # Errors
///
/// Returns `WidgetError` if the catalog is invalid or there is no document.
pub fn start(config: WidgetConfig, catalog_json: &str) -> Result<()> {
    let catalog = Catalog::from_json_str(catalog_json)?;
    let document = BrowserDocument::current()
        .ok_or_else(|| WidgetError::Host("no document".to_string()))?;

    let storage: Box<dyn KeyValueStore> = match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            tracing::warn!(error = %e, "localStorage unavailable, state will not survive reload");
            Box::new(MemoryStorage::new())
        }
    };

    let widget: Rc<RefCell<PageWidget>> = Rc::new(RefCell::new(Widget::new(config, catalog, storage)));
    let report = widget.borrow().mount(&document);
    tracing::info!(?report, "Widget mounted");

    install_click_listener(document, widget)
}

fn install_click_listener(document: BrowserDocument, widget: Rc<RefCell<PageWidget>>) -> Result<()> {
    let target = document.clone();
    let on_click: Closure<dyn FnMut(Event)> = Closure::new(move |event: Event| {
        let Some(clicked) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        // A click raised while a dispatch is rendering cannot borrow the widget
        let Ok(mut widget) = widget.try_borrow_mut() else {
            tracing::warn!("Click arrived during dispatch, ignoring");
            return;
        };
        let outcome = widget.handle_click(&target, &clicked);
        tracing::trace!(?outcome, "Click handled");
    });

    document
        .document()
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| WidgetError::Host(format!("failed to add click listener: {e:?}")))?;

    // The listener lives as long as the page
    on_click.forget();
    Ok(())
}
