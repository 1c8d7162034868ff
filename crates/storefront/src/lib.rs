//! Shopfront storefront widget.
//!
//! A page controller for static storefront pages: it keeps the shopper's cart
//! and favorites in durable key-value storage, renders product lists, the cart
//! panel and a product details view from `data-role` templates, and turns
//! clicks on `data-action` elements into state changes.
//!
//! # Architecture
//!
//! - [`store::Store`] owns [`state::AppState`] and persists it through a
//!   [`storage::KeyValueStore`]
//! - [`dispatch`] resolves a click to a typed [`actions::Action`]
//! - [`render`] re-derives every region through a [`dom::RenderTarget`]
//! - [`widget::Widget`] ties them together: click, mutate, persist, re-render
//!
//! The `browser` feature adds `web-sys` bindings for the real page and
//! `localStorage`; without it the widget runs against
//! [`dom::MemoryDocument`], which is what the CLI and tests use.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
#[cfg(feature = "browser")]
pub mod browser;
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod markup;
pub mod render;
pub mod state;
pub mod storage;
pub mod store;
pub mod widget;

pub use actions::{Action, ActionError};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, WidgetConfig};
pub use dispatch::ClickOutcome;
pub use error::{Result, WidgetError};
pub use render::RenderReport;
pub use state::{AppState, CartItem};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};
pub use store::Store;
pub use widget::Widget;
