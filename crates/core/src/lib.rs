//! Shopfront Core - Shared types library.
//!
//! This crate provides the types shared by every Shopfront component:
//! - `widget` - The storefront page controller (state, dispatch, rendering)
//! - `cli` - Headless driver for rendering pages and inspecting saved state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no DOM.
//! This keeps it lightweight enough to compile for `wasm32` alongside the
//! browser build of the widget.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, and the catalog `Product` record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
