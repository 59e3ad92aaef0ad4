//! # styleset
//!
//! A browser-inspired alternate-stylesheet selection library for Rust.
//!
//! `styleset` models the client-side machinery behind "choose a theme for
//! this site" links: it discovers a page's titled stylesheets and keeps
//! exactly one of them active, persisting the visitor's choice in the
//! page's cookie jar so it survives navigation without server-side state.
//!
//! ## Features
//!
//! - **Discovery**: native stylesheet list or memoized link scan, chosen
//!   by capability probe
//! - **Selection**: mutually exclusive activation by title, with the
//!   legacy-engine repaint workaround behind a named hook
//! - **Persistence**: Set-Cookie-style codec with scope and expiry,
//!   exact-name jar lookup
//! - **Lifecycle**: `on_ready` restore and `on_teardown` persist hooks
//!   for the embedder to wire to page events
//! - **Headless**: the page sits behind a [`Document`](dom::Document)
//!   trait, with an in-memory implementation for tests and embedders
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use styleset::base::capabilities::PageCapabilities;
//! use styleset::dom::memory::MemoryDocument;
//! use styleset::selector::config::SelectorConfig;
//! use styleset::selector::switcher::StyleSheetSelector;
//!
//! let document = Arc::new(MemoryDocument::new());
//! document.add_link("stylesheet", "default", false);
//! document.add_link("alternate stylesheet", "dark", true);
//!
//! let selector = StyleSheetSelector::new(
//!     document,
//!     &PageCapabilities::default(),
//!     SelectorConfig::default(),
//! );
//!
//! // Page ready: restore whatever the visitor chose last time.
//! selector.on_ready();
//!
//! // The visitor picks a theme.
//! selector.registry().select("dark");
//!
//! // Page teardown: persist the choice for the next visit.
//! selector.on_teardown();
//! assert_eq!(selector.store().get("stylesheet"), "dark");
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core types, error definitions, and capability probes
//! - [`dom`] - The consumed document surface and stylesheet handles
//! - [`sheets`] - Stylesheet discovery and mutually exclusive selection
//! - [`cookies`] - Cookie records, wire codec, and the document store
//! - [`selector`] - Configuration and the lifecycle hooks
//!
//! ## Degradation
//!
//! The runtime surface never raises: unknown titles fall back to the
//! page's base styles and absent cookies read as empty; with cookies
//! disabled the selector stands down entirely. The one fallible surface
//! is configuration validation.

pub mod base;
pub mod cookies;
pub mod dom;
pub mod selector;
pub mod sheets;
