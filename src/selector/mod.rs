//! Lifecycle selection: persist on teardown, restore on ready.
//!
//! [`StyleSheetSelector`](switcher::StyleSheetSelector) composes the
//! stylesheet registry and the cookie store into the two lifecycle hooks
//! an embedder wires to its page events, configured by
//! [`SelectorConfig`](config::SelectorConfig).
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
//! selector.on_ready();
//! selector.registry().select("dark");
//! selector.on_teardown();
//! assert_eq!(selector.store().get("stylesheet"), "dark");
//! ```

pub mod config;
pub mod switcher;
