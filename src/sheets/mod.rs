//! Stylesheet discovery and selection.
//!
//! [`StyleSheetRegistry`](registry::StyleSheetRegistry) models the
//! alternate-stylesheet mechanism: a page declares one preferred and any
//! number of alternate sheets by title, and exactly one of the titled
//! group is meant to be active at a time. The registry discovers the
//! titled set (natively or by link scan, per the capability probe) and
//! flips the `disabled` flags so selection stays mutually exclusive.
//!
//! # Architecture
//!
//! | Web platform | styleset (Rust) | Responsibility |
//! |--------------|-----------------|----------------|
//! | `document.styleSheets` walk | [`StyleSheetRegistry::list`](registry::StyleSheetRegistry::list) | Discovery |
//! | `StyleSheet.disabled` flips | [`StyleSheetRegistry::select`](registry::StyleSheetRegistry::select) | Mutually exclusive activation |
//! | engine repaint workaround | [`StyleSheetRegistry::force_style_recompute`](registry::StyleSheetRegistry::force_style_recompute) | Double toggle |

pub mod registry;
