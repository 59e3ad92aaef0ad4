//! Document surface and stylesheet handles.
//!
//! The selection machinery never reaches into a host page directly; every
//! interaction goes through the [`Document`] trait, which models the few
//! hooks a stylesheet switcher actually needs. [`MemoryDocument`] is the
//! in-process implementation used by tests and demos; embedders backing a
//! real page implement [`Document`] themselves.
//!
//! # Architecture
//!
//! The trait mirrors the CSSOM surface it abstracts:
//!
//! | Web API | styleset (Rust) | Responsibility |
//! |---------|-----------------|----------------|
//! | `document.styleSheets` | [`Document::style_sheet_list`] | Native ordered stylesheet list |
//! | `getElementsByTagName("link")` | [`Document::link_elements`] | Link-scan fallback source |
//! | `document.cookie` getter | [`Document::cookie`] | Serialized live cookie view |
//! | `document.cookie` setter | [`Document::write_cookie`] | One cookie write per call |
//! | `StyleSheet` / `HTMLLinkElement` | [`StyleSheetHandle`] | rel/title/disabled triple |
//!
//! # CSSOM References
//!
//! - Document stylesheet collections: <https://drafts.csswg.org/cssom/#extensions-to-the-document-interface>
//! - The `disabled` attribute: <https://drafts.csswg.org/cssom/#the-stylesheet-interface>
//! - Alternative style sheet sets: <https://drafts.csswg.org/cssom/#css-style-sheet-collections>
//!
//! [`MemoryDocument`]: memory::MemoryDocument

pub mod memory;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A handle to one stylesheet as the document sees it: the `rel` and
/// `title` attributes of the owning link element plus the live `disabled`
/// flag.
///
/// Handles are cheap to clone and every clone shares the same underlying
/// sheet, so flipping `disabled` through one handle is visible through all
/// the others and through the owning [`Document`].
#[derive(Clone)]
pub struct StyleSheetHandle {
    inner: Arc<SheetInner>,
}

struct SheetInner {
    rel: String,
    title: String,
    disabled: AtomicBool,
}

impl StyleSheetHandle {
    /// Create a handle with the given attributes and initial disabled state.
    pub fn new(rel: impl Into<String>, title: impl Into<String>, disabled: bool) -> Self {
        Self {
            inner: Arc::new(SheetInner {
                rel: rel.into(),
                title: title.into(),
                disabled: AtomicBool::new(disabled),
            }),
        }
    }

    /// The `rel` attribute, verbatim.
    pub fn rel(&self) -> &str {
        &self.inner.rel
    }

    /// The `title` attribute, verbatim. Empty when the attribute is absent.
    pub fn title(&self) -> &str {
        &self.inner.title
    }

    /// Whether the sheet is currently disabled.
    pub fn is_disabled(&self) -> bool {
        self.inner.disabled.load(Ordering::SeqCst)
    }

    /// Enable or disable the sheet, immediately and for every clone.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.disabled.store(disabled, Ordering::SeqCst);
    }
}

impl fmt::Debug for StyleSheetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSheetHandle")
            .field("rel", &self.inner.rel)
            .field("title", &self.inner.title)
            .field("disabled", &self.is_disabled())
            .finish()
    }
}

/// The document surface the selection machinery runs against.
///
/// Implementations hand out [`StyleSheetHandle`]s that stay live: enabling
/// or disabling a sheet through a handle must be observable through the
/// document afterwards, the way toggling `StyleSheet.disabled` is.
pub trait Document: Send + Sync {
    /// The native ordered stylesheet list (`document.styleSheets`), or
    /// `None` when the host does not expose one.
    ///
    /// The list carries every sheet the host considers part of the
    /// document, persistent and untitled sheets included. Callers that
    /// want only the titled, switchable sheets filter it themselves.
    fn style_sheet_list(&self) -> Option<Vec<StyleSheetHandle>>;

    /// Every link element in document order, whatever its `rel`.
    ///
    /// This is the raw material for the link-scan fallback; callers filter
    /// for stylesheet links themselves.
    fn link_elements(&self) -> Vec<StyleSheetHandle>;

    /// The serialized non-expired cookies visible to the page, in
    /// `name=value; name2=value2` form. Empty when there are none.
    fn cookie(&self) -> String;

    /// Store one serialized cookie, `Set-Cookie` style.
    ///
    /// Writes that do not parse are dropped silently, matching the browser
    /// setter. A write whose expiry is already in the past deletes the
    /// named cookie.
    fn write_cookie(&self, serialized: &str);
}
