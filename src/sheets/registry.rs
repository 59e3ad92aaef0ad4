//! Stylesheet discovery and selection.

use std::sync::{Arc, OnceLock};

use crate::base::capabilities::PageCapabilities;
use crate::dom::{Document, StyleSheetHandle};

/// How the registry discovers the page's stylesheets. Chosen once at
/// construction from the capability probe, never re-checked inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStrategy {
    /// Read the document's native stylesheet list on every call. The list
    /// is live, so no caching is involved.
    NativeList,
    /// Scan the link elements once, keep stylesheet relations with a
    /// non-empty title, and memoize the result for the page's life.
    LinkScan,
}

/// Discovers the page's alternate stylesheets and toggles which one is
/// active.
///
/// Only titled sheets participate in selection. The native list may also
/// carry untitled persistent sheets; those are skipped everywhere so a
/// page never loses its base styles.
///
/// Under [`DiscoveryStrategy::LinkScan`] the discovered list is computed
/// once and reused, so stylesheets injected after the first query are not
/// seen. That staleness is accepted; pages are assumed to declare their
/// stylesheet set up front.
pub struct StyleSheetRegistry {
    document: Arc<dyn Document>,
    strategy: DiscoveryStrategy,
    needs_recompute_toggle: bool,
    scanned: OnceLock<Vec<StyleSheetHandle>>,
}

impl StyleSheetRegistry {
    /// Create a registry over the given document.
    ///
    /// The native list is preferred when the probe reports one and the
    /// environment is not flagged for the recompute quirk; the flagged
    /// engine misreports its native list, so it always gets the link scan.
    pub fn new(document: Arc<dyn Document>, capabilities: &PageCapabilities) -> Self {
        let strategy = if capabilities.has_style_sheet_list && !capabilities.needs_recompute_toggle
        {
            DiscoveryStrategy::NativeList
        } else {
            DiscoveryStrategy::LinkScan
        };
        tracing::debug!(strategy = ?strategy, "stylesheet registry constructed");
        Self {
            document,
            strategy,
            needs_recompute_toggle: capabilities.needs_recompute_toggle,
            scanned: OnceLock::new(),
        }
    }

    /// The discovery strategy chosen at construction.
    pub fn strategy(&self) -> DiscoveryStrategy {
        self.strategy
    }

    /// The page's discovered stylesheets.
    ///
    /// Under the native strategy this is the live list as of this call,
    /// untitled sheets included; should the native list be unavailable at
    /// call time, the memoized link scan stands in. Under the fallback
    /// strategy it is the memoized scan. Zero stylesheets is not an
    /// error, just an empty list.
    pub fn list(&self) -> Vec<StyleSheetHandle> {
        match self.strategy {
            DiscoveryStrategy::NativeList => match self.document.style_sheet_list() {
                Some(sheets) => sheets,
                None => self.scan_links().clone(),
            },
            DiscoveryStrategy::LinkScan => self.scan_links().clone(),
        }
    }

    fn scan_links(&self) -> &Vec<StyleSheetHandle> {
        self.scanned.get_or_init(|| {
            let sheets: Vec<StyleSheetHandle> = self
                .document
                .link_elements()
                .into_iter()
                .filter(|link| {
                    link.rel().to_ascii_lowercase().contains("stylesheet")
                        && !link.title().is_empty()
                })
                .collect();
            tracing::debug!(count = sheets.len(), "link scan discovered stylesheets");
            sheets
        })
    }

    /// The title of the active stylesheet, or the empty string when no
    /// titled sheet is enabled.
    ///
    /// Scans the discovered list from the end toward the start, so when
    /// several titled sheets are simultaneously enabled (possible before
    /// the first [`select`](Self::select)) the last-declared one wins.
    pub fn active_title(&self) -> String {
        self.list()
            .iter()
            .rev()
            .find(|sheet| !sheet.title().is_empty() && !sheet.is_disabled())
            .map(|sheet| sheet.title().to_string())
            .unwrap_or_default()
    }

    /// Enable exactly the titled sheet whose title matches `title`
    /// (case-sensitive) and disable every other titled sheet.
    ///
    /// A title matching nothing leaves every titled sheet disabled, which
    /// callers treat as fallback to the page's base styles rather than an
    /// error. On the flagged engine the repaint toggle runs afterwards.
    pub fn select(&self, title: &str) {
        tracing::debug!(title = %title, "selecting stylesheet");
        for sheet in self.list() {
            if sheet.title().is_empty() {
                continue;
            }
            sheet.set_disabled(sheet.title() != title);
        }
        if self.needs_recompute_toggle {
            self.force_style_recompute();
        }
    }

    /// Toggle every titled sheet's `disabled` flag twice.
    ///
    /// Functionally a no-op, but it forces the flagged engine to recompute
    /// applied styles after a selection change. Public so embedders on the
    /// affected platform can trigger a repaint directly.
    pub fn force_style_recompute(&self) {
        for sheet in self.list() {
            if sheet.title().is_empty() {
                continue;
            }
            let disabled = sheet.is_disabled();
            sheet.set_disabled(!disabled);
            sheet.set_disabled(disabled);
        }
    }

    /// The discovered titles in list order, untitled sheets omitted. This
    /// is what a selector widget would render.
    pub fn titles(&self) -> Vec<String> {
        self.list()
            .iter()
            .filter(|sheet| !sheet.title().is_empty())
            .map(|sheet| sheet.title().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryDocument;

    fn page() -> Arc<MemoryDocument> {
        let document = Arc::new(MemoryDocument::new());
        document.add_link("stylesheet", "", false);
        document.add_link("stylesheet", "default", false);
        document.add_link("alternate stylesheet", "dark", true);
        document.add_link("alternate stylesheet", "high contrast", true);
        document
    }

    #[test]
    fn test_native_strategy_preferred_without_quirk() {
        let registry = StyleSheetRegistry::new(page(), &PageCapabilities::default());
        assert_eq!(registry.strategy(), DiscoveryStrategy::NativeList);
        // The native list is unfiltered, the titles view is not.
        assert_eq!(registry.list().len(), 4);
        assert_eq!(registry.titles(), ["default", "dark", "high contrast"]);
    }

    #[test]
    fn test_quirk_flag_forces_link_scan() {
        let caps = PageCapabilities {
            needs_recompute_toggle: true,
            ..PageCapabilities::default()
        };
        let registry = StyleSheetRegistry::new(page(), &caps);
        assert_eq!(registry.strategy(), DiscoveryStrategy::LinkScan);
        assert_eq!(registry.list().len(), 3);
    }

    #[test]
    fn test_missing_native_list_falls_back_to_scan() {
        let document = Arc::new(MemoryDocument::without_style_sheet_list());
        document.add_link("stylesheet", "default", false);
        document.add_link("not-a-style-link", "ignored", false);
        let registry = StyleSheetRegistry::new(document, &PageCapabilities::default());
        assert_eq!(registry.strategy(), DiscoveryStrategy::NativeList);
        assert_eq!(registry.titles(), ["default"]);
    }

    #[test]
    fn test_select_enables_exactly_one_titled_sheet() {
        let document = page();
        let registry = StyleSheetRegistry::new(document.clone(), &PageCapabilities::default());

        registry.select("dark");
        assert_eq!(registry.active_title(), "dark");

        let links = document.link_elements();
        // The untitled persistent sheet is untouched.
        assert!(!links[0].is_disabled());
        assert!(links[1].is_disabled());
        assert!(!links[2].is_disabled());
        assert!(links[3].is_disabled());
    }

    #[test]
    fn test_select_is_case_sensitive() {
        let registry = StyleSheetRegistry::new(page(), &PageCapabilities::default());
        registry.select("Dark");
        assert_eq!(registry.active_title(), "");
    }

    #[test]
    fn test_unknown_title_disables_all_titled_sheets() {
        let registry = StyleSheetRegistry::new(page(), &PageCapabilities::default());
        registry.select("no such theme");
        assert_eq!(registry.active_title(), "");
        assert!(!registry.titles().is_empty());
    }

    #[test]
    fn test_active_scan_prefers_last_declared() {
        let document = page();
        let registry = StyleSheetRegistry::new(document.clone(), &PageCapabilities::default());
        // Both titled sheets enabled at once, as a page may load them.
        for link in document.link_elements() {
            link.set_disabled(false);
        }
        assert_eq!(registry.active_title(), "high contrast");
    }

    #[test]
    fn test_empty_page_lists_nothing() {
        let document = Arc::new(MemoryDocument::new());
        let registry = StyleSheetRegistry::new(document, &PageCapabilities::default());
        assert!(registry.list().is_empty());
        assert_eq!(registry.active_title(), "");
        registry.select("anything");
    }

    #[test]
    fn test_link_scan_is_memoized() {
        let document = page();
        let caps = PageCapabilities {
            has_style_sheet_list: false,
            ..PageCapabilities::default()
        };
        let registry = StyleSheetRegistry::new(document.clone(), &caps);
        assert_eq!(registry.titles().len(), 3);

        document.add_link("stylesheet", "added later", false);
        assert_eq!(registry.titles().len(), 3);
    }

    #[test]
    fn test_recompute_toggle_preserves_state() {
        let document = page();
        let registry = StyleSheetRegistry::new(document.clone(), &PageCapabilities::default());
        registry.select("high contrast");

        let before: Vec<bool> = document
            .link_elements()
            .iter()
            .map(StyleSheetHandle::is_disabled)
            .collect();
        registry.force_style_recompute();
        let after: Vec<bool> = document
            .link_elements()
            .iter()
            .map(StyleSheetHandle::is_disabled)
            .collect();
        assert_eq!(before, after);
    }
}
