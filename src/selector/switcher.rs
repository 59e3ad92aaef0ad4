//! Lifecycle selector tying the registry to the cookie store.

use std::sync::Arc;

use crate::base::capabilities::PageCapabilities;
use crate::cookies::record::CookieRecord;
use crate::cookies::store::CookieStore;
use crate::dom::Document;
use crate::selector::config::SelectorConfig;
use crate::sheets::registry::StyleSheetRegistry;

/// Drives the persist-and-restore cycle over one document.
///
/// The two leaf components never call each other; this type owns the
/// control flow. On page-ready the stored preference is read and
/// re-applied; on page-teardown the presently active title is recorded.
/// Both hooks are plain synchronous functions, delivered at most once per
/// page instance by the embedder; wiring them to actual page events is
/// the embedder's job.
///
/// When the capability probe reports cookies unavailable the selector
/// stands down entirely: every hook becomes a no-op and the page is left
/// to its native stylesheet handling.
pub struct StyleSheetSelector {
    registry: StyleSheetRegistry,
    store: CookieStore,
    config: SelectorConfig,
    cookies_enabled: bool,
}

impl StyleSheetSelector {
    /// Construct the registry and store over one shared document.
    pub fn new(
        document: Arc<dyn Document>,
        capabilities: &PageCapabilities,
        config: SelectorConfig,
    ) -> Self {
        if !capabilities.cookies_enabled {
            tracing::debug!("cookies unavailable, selector standing down");
        }
        Self {
            registry: StyleSheetRegistry::new(document.clone(), capabilities),
            store: CookieStore::new(document),
            config,
            cookies_enabled: capabilities.cookies_enabled,
        }
    }

    /// Page-ready hook: re-apply the stored preference.
    ///
    /// Applies only a non-empty stored title. An absent or empty
    /// preference applies nothing, since selecting the empty title would
    /// disable every titled sheet instead of restoring anything.
    pub fn on_ready(&self) {
        if !self.cookies_enabled {
            return;
        }
        let stored = self.store.get(&self.config.cookie_name);
        if stored.is_empty() {
            tracing::debug!("no stored stylesheet preference");
            return;
        }
        tracing::debug!(title = %stored, "restoring stylesheet preference");
        self.registry.select(&stored);
    }

    /// Page-teardown hook: persist the presently active title.
    ///
    /// Persists unconditionally, an empty active title included; an empty
    /// stored value is how "nothing was active" survives the navigation.
    pub fn on_teardown(&self) {
        if !self.cookies_enabled {
            return;
        }
        let title = self.registry.active_title();
        tracing::debug!(title = %title, "persisting stylesheet preference");
        self.store.set(&self.record_for(&title));
    }

    /// Drop the stored preference from the jar.
    pub fn forget(&self) {
        if !self.cookies_enabled {
            return;
        }
        self.store.clear(&self.record_for(""));
    }

    /// The registry, for widgets that list titles and select directly.
    pub fn registry(&self) -> &StyleSheetRegistry {
        &self.registry
    }

    /// The cookie store the selector persists through.
    pub fn store(&self) -> &CookieStore {
        &self.store
    }

    /// The configuration in effect.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    fn record_for(&self, value: &str) -> CookieRecord {
        CookieRecord {
            name: self.config.cookie_name.clone(),
            value: value.to_string(),
            domain: self.config.domain.clone(),
            path: self.config.path.clone(),
            expiry_days: self.config.expiry_days,
            secure: self.config.secure,
        }
    }
}
