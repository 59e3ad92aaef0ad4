//! Host environment capability probes.
//!
//! The original feature checks this library replaces were scattered inline:
//! "is `document.styleSheets` there?", "is `addEventListener` there?",
//! "are cookies enabled?", "is this the engine that needs the repaint
//! toggle?". Here they are computed once into a [`PageCapabilities`] value
//! and passed into constructors, so platform quirks sit behind a single
//! decision point instead of being re-checked on every call.

use crate::dom::Document;

/// Rendering engine families with distinct capability profiles.
///
/// Only coarse families are distinguished; this is not user-agent sniffing
/// beyond what the capability flags need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingEngine {
    /// Chromium-derived engines.
    Blink,
    /// Firefox.
    Gecko,
    /// Safari, plus pre-Blink Chrome. The flagged engine: selection must
    /// force a style recompute, and stylesheet discovery falls back to the
    /// link scan.
    WebKit,
    /// Legacy IE. Exposes `document.styleSheets` but predates standard
    /// event registration.
    Trident,
    /// Anything else; assumed standards-conforming.
    Other,
}

/// The capability probes consumed by the selection machinery, computed once
/// at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCapabilities {
    /// The host exposes a native structured stylesheet list
    /// (`document.styleSheets`).
    pub has_style_sheet_list: bool,
    /// The host exposes standard event registration (`addEventListener`).
    /// Carried for embedders wiring the lifecycle hooks; the library itself
    /// never registers events.
    pub has_event_listener: bool,
    /// The flagged-engine quirk pair: discovery uses the link-scan fallback
    /// even when the native list exists, and selection is followed by a
    /// forced style recompute.
    pub needs_recompute_toggle: bool,
    /// Cookies are available (`navigator.cookieEnabled`). When false the
    /// lifecycle selector stands down entirely. The [`Document`] trait has
    /// no probe for this, so set it from the embedding environment.
    pub cookies_enabled: bool,
}

impl Default for PageCapabilities {
    /// A standards-conforming environment: native list and event
    /// registration present, cookies enabled, no quirks.
    fn default() -> Self {
        Self {
            has_style_sheet_list: true,
            has_event_listener: true,
            needs_recompute_toggle: false,
            cookies_enabled: true,
        }
    }
}

impl PageCapabilities {
    /// Capability profile for a known engine family.
    pub fn for_engine(engine: RenderingEngine) -> Self {
        match engine {
            RenderingEngine::WebKit => Self {
                needs_recompute_toggle: true,
                ..Self::default()
            },
            RenderingEngine::Trident => Self {
                has_event_listener: false,
                ..Self::default()
            },
            RenderingEngine::Blink | RenderingEngine::Gecko | RenderingEngine::Other => {
                Self::default()
            }
        }
    }

    /// Compute the probes against a concrete document: the native-list flag
    /// is taken from the document itself, the rest from the engine profile.
    pub fn probe(document: &dyn Document, engine: RenderingEngine) -> Self {
        Self {
            has_style_sheet_list: document.style_sheet_list().is_some(),
            ..Self::for_engine(engine)
        }
    }
}
