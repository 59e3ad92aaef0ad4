//! In-process [`Document`] implementation.
//!
//! Backs the crate's tests, benches and demos with a document that behaves
//! like a minimal page: an ordered link list and a cookie jar with
//! `document.cookie` getter and setter semantics. Jars can be shared
//! between documents to model navigation, where a fresh page sees the
//! cookies the previous one wrote.

use std::sync::{Arc, RwLock};

use time::OffsetDateTime;

use crate::dom::{Document, StyleSheetHandle};

#[derive(Debug, Clone)]
struct StoredCookie {
    name: String,
    value: String,
    expires: Option<OffsetDateTime>,
}

impl StoredCookie {
    fn is_live(&self, now: OffsetDateTime) -> bool {
        match self.expires {
            Some(at) => at > now,
            None => true,
        }
    }
}

/// A shared in-memory cookie jar with browser setter semantics.
///
/// Cloning yields another handle to the same jar, so documents created
/// with [`MemoryDocument::with_jar`] observe each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: Arc<RwLock<Vec<StoredCookie>>>,
}

impl MemoryCookieJar {
    /// Create an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one serialized cookie write.
    ///
    /// A parseable cookie upserts by name, keeping its original position
    /// in the jar. A write whose expiry is in the past deletes the named
    /// cookie, and any write evicts entries that have lapsed since they
    /// were stored. Anything unparseable is dropped.
    pub fn store(&self, serialized: &str) {
        let parsed = match cookie::Cookie::parse(serialized) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(error = %err, "discarding malformed cookie write");
                return;
            }
        };

        let name = parsed.name().to_string();
        let value = parsed.value().to_string();
        let now = OffsetDateTime::now_utc();
        // Max-Age wins over Expires, per RFC 6265 section 5.3.
        let expires = parsed
            .max_age()
            .map(|age| now + age)
            .or_else(|| parsed.expires_datetime());

        let mut cookies = self.cookies.write().unwrap();
        // Drop entries that lapsed since they were stored.
        cookies.retain(|c| c.is_live(now));
        if let Some(at) = expires {
            if at <= now {
                cookies.retain(|c| c.name != name);
                tracing::debug!(name = %name, "expired write removed cookie");
                return;
            }
        }

        if let Some(slot) = cookies.iter_mut().find(|c| c.name == name) {
            slot.value = value;
            slot.expires = expires;
        } else {
            cookies.push(StoredCookie {
                name,
                value,
                expires,
            });
        }
    }

    /// The `document.cookie` getter view: live cookies in insertion order,
    /// serialized as `name=value; name2=value2`.
    pub fn serialize_live(&self) -> String {
        let now = OffsetDateTime::now_utc();
        let cookies = self.cookies.read().unwrap();
        cookies
            .iter()
            .filter(|c| c.is_live(now))
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Number of live cookies.
    pub fn len(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        self.cookies
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.is_live(now))
            .count()
    }

    /// Whether the jar holds no live cookies.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-process document: an ordered list of link elements plus a
/// [`MemoryCookieJar`].
///
/// By default the native stylesheet list is exposed; construct with
/// [`without_style_sheet_list`](MemoryDocument::without_style_sheet_list)
/// to model hosts where discovery must fall back to the link scan.
pub struct MemoryDocument {
    links: RwLock<Vec<StyleSheetHandle>>,
    jar: MemoryCookieJar,
    native_list: bool,
}

impl MemoryDocument {
    /// An empty document exposing the native stylesheet list.
    pub fn new() -> Self {
        Self::with_jar(MemoryCookieJar::new())
    }

    /// An empty document whose [`Document::style_sheet_list`] returns
    /// `None`, leaving only the link scan.
    pub fn without_style_sheet_list() -> Self {
        Self {
            links: RwLock::new(Vec::new()),
            jar: MemoryCookieJar::new(),
            native_list: false,
        }
    }

    /// An empty document sharing an existing jar.
    pub fn with_jar(jar: MemoryCookieJar) -> Self {
        Self {
            links: RwLock::new(Vec::new()),
            jar,
            native_list: true,
        }
    }

    /// A handle to this document's jar.
    pub fn jar(&self) -> MemoryCookieJar {
        self.jar.clone()
    }

    /// Append a link element and return its live handle.
    pub fn add_link(
        &self,
        rel: impl Into<String>,
        title: impl Into<String>,
        disabled: bool,
    ) -> StyleSheetHandle {
        let handle = StyleSheetHandle::new(rel, title, disabled);
        self.links.write().unwrap().push(handle.clone());
        handle
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn style_sheet_list(&self) -> Option<Vec<StyleSheetHandle>> {
        if !self.native_list {
            return None;
        }
        // Every link-backed sheet is part of the native list, persistent
        // and untitled sheets included.
        Some(self.links.read().unwrap().clone())
    }

    fn link_elements(&self) -> Vec<StyleSheetHandle> {
        self.links.read().unwrap().clone()
    }

    fn cookie(&self) -> String {
        self.jar.serialize_live()
    }

    fn write_cookie(&self, serialized: &str) {
        self.jar.store(serialized);
    }
}
