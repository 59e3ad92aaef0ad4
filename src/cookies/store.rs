//! Cookie store over a document.

use std::sync::Arc;

use crate::cookies::record::CookieRecord;
use crate::dom::Document;

/// Reads, writes and clears named values in a document's cookie jar.
///
/// Every operation is infallible by construction: writes are
/// fire-and-forget (the jar accepts or silently rejects, with no feedback
/// channel), and reads degrade to the empty string. The jar is shared with
/// every other script under the same scope, so a read may well return a
/// value some other party wrote.
pub struct CookieStore {
    document: Arc<dyn Document>,
}

impl CookieStore {
    /// Create a store over the given document.
    pub fn new(document: Arc<dyn Document>) -> Self {
        Self { document }
    }

    /// Serialize the record and assign it to the document cookie property.
    ///
    /// A record with `expiry_days <= 0` carries an epoch expiry and so
    /// deletes the named cookie rather than storing it.
    pub fn set(&self, record: &CookieRecord) {
        tracing::debug!(
            name = %record.name,
            expiry_days = record.expiry_days,
            secure = record.secure,
            "writing cookie"
        );
        self.document.write_cookie(&record.to_cookie_string());
    }

    /// The stored value under `name`, or the empty string when absent.
    ///
    /// Absence and an empty stored value are indistinguishable here; use
    /// [`lookup`](Self::lookup) to tell them apart.
    pub fn get(&self, name: &str) -> String {
        self.lookup(name).unwrap_or_default()
    }

    /// The stored value under `name`, or `None` when no such cookie is
    /// visible.
    ///
    /// Scans the jar entries from the end toward the start, so with
    /// duplicate names in the raw jar string the later entry wins. Names
    /// match exactly after leading whitespace is trimmed; a name merely
    /// containing `name` as a substring does not match.
    pub fn lookup(&self, name: &str) -> Option<String> {
        let jar = self.document.cookie();
        for entry in jar.split(';').rev() {
            if let Some(value) = entry
                .trim_start()
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
            {
                return Some(value.to_string());
            }
        }
        None
    }

    /// Delete the named cookie by overwriting it with an empty value and
    /// an epoch expiry. The record's `value` and `expiry_days` are
    /// ignored; its name and scope attributes select what to delete.
    pub fn clear(&self, record: &CookieRecord) {
        tracing::debug!(name = %record.name, "clearing cookie");
        let tombstone = CookieRecord {
            value: String::new(),
            expiry_days: 0,
            ..record.clone()
        };
        self.document.write_cookie(&tombstone.to_cookie_string());
    }
}
