//! Cookie persistence through the document.
//!
//! This module provides the client-side cookie machinery the selection
//! layer persists preferences with:
//!
//! - **Records**: [`CookieRecord`](record::CookieRecord), one named value with scope and expiry
//! - **Codec**: Set-Cookie-style serialization plus the cookie date format ([`date`])
//! - **Store**: [`CookieStore`](store::CookieStore), get/set/clear against a [`Document`](crate::dom::Document)
//!
//! # Architecture
//!
//! Each piece maps onto the web-platform surface it models:
//!
//! | Web platform | styleset (Rust) | Responsibility |
//! |--------------|-----------------|----------------|
//! | `Set-Cookie` attribute line | [`CookieRecord::to_cookie_string`](record::CookieRecord::to_cookie_string) | Wire encoding |
//! | cookie `expires` date | [`date::format_http_date`] | IMF-fixdate rendering |
//! | `document.cookie` assignment | [`CookieStore::set`](store::CookieStore::set) | Fire-and-forget write |
//! | `document.cookie` scan | [`CookieStore::get`](store::CookieStore::get) | Reverse scan, exact name match |
//!
//! # Reading and writing a preference
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use styleset::cookies::record::CookieRecord;
//! use styleset::cookies::store::CookieStore;
//! use styleset::dom::memory::MemoryDocument;
//!
//! let document = Arc::new(MemoryDocument::new());
//! let store = CookieStore::new(document);
//!
//! store.set(&CookieRecord {
//!     expiry_days: 90,
//!     path: "/".into(),
//!     ..CookieRecord::new("stylesheet", "dark")
//! });
//! assert_eq!(store.get("stylesheet"), "dark");
//! ```

pub mod date;
pub mod record;
pub mod store;
