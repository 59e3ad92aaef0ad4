//! Base types and error handling.
//!
//! Provides foundational types shared across the crate:
//! - [`StyleSetError`]: Configuration validation errors
//! - [`PageCapabilities`]: Host environment capability probes
//!
//! [`StyleSetError`]: error::StyleSetError
//! [`PageCapabilities`]: capabilities::PageCapabilities

pub mod capabilities;
pub mod error;
