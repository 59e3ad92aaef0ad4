use thiserror::Error;

/// Errors surfaced by this crate.
///
/// The runtime selection and cookie paths never fail; the only fallible
/// surface is configuration validation, so the variants here all describe
/// rejected configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleSetError {
    #[error("cookie name must not be empty")]
    EmptyCookieName,

    #[error("cookie name {0:?} contains separator or control characters")]
    InvalidCookieName(String),

    #[error("cookie path {0:?} must start with '/'")]
    InvalidCookiePath(String),
}
