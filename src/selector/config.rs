//! Selector configuration.

use serde::{Deserialize, Serialize};

use crate::base::error::StyleSetError;

/// Cookie name used when none is configured.
pub const DEFAULT_COOKIE_NAME: &str = "stylesheet";

/// Preference lifetime used when none is configured.
pub const DEFAULT_EXPIRY_DAYS: i32 = 90;

/// Cookie path used when none is configured.
pub const DEFAULT_PATH: &str = "/";

/// Cookie-name characters that would corrupt the wire format or the jar
/// scan. The RFC 2616 separator set.
const NAME_SEPARATORS: &str = "()<>@,;:\\\"/[]?={} \t";

/// How the lifecycle selector persists a preference: the cookie name it
/// reads and writes, plus the scope and expiry attributes of the write.
///
/// The serde representation applies the documented defaults for absent
/// fields, so a config file may specify only what it overrides.
/// Deserialized values are not validated on the way in; call
/// [`validate`](Self::validate) or construct through the
/// [`builder`](Self::builder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Name of the preference cookie. Default `"stylesheet"`.
    pub cookie_name: String,
    /// Days the preference survives. Default `90`; zero or negative makes
    /// every write an immediate deletion, so nothing persists.
    pub expiry_days: i32,
    /// `domain` attribute for writes. Default empty (host-only).
    pub domain: String,
    /// `path` attribute for writes. Default `"/"`.
    pub path: String,
    /// Append the `secure` attribute to writes. Default off.
    pub secure: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            expiry_days: DEFAULT_EXPIRY_DAYS,
            domain: String::new(),
            path: DEFAULT_PATH.to_string(),
            secure: false,
        }
    }
}

impl SelectorConfig {
    /// Start building a config from the defaults.
    pub fn builder() -> SelectorConfigBuilder {
        SelectorConfigBuilder::new()
    }

    /// Check the config for values the cookie codec cannot carry.
    ///
    /// The cookie name must be non-empty and free of separator and control
    /// characters; the path must be rooted at `/`.
    pub fn validate(&self) -> Result<(), StyleSetError> {
        if self.cookie_name.is_empty() {
            return Err(StyleSetError::EmptyCookieName);
        }
        if self
            .cookie_name
            .chars()
            .any(|c| c.is_control() || NAME_SEPARATORS.contains(c))
        {
            return Err(StyleSetError::InvalidCookieName(self.cookie_name.clone()));
        }
        if !self.path.starts_with('/') {
            return Err(StyleSetError::InvalidCookiePath(self.path.clone()));
        }
        Ok(())
    }
}

/// Builder for [`SelectorConfig`] with validation at the end.
#[derive(Debug, Default)]
pub struct SelectorConfigBuilder {
    inner: SelectorConfig,
}

impl SelectorConfigBuilder {
    pub fn new() -> Self {
        Self {
            inner: SelectorConfig::default(),
        }
    }

    /// Set the preference cookie name.
    pub fn cookie_name(mut self, name: impl Into<String>) -> Self {
        self.inner.cookie_name = name.into();
        self
    }

    /// Set the preference lifetime in days.
    pub fn expiry_days(mut self, days: i32) -> Self {
        self.inner.expiry_days = days;
        self
    }

    /// Set the `domain` attribute for writes.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.inner.domain = domain.into();
        self
    }

    /// Set the `path` attribute for writes.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.inner.path = path.into();
        self
    }

    /// Restrict the preference cookie to encrypted connections.
    pub fn secure(mut self, secure: bool) -> Self {
        self.inner.secure = secure;
        self
    }

    /// Validate and produce the config.
    pub fn build(self) -> Result<SelectorConfig, StyleSetError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
