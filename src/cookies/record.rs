//! Cookie record representation.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::cookies::date;

/// One named value destined for the page's cookie jar, with the scope and
/// expiry attributes the write will carry.
///
/// Every field defaults to its empty form (`expiry_days = 0` means an
/// already-expired write, which deletes), and the serde representation
/// applies the same defaults for absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieRecord {
    /// Cookie name. Writes with an empty name are accepted here and
    /// rejected by the jar.
    pub name: String,
    /// Cookie value, may be empty.
    pub value: String,
    /// `domain` attribute; written verbatim, empty when unscoped.
    pub domain: String,
    /// `path` attribute; written verbatim, empty when unscoped.
    pub path: String,
    /// Positive means "expires this many days from now". Zero or negative
    /// means the epoch, an already-expired write that deletes the cookie.
    pub expiry_days: i32,
    /// Append the `secure` attribute, restricting the cookie to encrypted
    /// connections.
    pub secure: bool,
}

impl CookieRecord {
    /// A record with the given name and value and default scope and expiry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// The expiry instant this record encodes: `now + expiry_days` days
    /// when positive (clamped to the formattable range), the epoch
    /// otherwise.
    pub fn expiry(&self) -> OffsetDateTime {
        if self.expiry_days > 0 {
            OffsetDateTime::now_utc()
                .checked_add(Duration::days(i64::from(self.expiry_days)))
                .map_or(date::MAX_FORMATTABLE, |at| at.min(date::MAX_FORMATTABLE))
        } else {
            OffsetDateTime::UNIX_EPOCH
        }
    }

    /// Serialize to the Set-Cookie-style line the document setter accepts:
    /// `name=value;domain=D;path=P;expires=DATE[;secure]`.
    ///
    /// The `domain` and `path` attributes are always present, empty when
    /// unset. `expires` is always present. `secure` only when set.
    pub fn to_cookie_string(&self) -> String {
        let mut line = format!(
            "{}={};domain={};path={};expires={}",
            self.name,
            self.value,
            self.domain,
            self.path,
            date::format_http_date(self.expiry())
        );
        if self.secure {
            line.push_str(";secure");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty_expired_insecure() {
        let record = CookieRecord::default();
        assert_eq!(record.name, "");
        assert_eq!(record.value, "");
        assert_eq!(record.domain, "");
        assert_eq!(record.path, "");
        assert_eq!(record.expiry_days, 0);
        assert!(!record.secure);
    }

    #[test]
    fn test_zero_and_negative_expiry_mean_epoch() {
        let mut record = CookieRecord::new("stylesheet", "dark");
        assert_eq!(record.expiry(), OffsetDateTime::UNIX_EPOCH);
        record.expiry_days = -30;
        assert_eq!(record.expiry(), OffsetDateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_positive_expiry_lies_in_the_future() {
        let record = CookieRecord {
            expiry_days: 90,
            ..CookieRecord::new("stylesheet", "dark")
        };
        let now = OffsetDateTime::now_utc();
        let at = record.expiry();
        assert!(at > now + Duration::days(89));
        assert!(at < now + Duration::days(91));
    }

    #[test]
    fn test_absurd_expiry_clamps_instead_of_overflowing() {
        let record = CookieRecord {
            expiry_days: i32::MAX,
            ..CookieRecord::new("stylesheet", "dark")
        };
        assert_eq!(record.expiry(), date::MAX_FORMATTABLE);
    }

    #[test]
    fn test_wire_format_shape() {
        let record = CookieRecord {
            domain: "example.com".into(),
            path: "/".into(),
            secure: true,
            ..CookieRecord::new("stylesheet", "dark")
        };
        let line = record.to_cookie_string();
        assert!(line.starts_with("stylesheet=dark;domain=example.com;path=/;expires="));
        assert!(line.ends_with(";secure"));
    }

    #[test]
    fn test_wire_format_epoch_and_no_secure() {
        let record = CookieRecord::new("stylesheet", "");
        assert_eq!(
            record.to_cookie_string(),
            "stylesheet=;domain=;path=;expires=Thu, 01 Jan 1970 00:00:00 GMT"
        );
    }

    #[test]
    fn test_serde_defaults_for_absent_fields() {
        let record: CookieRecord = serde_json::from_str(r#"{"name":"stylesheet"}"#)
            .expect("partial record should deserialize");
        assert_eq!(record.name, "stylesheet");
        assert_eq!(record.value, "");
        assert_eq!(record.path, "");
        assert_eq!(record.expiry_days, 0);
        assert!(!record.secure);
    }
}
