//! Cookie date formatting.
//!
//! Cookie `expires` attributes carry the fixed-length IMF-fixdate form
//! (`Thu, 01 Jan 1970 00:00:00 GMT`), always rendered in UTC.

use time::format_description::BorrowedFormatItem;
use time::macros::{datetime, format_description};
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

const COOKIE_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

const EPOCH_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// The latest instant the four-digit-year date format can render. Expiry
/// arithmetic clamps here instead of overflowing.
pub(crate) const MAX_FORMATTABLE: OffsetDateTime = datetime!(9999-12-31 23:59:59 UTC);

/// Format an instant as a cookie `expires` date.
///
/// Instants are rendered in UTC whatever their offset. Formatting cannot
/// fail for any instant expiry arithmetic produces; should it anyway, the
/// epoch string is substituted so the write still parses.
pub fn format_http_date(instant: OffsetDateTime) -> String {
    match instant.to_offset(UtcOffset::UTC).format(COOKIE_DATE) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!(error = %err, "cookie date formatting failed, substituting epoch");
            EPOCH_DATE.to_string()
        }
    }
}

/// Parse a cookie `expires` date back into an instant.
///
/// Accepts exactly the form [`format_http_date`] produces; anything else
/// yields `None`.
pub fn parse_http_date(input: &str) -> Option<OffsetDateTime> {
    PrimitiveDateTime::parse(input.trim(), COOKIE_DATE)
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}
