use std::string::FromUtf8Error;

use chrono::NaiveDate;

/// Literal segment values that mark an absent parameter from a non-browser
/// caller. They are rejected as malformed rather than treated as empty.
pub const NULLISH_SEGMENTS: &[&str] = &["None", "N/A", "null", "undefined"];

pub fn is_nullish_segment(segment: &str) -> bool {
    NULLISH_SEGMENTS.contains(&segment)
}

/// Splits a raw request path into its segments, without decoding them.
///
/// Leading and trailing slashes are ignored; interior empty segments are kept
/// so that a path like `/a//b` fails validation instead of silently
/// collapsing.
pub fn split_query_segments(path: &str) -> Vec<String> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').map(str::to_string).collect()
}

/// Percent-decodes each raw segment. A malformed escape sequence makes the
/// whole query malformed.
pub fn decode_segments(segments: &[String]) -> Result<Vec<String>, FromUtf8Error> {
    segments
        .iter()
        .map(|segment| urlencoding::decode(segment).map(|decoded| decoded.into_owned()))
        .collect()
}

/// A query is valid when it has one or two segments and none of them is a
/// nullish sentinel.
pub fn validate_query(segments: &[String]) -> bool {
    (1..=2).contains(&segments.len())
        && !segments.iter().any(|segment| is_nullish_segment(segment))
}

/// Joins title and optional artist segments into one provider search string.
pub fn build_search_text(segments: &[String]) -> String {
    segments.join(" ")
}

/// Extracts the caller address from an `x-forwarded-for` header value.
///
/// Takes the first comma-separated element, trimmed. Returns `None` for a
/// missing or empty header so the caller can fall back to the socket peer
/// address.
pub fn client_ip(forwarded_for: Option<&str>) -> Option<String> {
    forwarded_for
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
}

/// Normalizes a provider release date to `YYYY-MM-DD` where possible.
///
/// Genius reports dates either in ISO form or in display form such as
/// `October 31, 1975`. Unparseable values pass through unchanged.
pub fn normalize_release_date(raw: Option<String>) -> Option<String> {
    raw.map(|value| {
        NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&value, "%B %e, %Y"))
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or(value)
    })
}
