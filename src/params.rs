//! Path-parameter normalization and pagination.
//!
//! Every numeric path segment goes through [`int_param`] before it reaches
//! a query: empty input falls back, unparsable input falls back with a
//! warning, and the result is clamped into the caller's bounds. Invalid
//! input never produces an error — only an in-range integer.

/// Records per paginated response.
pub const PAGE_SIZE: i64 = 50;

/// Highest accepted 1-based page number.
pub const MAX_PAGE: i64 = 10000;

/// Highest user id the sources route will address.
pub const MAX_USERS: i64 = 10;

/// Upper clamp for user/source ids on the article routes.
pub const MAX_ID_PARAM: i64 = 1000;

/// Normalizes a raw path segment into a bounded integer.
///
/// - empty `fallback_raw` is treated as `"0"`
/// - empty `raw` is substituted with `fallback_raw`
/// - a failed parse yields `fallback` and logs a warning
/// - the result is clamped to `>= min`, and to `<= max` when `max > 0`
///   (a non-positive `max` means no upper bound)
pub fn int_param(raw: &str, fallback_raw: &str, fallback: i64, min: i64, max: i64) -> i64 {
    let fallback_raw = if fallback_raw.is_empty() {
        "0"
    } else {
        fallback_raw
    };
    let value = if raw.is_empty() { fallback_raw } else { raw };

    let mut result = match value.parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            tracing::warn!(value, fallback, "number conversion failed, using fallback");
            fallback
        }
    };

    if result < min {
        result = min;
    }
    if max > 0 && result > max {
        result = max;
    }
    result
}

/// Normalizes a raw page segment into a 0-based page index.
///
/// Pages are 1-based on the wire; page `0` and anything below collapse to
/// the first page. The offset handed to a query is `index * PAGE_SIZE`.
pub fn page_param(raw: &str) -> i64 {
    let page = int_param(raw, "1", 1, 0, MAX_PAGE);
    if page > 0 {
        page - 1
    } else {
        page
    }
}
