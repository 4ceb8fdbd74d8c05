//! Response Limiter
//!
//! Silent cap on the number of records in one response. There is no
//! pagination and no truncation marker.

/// Maximum records returned per request
pub const RESULT_CAP: usize = 100;

/// Keep at most [`RESULT_CAP`] items, preserving order
pub fn limit<I: IntoIterator>(items: I) -> Vec<I::Item> {
    limit_to(items, RESULT_CAP)
}

/// Keep at most `cap` items, preserving order
pub fn limit_to<I: IntoIterator>(items: I, cap: usize) -> Vec<I::Item> {
    items.into_iter().take(cap).collect()
}
