//! Reduction of per-aspect statuses into one overall status.
//!
//! Two equal statuses stay as they are; any two different statuses collapse
//! to [`ValidationType::Partial`]. This is not a minimum over the ranking:
//! `installed` combined with `missing` is `partial`, not `missing`.

use super::types::ValidationType;

/// Combine two statuses.
pub fn combine(a: ValidationType, b: ValidationType) -> ValidationType {
    if a == b {
        a
    } else {
        ValidationType::Partial
    }
}

/// Left-fold `statuses` with [`combine`].
///
/// # Panics
///
/// Panics if `statuses` is empty. A validator always has at least one
/// aspect, so an empty slice means an aspect was left out.
pub fn merge(statuses: &[ValidationType]) -> ValidationType {
    match try_merge(statuses) {
        Some(merged) => merged,
        None => panic!("merge called with no statuses; every validator must report an aspect"),
    }
}

/// Like [`merge`], but returns `None` for an empty slice.
pub fn try_merge(statuses: &[ValidationType]) -> Option<ValidationType> {
    let (first, rest) = statuses.split_first()?;
    Some(rest.iter().fold(*first, |acc, next| combine(acc, *next)))
}
