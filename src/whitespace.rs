//! Whitespace sanitization.
//!
//! Tabs, zero-width spaces, and runs of whitespace are all ways of breaking a word apart without
//! changing how it reads. Each step here is controlled by its own [`Normalizations`] flag.
//!
//! Note that interior runs of two or more whitespace characters are removed entirely rather than
//! collapsed to a single space, fusing the words on either side together. Single whitespace
//! characters are left alone.
//!
//! [`Normalizations`]: crate::Normalizations

use crate::Normalizations;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// The zero-width space character.
const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Leading or trailing whitespace, including Unicode space separators.
static OUTER_WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t\n\x0C\r \p{Zs}]+|[\t\n\x0C\r \p{Zs}]+$")
        .expect("outer whitespace pattern is valid")
});

/// Two or more consecutive whitespace characters.
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\t\n\x0C\r \p{Zs}]{2,}").expect("whitespace run pattern is valid")
});

/// Sanitize the whitespace within `text` according to `normalizations`.
///
/// Only the [`TABS`], [`ZERO_WIDTH`], and [`WHITESPACE`] flags are considered.
///
/// [`TABS`]: Normalizations::TABS
/// [`ZERO_WIDTH`]: Normalizations::ZERO_WIDTH
/// [`WHITESPACE`]: Normalizations::WHITESPACE
pub(crate) fn sanitize(text: &str, normalizations: Normalizations) -> String {
    let mut sanitized = Cow::Borrowed(text);

    if normalizations.contains(Normalizations::TABS) && sanitized.contains('\t') {
        sanitized = Cow::Owned(sanitized.replace('\t', " "));
    }

    if normalizations.contains(Normalizations::ZERO_WIDTH) && sanitized.contains(ZERO_WIDTH_SPACE)
    {
        sanitized = Cow::Owned(sanitized.replace(ZERO_WIDTH_SPACE, ""));
    }

    if normalizations.contains(Normalizations::WHITESPACE) {
        let trimmed = OUTER_WHITESPACE.replace_all(&sanitized, "");
        return WHITESPACE_RUN.replace_all(&trimmed, "").into_owned();
    }

    sanitized.into_owned()
}
