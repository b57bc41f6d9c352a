//! Normalization pipeline and word matching.
//!
//! A message is normalized in a fixed order: lower-casing, leet speak resolution, diacritic
//! folding, and finally whitespace sanitization. The canonical result is then searched for every
//! filtered word as a plain substring.

use crate::{fold, leet, whitespace, Normalizations};

/// A filtered word consisting of a single space.
///
/// Rather than being searched for, this word trips on messages that normalize down to nothing,
/// such as those made entirely of whitespace and zero-width spaces.
pub const WHITESPACE_SENTINEL: &str = " ";

/// Normalize `text` into the canonical form used for matching.
///
/// Every stage whose flag is absent from `normalizations` is skipped, apart from lower-casing,
/// which always happens.
pub(crate) fn normalize(text: &str, normalizations: Normalizations) -> String {
    let mut message = if normalizations.contains(Normalizations::LEET_SPEAK) {
        leet::normalize(text)
    } else {
        leet::lowercase(text)
    };

    if normalizations.contains(Normalizations::DIACRITICS) {
        message = fold::fold(&message);
    }

    whitespace::sanitize(&message, normalizations)
}

/// Find every word in `words` that appears within the normalized `message`.
///
/// When `spaced_bypass` is set, words are also searched for in `message` with all of its spaces
/// removed. `words` must not contain duplicates; each is returned at most once, in no particular
/// order.
pub(crate) fn tripped<'a, I>(message: &str, words: I, spaced_bypass: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let spaceless = if spaced_bypass {
        Some(message.replace(' ', ""))
    } else {
        None
    };

    let mut result = Vec::new();
    let mut check_sentinel = false;
    for word in words {
        if word == WHITESPACE_SENTINEL {
            check_sentinel = true;
            continue;
        }

        if message.contains(word.as_str())
            || spaceless
                .as_ref()
                .map_or(false, |spaceless| spaceless.contains(word.as_str()))
        {
            result.push(word.clone());
        }
    }

    if check_sentinel && message.is_empty() {
        result.push(WHITESPACE_SENTINEL.to_owned());
    }
    result
}
