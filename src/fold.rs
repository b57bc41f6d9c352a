//! Diacritic folding.
//!
//! Accented characters are reduced to their base letters by canonically decomposing the text,
//! discarding nonspacing marks, and recomposing whatever is left.

use crate::error::{Error, Result};
use finl_unicode::categories::CharacterCategories;
use std::str;
use unicode_normalization::UnicodeNormalization;

/// Remove all nonspacing marks from `text`.
pub(crate) fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !c.is_mark_nonspacing())
        .nfc()
        .collect()
}

/// Interpret `bytes` as UTF-8 text.
///
/// Malformed input is reported as [`Error::MalformedEncoding`], pointing at the first byte that
/// could not be decoded.
pub(crate) fn decode(bytes: &[u8]) -> Result<&str> {
    str::from_utf8(bytes).map_err(|error| Error::MalformedEncoding {
        valid_up_to: error.valid_up_to(),
    })
}
