//! Leet speak resolution.
//!
//! Leet speak replaces letters with visually similar symbols (`3` for `e`, `$` for `s`, and so
//! on). The tables here map those symbols back to letters. They are applied in three passes:
//! multi-character sequences first, then single characters, then ambiguous symbols.
//!
//! Ambiguous symbols (such as `1`, which could be either `i` or `l`) cannot be collapsed to a
//! single letter without losing information. Instead, every interpretation of each ambiguous
//! symbol is produced, and all of them are joined together with spaces so that substring matching
//! can hit any one of them.

/// Multi-character sequences and the letters they stand for.
///
/// Applied in order, before any single-character substitution. Order matters: `vv` must be
/// resolved before `v` would be turned into `u`, and `|<` must be resolved before `|` is
/// treated as ambiguous.
pub(crate) const MULTI_CHARACTER: &[(&str, &str)] = &[
    ("vv", "w"),
    ("uu", "w"),
    (r"\/\/", "w"),
    ("><", "x"),
    ("1<", "k"),
    ("|<", "k"),
    ("()", "o"),
    ("[]", "o"),
    ("ph", "f"),
];

/// Single symbols and the letters they stand for.
pub(crate) const SINGLE_CHARACTER: &[(char, char)] = &[
    ('4', 'a'),
    ('@', 'a'),
    ('8', 'b'),
    ('(', 'c'),
    ('<', 'c'),
    ('[', 'c'),
    ('3', 'e'),
    ('€', 'e'),
    ('6', 'g'),
    ('9', 'g'),
    ('#', 'h'),
    ('j', 'i'),
    ('0', 'o'),
    ('5', 's'),
    ('$', 's'),
    ('7', 't'),
    ('+', 't'),
    ('v', 'u'),
    ('2', 'z'),
];

/// Symbols that could stand for more than one letter.
pub(crate) const AMBIGUOUS: &[(char, &[&str])] = &[
    ('!', &["i", "l"]),
    ('|', &["i", "l"]),
    ('1', &["i", "l"]),
    (']', &["i", "l"]),
    ('}', &["i", "l"]),
];

/// Lower-case `text` one character at a time.
///
/// Unlike [`str::to_lowercase()`], this ignores context, so a word-final `Σ` becomes `σ` rather
/// than `ς`. A word and its upper-cased form therefore always lower-case to the same text.
pub(crate) fn lowercase(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[inline]
fn substitute(c: char) -> char {
    SINGLE_CHARACTER
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map_or(c, |(_, letter)| *letter)
}

/// Resolve leet speak within `text`.
///
/// The result is lower-cased. If `text` contains any ambiguous symbols, the result is every
/// interpretation joined by single spaces. Each ambiguous symbol is expanded on its own: all of
/// its occurrences are replaced by one candidate at a time, while any other ambiguous symbols in
/// the text are left as they are in that copy.
pub(crate) fn normalize(text: &str) -> String {
    let mut normalized = lowercase(text);

    for (sequence, letter) in MULTI_CHARACTER {
        if normalized.contains(sequence) {
            normalized = normalized.replace(sequence, letter);
        }
    }

    // A single pass is enough, since no replacement letter is itself a symbol.
    let normalized = normalized.chars().map(substitute).collect::<String>();

    let interpretations = AMBIGUOUS
        .iter()
        .filter(|(symbol, _)| normalized.contains(*symbol))
        .flat_map(|(symbol, candidates)| {
            let normalized = &normalized;
            candidates
                .iter()
                .map(move |candidate| normalized.replace(*symbol, candidate))
        })
        .collect::<Vec<_>>();

    if interpretations.is_empty() {
        normalized
    } else {
        interpretations.join(" ")
    }
}
