//! Configuration and construction of a [`Filter`].
//!
//! [`Filter`]: crate::Filter

use crate::{store::WordStore, Filter};
use bitflags::bitflags;

bitflags! {
    /// Normalization stages applied to a message before it is matched.
    ///
    /// Each flag enables one stage. All stages are enabled by default; remove a flag to skip its
    /// stage.
    ///
    /// # Example
    /// ```
    /// use swear_filter::{Filter, Normalizations};
    ///
    /// let mut filter = Filter::new(false, &["cafe"]);
    /// filter.normalizations.remove(Normalizations::DIACRITICS);
    ///
    /// assert!(filter.check("cafè").is_empty());
    /// ```
    pub struct Normalizations: u8 {
        /// Fold accented characters down to their base letters (`à` -> `a`).
        const DIACRITICS = 0b0000_0001;
        /// Convert tabs into single spaces.
        const TABS = 0b0000_0010;
        /// Strip leading and trailing whitespace, and remove runs of whitespace.
        const WHITESPACE = 0b0000_0100;
        /// Strip zero-width spaces.
        const ZERO_WIDTH = 0b0000_1000;
        /// Resolve leet speak (`h3ll0` -> `hello`).
        const LEET_SPEAK = 0b0001_0000;
    }
}

impl Default for Normalizations {
    fn default() -> Self {
        Self::all()
    }
}

/// A builder for a [`Filter`].
///
/// # Example
/// ```
/// use swear_filter::{FilterBuilder, Normalizations};
///
/// let filter = FilterBuilder::new()
///     .words(&["foo", "bar"])
///     .spaced_bypass(true)
///     .normalizations(Normalizations::all() - Normalizations::LEET_SPEAK)
///     .build();
///
/// assert_eq!(filter.check("f o o"), vec!["foo"]);
/// ```
#[derive(Clone, Debug)]
pub struct FilterBuilder {
    words: Vec<String>,
    normalizations: Normalizations,
    spaced_bypass: bool,
}

impl FilterBuilder {
    /// Creates a new builder with no words, every normalization enabled, and spaced bypass
    /// detection disabled.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            normalizations: Normalizations::all(),
            spaced_bypass: false,
        }
    }

    /// Adds a single word to be filtered.
    #[inline]
    pub fn word<S>(&mut self, word: &S) -> &mut Self
    where
        S: ToString + ?Sized,
    {
        self.words.push(word.to_string());
        self
    }

    /// Adds words to be filtered.
    #[inline]
    pub fn words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.words.extend(words.into_iter().map(|s| s.to_string()));
        self
    }

    /// Sets the normalization stages to apply.
    #[inline]
    pub fn normalizations(&mut self, normalizations: Normalizations) -> &mut Self {
        self.normalizations = normalizations;
        self
    }

    /// Sets whether words should also be found with the spaces between their letters removed.
    #[inline]
    pub fn spaced_bypass(&mut self, spaced_bypass: bool) -> &mut Self {
        self.spaced_bypass = spaced_bypass;
        self
    }

    /// Builds a [`Filter`] from this builder's configuration.
    pub fn build(&self) -> Filter {
        Filter {
            normalizations: self.normalizations,
            spaced_bypass: self.spaced_bypass,
            store: WordStore::from_words(self.words.iter()),
        }
    }
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
