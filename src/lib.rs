//! A filter for detecting disallowed words in text.
//!
//! A [`Filter`] holds a set of words and reports which of them appear within a message. Before
//! matching, messages are normalized to defeat common obfuscation tricks:
//!
//! - leet speak is resolved (`h3ll0` is read as `hello`),
//! - diacritics are folded (`cafè` is read as `cafe`),
//! - tabs and zero-width spaces are stripped, and runs of whitespace are removed.
//!
//! Optionally, words can also be found with spaces inserted between their letters (`h e l l o`).
//!
//! # Example
//! ```
//! use swear_filter::Filter;
//!
//! let filter = Filter::new(true, &["hello"]);
//!
//! assert_eq!(filter.check("H3LL0 there"), vec!["hello"]);
//! assert_eq!(filter.check("h e l l o"), vec!["hello"]);
//! assert!(filter.check("goodbye").is_empty());
//! ```
//!
//! A `Filter` may be shared between threads. Checks only require shared access to the word set,
//! so they can run concurrently, while [`add()`] and [`delete()`] wait for exclusive access.
//!
//! [`add()`]: Filter::add()
//! [`delete()`]: Filter::delete()

mod builder;
mod error;
mod fold;
mod leet;
mod matcher;
mod store;
mod whitespace;

pub use builder::{FilterBuilder, Normalizations};
pub use error::{Error, Result};
pub use matcher::WHITESPACE_SENTINEL;

use store::WordStore;
use tracing::{debug, trace};

/// A set of filtered words, along with the configuration used to find them.
///
/// The configuration is held in public fields, and can be changed at any time by the owner of the
/// `Filter`.
#[derive(Debug, Default)]
pub struct Filter {
    /// Normalization stages applied to each message before matching.
    pub normalizations: Normalizations,
    /// Whether words should also be found with the spaces between their letters removed.
    pub spaced_bypass: bool,
    store: WordStore,
}

impl Filter {
    /// Creates a new `Filter` containing `words`, with every normalization enabled.
    ///
    /// # Example
    /// ```
    /// use swear_filter::Filter;
    ///
    /// let filter = Filter::new(false, &["foo", "bar"]);
    ///
    /// assert_eq!(filter.len(), 2);
    /// ```
    pub fn new<I, S>(spaced_bypass: bool, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            normalizations: Normalizations::all(),
            spaced_bypass,
            store: WordStore::from_words(words),
        }
    }

    /// Normalize `text` into the canonical form that words are matched against.
    ///
    /// # Example
    /// ```
    /// use swear_filter::Filter;
    ///
    /// assert_eq!(Filter::default().normalize("  Ph4ntôm  "), "fantom");
    /// ```
    #[inline]
    pub fn normalize(&self, text: &str) -> String {
        matcher::normalize(text, self.normalizations)
    }

    /// Returns every filtered word found within `text`.
    ///
    /// The returned words are in no particular order. If no words are found, or if the filter
    /// contains no words, the result is empty.
    ///
    /// If the filter contains [`WHITESPACE_SENTINEL`], it is returned when `text` normalizes to
    /// an empty string.
    ///
    /// # Example
    /// ```
    /// use swear_filter::{Filter, WHITESPACE_SENTINEL};
    ///
    /// let filter = Filter::new(false, &["farty", WHITESPACE_SENTINEL]);
    ///
    /// assert_eq!(filter.check("PHARTY"), vec!["farty"]);
    /// assert_eq!(filter.check("\t\u{200b} "), vec![WHITESPACE_SENTINEL]);
    /// ```
    pub fn check(&self, text: &str) -> Vec<String> {
        let words = self.store.read();
        if words.is_empty() {
            return Vec::new();
        }

        let message = self.normalize(text);
        trace!(message = %message, "normalized message");

        let tripped = matcher::tripped(&message, words.iter(), self.spaced_bypass);
        debug!(
            words = words.len(),
            tripped = tripped.len(),
            "checked message"
        );
        tripped
    }

    /// Returns every filtered word found within the UTF-8 encoded `bytes`.
    ///
    /// This is the same as [`check()`], but for messages that have not yet been validated.
    ///
    /// # Errors
    /// Returns [`Error::MalformedEncoding`] if `bytes` is not valid UTF-8. No words are returned
    /// in that case.
    ///
    /// [`check()`]: Filter::check()
    pub fn check_bytes(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let text = fold::decode(bytes).map_err(|error| {
            debug!(%error, "rejected message");
            error
        })?;
        Ok(self.check(text))
    }

    /// Adds `words` to the filter.
    ///
    /// Words that are already present are ignored.
    pub fn add<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let added = self.store.insert(words);
        debug!(added, "added words");
    }

    /// Removes `words` from the filter.
    ///
    /// Words that are not present are ignored.
    pub fn delete<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let deleted = self.store.remove(words);
        debug!(deleted, "deleted words");
    }

    /// Returns every word currently in the filter, in no particular order.
    pub fn words(&self) -> Vec<String> {
        self.store.list()
    }

    /// Returns the number of words in the filter.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// Returns whether the filter contains no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }
}
