//! Storage for the set of filtered words.
//!
//! The set is guarded by a reader-writer lock. Checking a message only reads the set, so any
//! number of checks may run at once; adding or deleting words waits for exclusive access.

use hashbrown::HashSet;
use parking_lot::{RwLock, RwLockReadGuard};

/// A concurrently accessible set of filtered words.
#[derive(Debug, Default)]
pub(crate) struct WordStore {
    words: RwLock<HashSet<String>>,
}

impl WordStore {
    /// Creates a store containing `words`.
    pub(crate) fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            words: RwLock::new(words.into_iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Inserts `words`, returning how many were not already present.
    pub(crate) fn insert<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let mut set = self.words.write();
        words
            .into_iter()
            .filter(|word| set.insert(word.to_string()))
            .count()
    }

    /// Removes `words`, returning how many were present.
    pub(crate) fn remove<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = self.words.write();
        words
            .into_iter()
            .filter(|word| set.remove(word.as_ref()))
            .count()
    }

    /// Returns a copy of every word currently in the store.
    pub(crate) fn list(&self) -> Vec<String> {
        self.words.read().iter().cloned().collect()
    }

    /// Acquires shared read access to the words.
    ///
    /// The set cannot be modified while the returned guard is held.
    #[inline]
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashSet<String>> {
        self.words.read()
    }
}
