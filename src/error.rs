//! Errors returned by a [`Filter`].
//!
//! [`Filter`]: crate::Filter

use thiserror::Error;

/// An error encountered while checking a message.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The message was not valid UTF-8.
    ///
    /// `valid_up_to` is the byte offset of the first invalid sequence.
    #[error("malformed input encoding: invalid UTF-8 after byte {valid_up_to}")]
    MalformedEncoding { valid_up_to: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
