//! Error types for `seedwords-core`.

use thiserror::Error;

/// Errors produced by wordlist registration and mnemonic conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    /// Wordlist definition rejected at registration (missing field, wrong
    /// length, duplicate or empty word).
    #[error("wordlist validation failed: {0}")]
    Validation(String),

    /// No wordlist registered under the requested name.
    #[error("no such word list: {0}")]
    NotFound(String),

    /// A phrase word is not present in the wordlist.
    #[error("word not found in wordlist at position {position}")]
    WordNotFound {
        /// 0-based position of the offending word in the phrase.
        position: usize,
    },

    /// Hex seed chunk could not be parsed.
    #[error("invalid hex seed: {0}")]
    InvalidHex(String),

    /// Three words whose combined value does not fit in 32 bits.
    #[error("word triple at position {position} does not encode a 32-bit value")]
    InvalidTriple {
        /// 0-based position of the first word of the triple.
        position: usize,
    },

    /// Phrase length is not `3k + 2` words.
    #[error("invalid word count: {0}, expected a multiple of 3 plus 2")]
    InvalidWordCount(usize),

    /// The trailing checksum words do not match the data words.
    #[error("checksum mismatch")]
    ChecksumMismatch,

    /// A registry has already been installed for this process.
    #[error("wordlist registry already installed")]
    RegistryAlreadyInstalled,
}
