//! `seedwords-core` — 1626-word mnemonic seed codec.
//!
//! Converts hexadecimal seeds into speakable phrases (three words per 32-bit
//! group plus two checksum words) and back. Word tables are supplied by the
//! caller and validated through the [`registry`].
//!
//! Zero I/O, zero async. The library only emits `tracing` events and never
//! installs a subscriber.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod wordlist;

pub mod registry;

pub mod checksum;
pub mod codec;

pub use checksum::{first_checksum, second_checksum, STANDARD_WORD_COUNT};
pub use codec::{endian_swap, Codec};
pub use error::MnemonicError;
pub use registry::{
    get_wordlist, install, installed, list_wordlists, WordlistRegistry, WordlistRegistryBuilder,
};
pub use wordlist::{Wordlist, WordlistDefinition, WORDLIST_SIZE};
