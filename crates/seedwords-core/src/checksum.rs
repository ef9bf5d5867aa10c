//! Checksum word selection.
//!
//! Both checksum words are chosen by a CRC-32 (IEEE) digest over the
//! concatenated unique prefixes of the phrase words:
//! - [`first_checksum`] — digest over at most [`STANDARD_WORD_COUNT`] words,
//!   picks one of the phrase's own words
//! - [`second_checksum`] — digest over at most `STANDARD_WORD_COUNT + 1`
//!   words (data plus first checksum), picks a word from the wordlist
//!
//! The bit operations match the phrases produced by existing wallets and must
//! not be normalized.

use crate::wordlist::Wordlist;

/// Number of data words in a standard (256-bit seed) phrase.
pub const STANDARD_WORD_COUNT: usize = 24;

const MASK: u32 = 0xffff_ffff;

/// A phrase with no words is digested as one empty word.
const EMPTY_PHRASE: &[&str] = &[""];

/// CRC-32 over the first `prefix_len` characters of each word.
fn prefix_digest(words: &[&str], prefix_len: usize) -> u32 {
    let joined: String = words
        .iter()
        .flat_map(|word| word.chars().take(prefix_len))
        .collect();
    crc32fast::hash(joined.as_bytes())
}

/// Complement twice and reduce. The two complements cancel out; they are
/// kept so the arithmetic reads the same as in other implementations.
#[allow(clippy::arithmetic_side_effects)]
const fn reduce(digest: u32, modulus: usize) -> usize {
    let z = digest ^ MASK;
    (z ^ MASK) as usize % modulus
}

/// Compute the first checksum word of `words`.
///
/// The digest covers at most the first [`STANDARD_WORD_COUNT`] words and the
/// index is reduced modulo that count, but the returned word is taken from
/// the full `words` slice.
#[must_use]
pub fn first_checksum<'a>(words: &[&'a str], unique_prefix_length: usize) -> &'a str {
    let words = if words.is_empty() { EMPTY_PHRASE } else { words };
    let considered = &words[..words.len().min(STANDARD_WORD_COUNT)];
    let digest = prefix_digest(considered, unique_prefix_length);
    words[reduce(digest, considered.len())]
}

/// Compute the second checksum word of `words` (data words followed by the
/// first checksum word).
///
/// The digest covers at most `STANDARD_WORD_COUNT + 1` words; the result is
/// a word of `wordlist`, not of `words`.
#[must_use]
pub fn second_checksum<'w>(words: &[&str], wordlist: &'w Wordlist) -> &'w str {
    let words = if words.is_empty() { EMPTY_PHRASE } else { words };
    #[allow(clippy::arithmetic_side_effects)]
    let considered = &words[..words.len().min(STANDARD_WORD_COUNT + 1)];
    let digest = prefix_digest(considered, wordlist.unique_prefix_length());
    let table = wordlist.words();
    &table[reduce(digest, table.len())]
}
