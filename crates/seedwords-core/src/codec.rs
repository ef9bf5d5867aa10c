//! Hex seed ↔ mnemonic phrase conversion.
//!
//! Each 8-digit hex group is read as a little-endian `u32` and spread over
//! three words by mixed-radix decomposition in base [`WORDLIST_SIZE`]. Two
//! checksum words (see [`crate::checksum`]) are appended to every phrase.

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::checksum::{first_checksum, second_checksum};
use crate::error::MnemonicError;
use crate::wordlist::{Wordlist, WORDLIST_SIZE};

// ── Constants ──────────────────────────────────────────────────────

/// Hex digits per 32-bit group.
const HEX_GROUP_LEN: usize = 8;

/// Words per 32-bit group.
const WORDS_PER_GROUP: usize = 3;

/// Trailing checksum words per phrase.
const CHECKSUM_WORDS: usize = 2;

#[allow(clippy::cast_possible_truncation)]
const BASE: u32 = WORDLIST_SIZE as u32;

/// Phrase word separator.
const SEPARATOR: char = ' ';

// ── Codec ──────────────────────────────────────────────────────────

/// Mnemonic encoder/decoder bound to one [`Wordlist`].
#[derive(Clone, Copy, Debug)]
pub struct Codec<'w> {
    wordlist: &'w Wordlist,
}

impl<'w> Codec<'w> {
    /// Bind a codec to `wordlist`.
    #[must_use]
    pub const fn new(wordlist: &'w Wordlist) -> Self {
        Self { wordlist }
    }

    /// The wordlist this codec draws from.
    #[must_use]
    pub const fn wordlist(&self) -> &'w Wordlist {
        self.wordlist
    }

    /// Encode a hex seed as a mnemonic phrase.
    ///
    /// Produces three words per 8-digit group followed by two checksum
    /// words. A trailing partial group is ignored. Upper- and lowercase hex
    /// digits are both accepted.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::InvalidHex` if a full group contains a
    /// non-hex character.
    pub fn encode(&self, hex_seed: &str) -> Result<String, MnemonicError> {
        // Groups are counted in characters, so a multi-byte tail is dropped
        // rather than parsed.
        let chars = hex_seed.chars().count();
        #[allow(clippy::arithmetic_side_effects)]
        let usable_chars = chars - chars % HEX_GROUP_LEN;
        let usable = hex_seed
            .char_indices()
            .nth(usable_chars)
            .map_or(hex_seed.len(), |(offset, _)| offset);
        if usable_chars != chars {
            tracing::debug!(
                dropped = chars.saturating_sub(usable_chars),
                "ignoring trailing partial hex group"
            );
        }

        let seed = HEXLOWER_PERMISSIVE
            .decode(&hex_seed.as_bytes()[..usable])
            .map_err(|e| MnemonicError::InvalidHex(e.to_string()))?;

        let table = self.wordlist.words();
        let mut words: Vec<&str> = Vec::with_capacity(
            (seed.len() / 4)
                .saturating_mul(WORDS_PER_GROUP)
                .saturating_add(CHECKSUM_WORDS),
        );
        for group in seed.chunks_exact(4) {
            let value = u32::from_le_bytes([group[0], group[1], group[2], group[3]]);
            for index in value_to_indices(value) {
                words.push(&table[index]);
            }
        }

        let first = first_checksum(&words, self.wordlist.unique_prefix_length());
        words.push(first);
        let second = second_checksum(&words, self.wordlist);
        words.push(second);

        Ok(words.join(" "))
    }

    /// Decode a mnemonic phrase back to its hex seed (lowercase).
    ///
    /// Consumes complete groups of three words and ignores any remainder.
    /// For a phrase produced by [`Codec::encode`] the remainder is exactly
    /// the two checksum words, which are not validated here; use
    /// [`Codec::decode_verified`] for that.
    ///
    /// Triples that combine to more than 32 bits cannot come from
    /// [`Codec::encode`]. Other implementations emit a truncated 9-digit
    /// group for them; this codec rejects them instead.
    ///
    /// # Errors
    ///
    /// - `MnemonicError::WordNotFound` if a consumed word is not in the wordlist
    /// - `MnemonicError::InvalidTriple` if a triple does not encode a 32-bit value
    pub fn decode(&self, phrase: &str) -> Result<String, MnemonicError> {
        let words: Vec<&str> = phrase.split(SEPARATOR).collect();
        self.decode_words(&words)
    }

    /// Check the two trailing checksum words of a full phrase.
    ///
    /// # Errors
    ///
    /// - `MnemonicError::InvalidWordCount` if the phrase is not `3k + 2` words
    /// - `MnemonicError::WordNotFound` if a data word is not in the wordlist
    /// - `MnemonicError::ChecksumMismatch` if either checksum word is wrong
    pub fn verify(&self, phrase: &str) -> Result<(), MnemonicError> {
        let words: Vec<&str> = phrase.split(SEPARATOR).collect();
        self.verified_data_words(&words).map(|_| ())
    }

    /// Verify the checksum words, then decode the data words only.
    ///
    /// # Errors
    ///
    /// Any error of [`Codec::verify`] or [`Codec::decode`].
    pub fn decode_verified(&self, phrase: &str) -> Result<String, MnemonicError> {
        let words: Vec<&str> = phrase.split(SEPARATOR).collect();
        let data = self.verified_data_words(&words)?;
        self.decode_words(data)
    }

    fn decode_words(&self, words: &[&str]) -> Result<String, MnemonicError> {
        #[allow(clippy::arithmetic_side_effects)]
        let mut out = String::with_capacity(words.len() / WORDS_PER_GROUP * HEX_GROUP_LEN);
        for (group, triple) in words.chunks_exact(WORDS_PER_GROUP).enumerate() {
            let position = group.saturating_mul(WORDS_PER_GROUP);
            let mut indices = [0u32; WORDS_PER_GROUP];
            for (offset, (slot, word)) in indices.iter_mut().zip(triple).enumerate() {
                *slot = self.index_of(word, position.saturating_add(offset))?;
            }
            let value = indices_to_value(indices)
                .ok_or(MnemonicError::InvalidTriple { position })?;
            out.push_str(&endian_swap(&HEXLOWER.encode(&value.to_be_bytes()))?);
        }
        Ok(out)
    }

    /// Returns the data words of `words` once both checksum words match.
    fn verified_data_words<'p>(
        &self,
        words: &'p [&'p str],
    ) -> Result<&'p [&'p str], MnemonicError> {
        let count = words.len();
        let data_len = count
            .checked_sub(CHECKSUM_WORDS)
            .filter(|len| len % WORDS_PER_GROUP == 0)
            .ok_or(MnemonicError::InvalidWordCount(count))?;
        let (data, checksum) = words.split_at(data_len);

        for (position, word) in data.iter().enumerate() {
            self.index_of(word, position)?;
        }

        let first = first_checksum(data, self.wordlist.unique_prefix_length());
        let mut with_first = data.to_vec();
        with_first.push(first);
        let second = second_checksum(&with_first, self.wordlist);

        if checksum != [first, second].as_slice() {
            tracing::debug!(words = count, "checksum words do not match");
            return Err(MnemonicError::ChecksumMismatch);
        }
        Ok(data)
    }

    fn index_of(&self, word: &str, position: usize) -> Result<u32, MnemonicError> {
        self.wordlist
            .word_index(word)
            .map(u32::from)
            .ok_or(MnemonicError::WordNotFound { position })
    }
}

// ── Arithmetic ─────────────────────────────────────────────────────

/// Split a 32-bit value into three word indices.
#[allow(clippy::arithmetic_side_effects)]
const fn value_to_indices(x: u32) -> [usize; WORDS_PER_GROUP] {
    let w1 = x % BASE;
    let w2 = (x / BASE + w1) % BASE;
    let w3 = (x / BASE / BASE + w2) % BASE;
    [w1 as usize, w2 as usize, w3 as usize]
}

/// Recombine three word indices, or `None` if the result exceeds 32 bits.
///
/// Indices are below [`BASE`], so the differences are taken modulo `BASE`
/// after adding `BASE` to stay non-negative.
#[allow(clippy::arithmetic_side_effects)]
fn indices_to_value([w1, w2, w3]: [u32; WORDS_PER_GROUP]) -> Option<u32> {
    let n = u64::from(BASE);
    let (w1, w2, w3) = (u64::from(w1), u64::from(w2), u64::from(w3));
    let x = w1 + n * ((n + w2 - w1) % n) + n * n * ((n + w3 - w2) % n);
    u32::try_from(x).ok()
}

/// Reverse the byte order of an 8-digit hex group: pairs at offsets 6, 4,
/// 2 and 0, in that order.
///
/// # Errors
///
/// Returns `MnemonicError::InvalidHex` unless `group` is exactly 8 ASCII
/// characters.
pub fn endian_swap(group: &str) -> Result<String, MnemonicError> {
    if group.len() != HEX_GROUP_LEN || !group.is_ascii() {
        return Err(MnemonicError::InvalidHex(format!(
            "expected {HEX_GROUP_LEN} ASCII characters, got '{group}'"
        )));
    }
    Ok([6, 4, 2, 0]
        .iter()
        .map(|&i: &usize| &group[i..i.saturating_add(2)])
        .collect())
}
