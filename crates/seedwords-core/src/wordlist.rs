//! Wordlist definitions and the validated, frozen [`Wordlist`] entity.
//!
//! Word tables are supplied by the caller, either as a [`WordlistDefinition`]
//! (which may come straight out of `serde`) or as newline-delimited text via
//! [`Wordlist::from_lines`]. Validation happens once, at construction; a
//! [`Wordlist`] is immutable afterwards.

use std::collections::HashMap;

use serde::Deserialize;

use crate::codec::Codec;
use crate::error::MnemonicError;

/// Number of words in every mnemonic wordlist.
pub const WORDLIST_SIZE: usize = 1626;

// ── Definition ─────────────────────────────────────────────────────

/// Unvalidated wordlist input.
///
/// Every field is optional so that partially specified data (for example a
/// JSON document missing a key) reaches validation and is rejected with a
/// precise [`MnemonicError::Validation`] message instead of a parse error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WordlistDefinition {
    /// Native name of the language (e.g. "Español").
    pub language_name: Option<String>,
    /// English name of the language, used as the registry key.
    pub english_language_name: Option<String>,
    /// Number of leading characters per word fed to the checksum digest.
    pub unique_prefix_length: Option<usize>,
    /// The ordered word table.
    pub word_list: Option<Vec<String>>,
}

// ── Wordlist ───────────────────────────────────────────────────────

/// A validated 1626-word table for one language.
#[derive(Debug)]
pub struct Wordlist {
    language_name: String,
    english_language_name: String,
    unique_prefix_length: usize,
    words: Box<[String]>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    /// Validate a definition and freeze it into a [`Wordlist`].
    ///
    /// A missing `english_language_name` defaults to `language_name` and
    /// emits a warning.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::Validation` if:
    /// - `language_name`, `unique_prefix_length` or `word_list` is missing
    /// - `unique_prefix_length` is zero
    /// - `word_list` does not contain exactly [`WORDLIST_SIZE`] words
    /// - any word is empty or appears more than once
    pub fn from_definition(definition: WordlistDefinition) -> Result<Self, MnemonicError> {
        let WordlistDefinition {
            language_name,
            english_language_name,
            unique_prefix_length,
            word_list,
        } = definition;

        let language_name = language_name
            .ok_or_else(|| MnemonicError::Validation("missing language_name".to_owned()))?;
        let unique_prefix_length = unique_prefix_length.ok_or_else(|| {
            MnemonicError::Validation(format!(
                "missing unique_prefix_length for {language_name}"
            ))
        })?;
        let word_list = word_list.ok_or_else(|| {
            MnemonicError::Validation(format!("missing word_list for {language_name}"))
        })?;

        let english_language_name = english_language_name.unwrap_or_else(|| {
            tracing::warn!(
                language = %language_name,
                "no english_language_name, using language_name"
            );
            language_name.clone()
        });

        if word_list.len() != WORDLIST_SIZE {
            return Err(MnemonicError::Validation(format!(
                "wrong word list length for {language_name}: {}, expected {WORDLIST_SIZE}",
                word_list.len()
            )));
        }

        if unique_prefix_length == 0 {
            return Err(MnemonicError::Validation(format!(
                "unique_prefix_length must be positive for {language_name}"
            )));
        }

        let mut index = HashMap::with_capacity(WORDLIST_SIZE);
        for (i, word) in word_list.iter().enumerate() {
            if word.is_empty() {
                return Err(MnemonicError::Validation(format!(
                    "empty word at index {i} for {language_name}"
                )));
            }
            // i < WORDLIST_SIZE, which fits u16.
            let position = u16::try_from(i).map_err(|_| {
                MnemonicError::Validation(format!("index {i} out of range"))
            })?;
            if index.insert(word.clone(), position).is_some() {
                return Err(MnemonicError::Validation(format!(
                    "duplicate word '{word}' at index {i} for {language_name}"
                )));
            }
        }

        Ok(Self {
            language_name,
            english_language_name,
            unique_prefix_length,
            words: word_list.into_boxed_slice(),
            index,
        })
    }

    /// Build a wordlist from newline-delimited text, one word per line.
    ///
    /// # Errors
    ///
    /// Same as [`Wordlist::from_definition`].
    pub fn from_lines(
        language_name: &str,
        english_language_name: Option<&str>,
        unique_prefix_length: usize,
        raw: &str,
    ) -> Result<Self, MnemonicError> {
        Self::from_definition(WordlistDefinition {
            language_name: Some(language_name.to_owned()),
            english_language_name: english_language_name.map(str::to_owned),
            unique_prefix_length: Some(unique_prefix_length),
            word_list: Some(raw.lines().map(str::to_owned).collect()),
        })
    }

    /// Native language name.
    #[must_use]
    pub fn language_name(&self) -> &str {
        &self.language_name
    }

    /// English language name (the registry key).
    #[must_use]
    pub fn english_language_name(&self) -> &str {
        &self.english_language_name
    }

    /// Number of leading characters per word used by the checksum digest.
    #[must_use]
    pub const fn unique_prefix_length(&self) -> usize {
        self.unique_prefix_length
    }

    /// The ordered word table.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Word at `index`, or `None` past the end of the table.
    #[must_use]
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// 0-based position of `word` in the table.
    #[must_use]
    pub fn word_index(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    /// Returns `true` if `word` is in the table.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Mnemonic codec bound to this wordlist.
    #[must_use]
    pub const fn codec(&self) -> Codec<'_> {
        Codec::new(self)
    }
}
