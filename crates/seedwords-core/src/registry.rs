//! Wordlist registry.
//!
//! Registration happens in two phases:
//! - startup: a [`WordlistRegistryBuilder`] validates and collects wordlists
//! - read-only: [`WordlistRegistryBuilder::build`] freezes them into a
//!   [`WordlistRegistry`], which has no mutating methods
//!
//! A frozen registry can be [`install`]ed once as the process-wide registry,
//! after which [`get_wordlist`] and [`list_wordlists`] resolve against it.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::MnemonicError;
use crate::wordlist::{Wordlist, WordlistDefinition};

// ── Builder ────────────────────────────────────────────────────────

/// Collects validated wordlists during startup.
#[derive(Debug, Default)]
pub struct WordlistRegistryBuilder {
    entries: Vec<Wordlist>,
    positions: HashMap<String, usize>,
}

impl WordlistRegistryBuilder {
    /// Empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `definition` and register it under its English language name.
    ///
    /// An existing entry with the same name is replaced in place, keeping its
    /// position in [`WordlistRegistry::list`].
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::Validation` if the definition is rejected by
    /// [`Wordlist::from_definition`]; the builder is left unchanged.
    pub fn register(
        &mut self,
        definition: WordlistDefinition,
    ) -> Result<&Wordlist, MnemonicError> {
        let wordlist = Wordlist::from_definition(definition)?;
        Ok(self.insert(wordlist))
    }

    /// Register an already validated wordlist.
    pub fn insert(&mut self, wordlist: Wordlist) -> &Wordlist {
        let name = wordlist.english_language_name().to_owned();
        let position = if let Some(&position) = self.positions.get(&name) {
            tracing::debug!(language = %name, "replacing registered wordlist");
            self.entries[position] = wordlist;
            position
        } else {
            tracing::debug!(language = %name, "registered wordlist");
            let position = self.entries.len();
            self.entries.push(wordlist);
            self.positions.insert(name, position);
            position
        };
        &self.entries[position]
    }

    /// Freeze the collected wordlists into a read-only registry.
    #[must_use]
    pub fn build(self) -> WordlistRegistry {
        WordlistRegistry {
            entries: self.entries.into_boxed_slice(),
            positions: self.positions,
        }
    }
}

// ── Registry ───────────────────────────────────────────────────────

/// Read-only mapping from English language name to [`Wordlist`].
#[derive(Debug)]
pub struct WordlistRegistry {
    entries: Box<[Wordlist]>,
    positions: HashMap<String, usize>,
}

impl WordlistRegistry {
    /// Wordlist registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `MnemonicError::NotFound` if no wordlist has that name.
    pub fn lookup(&self, name: &str) -> Result<&Wordlist, MnemonicError> {
        self.positions
            .get(name)
            .and_then(|&position| self.entries.get(position))
            .ok_or_else(|| MnemonicError::NotFound(name.to_owned()))
    }

    /// Registered names, in registration order.
    ///
    /// The iterator is `Clone`, so it can be restarted.
    pub fn list(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.entries.iter().map(Wordlist::english_language_name)
    }

    /// Number of registered wordlists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Process-wide registry ──────────────────────────────────────────

static INSTALLED: OnceLock<WordlistRegistry> = OnceLock::new();

/// Install `registry` as the process-wide registry.
///
/// # Errors
///
/// Returns `MnemonicError::RegistryAlreadyInstalled` if a registry was
/// installed before; the existing one is kept.
pub fn install(registry: WordlistRegistry) -> Result<&'static WordlistRegistry, MnemonicError> {
    let names = registry.len();
    INSTALLED
        .set(registry)
        .map_err(|_| MnemonicError::RegistryAlreadyInstalled)?;
    tracing::debug!(wordlists = names, "installed wordlist registry");
    INSTALLED.get().ok_or(MnemonicError::RegistryAlreadyInstalled)
}

/// The process-wide registry, if one was installed.
#[must_use]
pub fn installed() -> Option<&'static WordlistRegistry> {
    INSTALLED.get()
}

/// Look up `name` in the process-wide registry.
///
/// # Errors
///
/// Returns `MnemonicError::NotFound` if no registry is installed or the
/// name is not registered.
pub fn get_wordlist(name: &str) -> Result<&'static Wordlist, MnemonicError> {
    installed()
        .ok_or_else(|| MnemonicError::NotFound(name.to_owned()))?
        .lookup(name)
}

/// Names in the process-wide registry; empty if none is installed.
pub fn list_wordlists() -> impl Iterator<Item = &'static str> + Clone {
    installed().into_iter().flat_map(WordlistRegistry::list)
}
