//! Key layout tables for the on-screen keyboard.
//!
//! This crate maps physical key positions to per-language content:
//! - `KeyEntry` - a base/shifted character pair, or a control-key label
//! - `Layout` - one language's complete table, kept in board order so the
//!   rendering layer can lay out the widget by iterating it
//! - `UnmappedKey` - the table-gap error surfaced by lookups

mod tables;

use thiserror::Error;

pub use klava_core::{KeyCode, Language};

/// One key's content in a language table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEntry {
    /// Printable key: base character and its shifted variant
    Char { base: char, shifted: char },
    /// Non-printable key carrying only a display label
    Control(&'static str),
}

impl KeyEntry {
    pub(crate) const fn pair(base: char, shifted: char) -> Self {
        KeyEntry::Char { base, shifted }
    }

    pub(crate) const fn control(label: &'static str) -> Self {
        KeyEntry::Control(label)
    }

    /// Whether this key produces text.
    pub fn is_char(&self) -> bool {
        matches!(self, KeyEntry::Char { .. })
    }

    /// Caption for the rendering layer: the control label, or the base
    /// character for printable keys.
    pub fn label(&self) -> String {
        match self {
            KeyEntry::Char { base, .. } => base.to_string(),
            KeyEntry::Control(label) => (*label).to_string(),
        }
    }
}

/// A physical key with no entry in a language table.
///
/// Layouts are expected to cover every key on the board; hitting this
/// error means the table data is inconsistent, not that input was bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no {language} layout entry for key {code}")]
pub struct UnmappedKey {
    pub code: KeyCode,
    pub language: Language,
}

/// One language's key table in board order.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    language: Language,
    entries: &'static [(KeyCode, KeyEntry)],
}

impl Layout {
    /// The table for the given language.
    pub fn of(language: Language) -> Layout {
        let entries = match language {
            Language::En => tables::EN,
            Language::Ru => tables::RU,
        };
        Layout { language, entries }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Entry for a physical key, if the table maps it.
    pub fn entry(&self, code: KeyCode) -> Option<KeyEntry> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, entry)| *entry)
    }

    /// Entry for a physical key, or the table-gap error.
    pub fn lookup(&self, code: KeyCode) -> Result<KeyEntry, UnmappedKey> {
        self.entry(code).ok_or(UnmappedKey {
            code,
            language: self.language,
        })
    }

    /// All keys with their entries, in board order.
    pub fn keys(&self) -> impl Iterator<Item = (KeyCode, KeyEntry)> + '_ {
        self.entries.iter().copied()
    }
}
