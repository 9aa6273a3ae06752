//! Keyword table configuration.
//!
//! Dialects that add or rename keywords can describe their table in TOML
//! instead of building the parallel slices by hand:
//!
//! ```toml
//! extend_jass = true
//!
//! [keywords]
//! endfunc = "EndFunction"
//! lambda = "Function"
//! ```
//!
//! Kinds are written as [`TokenKind`] variant names. With `extend_jass` the
//! entries are layered over the built-in table, replacing any spelling they
//! share with it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KeywordTableError, KeywordTableResult};
use crate::keywords::{KeywordTable, JASS_KEYWORDS};
use crate::token::TokenKind;

/// On-disk shape of a keyword table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeywordConfig {
    /// Start from the built-in JASS + vJass table.
    #[serde(default)]
    pub extend_jass: bool,

    /// Spelling to kind. A `BTreeMap` keeps spellings in byte order.
    #[serde(default)]
    pub keywords: BTreeMap<String, TokenKind>,
}

impl KeywordConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> KeywordTableResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Builds the validated keyword table this configuration describes.
    pub fn into_table(self) -> KeywordTableResult<KeywordTable> {
        let mut entries: BTreeMap<String, TokenKind> = if self.extend_jass {
            JASS_KEYWORDS
                .iter()
                .map(|&(word, kind)| (word.to_string(), kind))
                .collect()
        } else {
            BTreeMap::new()
        };
        entries.extend(self.keywords);
        KeywordTable::from_pairs(entries)
    }
}

impl KeywordTable {
    /// Parses and validates a keyword table from TOML text.
    ///
    /// # Example
    ///
    /// ```
    /// use jassc_lex::{KeywordTable, TokenKind};
    ///
    /// let table = KeywordTable::from_toml_str(r#"
    ///     [keywords]
    ///     set = "Set"
    ///     call = "Call"
    /// "#).unwrap();
    /// assert_eq!(table.words(), ["call", "set"]);
    /// ```
    pub fn from_toml_str(text: &str) -> KeywordTableResult<Self> {
        KeywordConfig::from_toml_str(text)?.into_table()
    }

    /// Reads, parses and validates a keyword table from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> KeywordTableResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| KeywordTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading keyword table");
        Self::from_toml_str(&text)
    }
}
