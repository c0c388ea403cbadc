//! Verb tables loaded from configuration files
//!
//! A verb table fixes the substitution of every verb, which is what the command-line tool
//! needs. Tables are written in YAML (or JSON when the file ends in `.json`):
//!
//! ```yaml
//! prefix: "$"
//! verbs:
//!   n: "world"
//!   d: "42"
//! ```
//!
//! The prefix is optional and defaults to [DEFAULT_PREFIX](crate::verb::DEFAULT_PREFIX).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::verb::{Builder, FormatError, Formatter};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML verb table: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON verb table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fixed substitutions for a set of verbs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerbTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<char>,
    #[serde(default)]
    pub verbs: BTreeMap<char, String>,
}

impl VerbTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a table from disk. Files ending in `.json` are parsed as JSON, anything else as YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let table = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_yaml_str(&source)?
        };

        tracing::debug!(
            path = %path.display(),
            verbs = table.verbs.len(),
            "loaded verb table"
        );

        Ok(table)
    }

    /// Add or replace the substitution for `verb`.
    pub fn insert(&mut self, verb: char, text: impl Into<String>) {
        self.verbs.insert(verb, text.into());
    }

    /// A builder with this table's prefix and every verb of the table registered.
    pub fn builder(&self) -> Builder {
        let mut builder = Builder::new();
        if let Some(prefix) = self.prefix {
            builder.set_prefix(prefix);
        }

        builder.with_verbs(self.verbs.keys().copied())
    }
}

impl Formatter for VerbTable {
    fn format(&self, verb: char) -> Result<String, FormatError> {
        self.verbs
            .get(&verb)
            .cloned()
            .ok_or_else(|| format!("no substitution for verb \"{verb}\"").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_str() {
        let table = VerbTable::from_yaml_str("prefix: \"$\"\nverbs:\n  n: world\n  d: \"42\"\n")
            .unwrap();

        assert_eq!(table.prefix, Some('$'));
        assert_eq!(table.verbs.get(&'n').map(String::as_str), Some("world"));
        assert_eq!(table.verbs.get(&'d').map(String::as_str), Some("42"));
    }

    #[test]
    fn test_from_json_str_without_prefix() {
        let table = VerbTable::from_json_str(r#"{"verbs": {"s": "X"}}"#).unwrap();
        assert_eq!(table.prefix, None);
        assert_eq!(table.builder().effective_prefix(), '%');
    }

    #[test]
    fn test_multi_char_verb_is_rejected() {
        assert!(matches!(
            VerbTable::from_yaml_str("verbs:\n  ab: x\n"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(matches!(
            VerbTable::from_json_str(r#"{"verbs": {}, "width": 3}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = VerbTable::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read does/not/exist.yaml"));
    }

    #[test]
    fn test_builder_registers_table_verbs() {
        let mut table = VerbTable::new();
        table.insert('s', "X");
        table.insert('d', "7");

        let builder = table.builder();
        assert_eq!(builder.verbs(), &['d', 's']);
    }

    #[test]
    fn test_table_as_formatter() {
        let mut table = VerbTable::new();
        table.insert('s', "X");
        table.insert('d', "7");

        let mut format_fn = table.builder().build();
        assert_eq!(format_fn.format("%d-%s", Some(&table)).unwrap(), "7-X");
    }

    #[test]
    fn test_missing_substitution_is_a_format_error() {
        let table = VerbTable::new();
        let err = table.format('x').unwrap_err();
        assert_eq!(err.to_string(), "no substitution for verb \"x\"");
    }
}
