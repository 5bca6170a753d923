//! Rule configuration.
//!
//! Only the action-verb vocabulary for descriptions is tunable; every other
//! limit is part of the tool-definition contract and stays fixed.
//!
//! ```toml
//! [description]
//! action_verbs = ["get", "fetch", "summarize"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verbs a description may open with when no config overrides them.
pub const DEFAULT_ACTION_VERBS: [&str; 13] = [
    "get", "fetch", "create", "update", "delete", "search", "find", "list", "show", "display",
    "calculate", "analyze", "generate",
];

/// Errors loading a lint config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("description.action_verbs must not be empty")]
    EmptyActionVerbs,
}

/// Settings for the description check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DescriptionConfig {
    /// First words that make a description action-oriented. Case-insensitive.
    pub action_verbs: Vec<String>,
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            action_verbs: DEFAULT_ACTION_VERBS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Configuration for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    pub description: DescriptionConfig,
}

impl LintConfig {
    /// Config with a custom verb vocabulary.
    pub fn with_action_verbs<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: DescriptionConfig {
                action_verbs: verbs.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.description.action_verbs.is_empty() {
            return Err(ConfigError::EmptyActionVerbs);
        }
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            verbs = config.description.action_verbs.len(),
            "loaded lint config"
        );
        Ok(config)
    }

    /// Whether `word` is one of the configured action verbs.
    pub fn is_action_verb(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.description
            .action_verbs
            .iter()
            .any(|verb| verb.to_lowercase() == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary() {
        let config = LintConfig::default();
        assert_eq!(config.description.action_verbs.len(), 13);
        for verb in DEFAULT_ACTION_VERBS {
            assert!(config.is_action_verb(verb));
        }
    }

    #[test]
    fn verbs_match_case_insensitively() {
        let config = LintConfig::default();
        assert!(config.is_action_verb("Fetch"));
        assert!(config.is_action_verb("ANALYZE"));
        assert!(!config.is_action_verb("fetches"));
        assert!(!config.is_action_verb(""));
    }

    #[test]
    fn empty_toml_is_default() {
        let config = LintConfig::from_toml_str("").expect("empty config parses");
        assert_eq!(config, LintConfig::default());
    }

    #[test]
    fn toml_overrides_verbs() {
        let config = LintConfig::from_toml_str(
            r#"
            [description]
            action_verbs = ["Summarize", "translate"]
            "#,
        )
        .expect("config parses");
        assert!(config.is_action_verb("summarize"));
        assert!(config.is_action_verb("Translate"));
        assert!(!config.is_action_verb("get"));
    }

    #[test]
    fn empty_vocabulary_is_rejected() {
        let err = LintConfig::from_toml_str("[description]\naction_verbs = []\n")
            .expect_err("empty vocabulary");
        assert!(matches!(err, ConfigError::EmptyActionVerbs));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = LintConfig::from_toml_str("[name]\nmax_len = 10\n").expect_err("unknown section");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LintConfig::load(Path::new("/nonexistent/toolcheck/config.toml"))
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/toolcheck/config.toml"));
    }
}
