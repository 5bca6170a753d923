//! Lint config discovery.
//!
//! | Source | Path |
//! |--------|------|
//! | `--config` | as given; must exist |
//! | XDG | `$XDG_CONFIG_HOME/toolcheck/config.toml`, if present |
//! | fallback | built-in defaults |

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use toolcheck_lint::{ConfigError, LintConfig};

/// Where the config file lives when `--config` isn't given.
///
/// Uses `$XDG_CONFIG_HOME/toolcheck` or falls back to `~/.config/toolcheck`.
pub fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|d| d.config_dir().join("toolcheck").join("config.toml"))
}

/// Resolve the lint config for this run.
pub fn resolve(explicit: Option<&Path>) -> Result<LintConfig, ConfigError> {
    resolve_from(explicit, default_config_path())
}

/// Resolve with an injectable default location.
///
/// An explicit path must load. A default path that doesn't exist is not
/// an error; one that exists but is broken is.
pub fn resolve_from(
    explicit: Option<&Path>,
    default_path: Option<PathBuf>,
) -> Result<LintConfig, ConfigError> {
    if let Some(path) = explicit {
        return LintConfig::load(path);
    }

    match default_path {
        Some(path) if path.is_file() => LintConfig::load(&path),
        _ => {
            tracing::debug!("no lint config found, using defaults");
            Ok(LintConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_path_is_under_toolcheck() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("toolcheck/config.toml"));
        }
    }

    #[test]
    fn missing_default_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = resolve_from(None, Some(dir.path().join("config.toml"))).expect("defaults");
        assert_eq!(config, LintConfig::default());
        assert_eq!(resolve_from(None, None).expect("defaults"), LintConfig::default());
    }

    #[test]
    fn default_path_is_loaded_when_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[description]\naction_verbs = [\"summarize\"]\n").expect("write config");

        let config = resolve_from(None, Some(path)).expect("config loads");
        assert!(config.is_action_verb("summarize"));
        assert!(!config.is_action_verb("get"));
    }

    #[test]
    fn explicit_path_wins_and_must_exist() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.toml");
        let err = resolve_from(Some(&missing), None).expect_err("explicit path must exist");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn broken_default_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "description = 3\n").expect("write config");
        assert!(matches!(resolve_from(None, Some(path)), Err(ConfigError::Parse(_))));
    }
}
