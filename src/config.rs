use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;
use crate::state::theme;

// ---------------------------------------------------------------------------
// Config file: `<config_dir>/tuiman/config.toml`. Every key is optional.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Name in the theme registry, e.g. `"tokyonight"`.
    pub theme: String,
    /// `true` puts request and response side by side.
    pub split_vertical: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    #[default]
    Subsequence,
    Fuzzy,
    Ripgrep,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub matcher: MatcherKind,
    /// Binary used by the `ripgrep` matcher.
    pub rg_path: PathBuf,
    /// Upper bound for one external search, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: String::from(theme::DEFAULT_THEME),
            split_vertical: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            matcher: MatcherKind::default(),
            rg_path: PathBuf::from("rg"),
            timeout_ms: 500,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tuiman").join("config.toml"))
}

impl Config {
    /// Loads the user config. A missing file yields defaults; a malformed one is an error.
    pub fn load() -> Result<Self, AppError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.ui.theme, "xcode");
        assert!(config.ui.split_vertical);
        assert_eq!(config.search.matcher, MatcherKind::Subsequence);
        assert_eq!(config.search.timeout_ms, 500);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("[search]\nmatcher = \"ripgrep\"\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.search.matcher, MatcherKind::Ripgrep);
        assert_eq!(config.search.rg_path, PathBuf::from("rg"));
        assert_eq!(config.ui.theme, "xcode");
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
[ui]
theme = "sonokai"
split_vertical = false

[search]
matcher = "fuzzy"
rg_path = "/usr/local/bin/rg"
timeout_ms = 50
"#,
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.ui.theme, "sonokai");
        assert!(!config.ui.split_vertical);
        assert_eq!(config.search.matcher, MatcherKind::Fuzzy);
        assert_eq!(config.search.rg_path, PathBuf::from("/usr/local/bin/rg"));
        assert_eq!(config.search.timeout_ms, 50);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let file = write_config("[search]\nmatcher = \"grep\"\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }
}
