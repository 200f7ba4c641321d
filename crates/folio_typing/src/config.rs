//! Folio configuration file handling
//!
//! Roles and cadences live in a `folio.toml` next to the site:
//!
//! ```toml
//! [typing]
//! roles = ["Full Stack Developer", "Logical Thinker"]
//! type_ms = 100
//! delete_ms = 50
//! end_pause_ms = 2000
//! pre_type_pause_ms = 500
//! ```
//!
//! Every key is optional.

use crate::cycler::TypingCycler;
use crate::error::{Result, TypingError};
use crate::roles::{RoleList, DEFAULT_ROLES};
use crate::timing::TypingTiming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`FolioConfig::load_from_dir`]
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub typing: TypingSection,
}

/// `[typing]` table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypingSection {
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    #[serde(default = "default_type_ms")]
    pub type_ms: u64,
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
    #[serde(default = "default_end_pause_ms")]
    pub end_pause_ms: u64,
    #[serde(default = "default_pre_type_pause_ms")]
    pub pre_type_pause_ms: u64,
}

fn default_roles() -> Vec<String> {
    DEFAULT_ROLES.iter().map(|r| r.to_string()).collect()
}

fn default_type_ms() -> u64 {
    TypingTiming::DEFAULT_TYPE_MS
}

fn default_delete_ms() -> u64 {
    TypingTiming::DEFAULT_DELETE_MS
}

fn default_end_pause_ms() -> u64 {
    TypingTiming::DEFAULT_END_PAUSE_MS
}

fn default_pre_type_pause_ms() -> u64 {
    TypingTiming::DEFAULT_PRE_TYPE_PAUSE_MS
}

impl Default for TypingSection {
    fn default() -> Self {
        Self {
            roles: default_roles(),
            type_ms: default_type_ms(),
            delete_ms: default_delete_ms(),
            end_pause_ms: default_end_pause_ms(),
            pre_type_pause_ms: default_pre_type_pause_ms(),
        }
    }
}

impl TypingSection {
    pub fn timing(&self) -> TypingTiming {
        TypingTiming::from_millis(
            self.type_ms,
            self.delete_ms,
            self.end_pause_ms,
            self.pre_type_pause_ms,
        )
    }

    /// Validate the configured roles
    pub fn role_list(&self) -> Result<RoleList> {
        RoleList::new(self.roles.iter().cloned())
    }
}

impl FolioConfig {
    /// Parse configuration from TOML text
    ///
    /// `origin` is only used in error messages.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| TypingError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TypingError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `folio.toml` from `dir`, or defaults if there is none
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(TypingError::ConfigSerialize)
    }

    /// Write this configuration as `folio.toml` in `dir`
    ///
    /// Returns the path written.
    pub fn save_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        let content = self.to_toml_string()?;
        fs::write(&path, content).map_err(|source| TypingError::ConfigWrite {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Build a cycler from the configured roles and cadence
    pub fn build_cycler(&self) -> Result<TypingCycler> {
        let roles = self.typing.role_list()?;
        Ok(TypingCycler::with_timing(roles, self.typing.timing()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(content: &str) -> Result<FolioConfig> {
        FolioConfig::from_toml_str(content, Path::new("folio.toml"))
    }

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.typing.roles.len(), DEFAULT_ROLES.len());
        assert_eq!(config.typing.timing(), TypingTiming::default());
    }

    #[test]
    fn test_partial_overrides() {
        let config = parse(
            r#"
            [typing]
            roles = ["Go", "Rust"]
            end_pause_ms = 1500
            "#,
        )
        .unwrap();

        assert_eq!(config.typing.roles, vec!["Go", "Rust"]);
        let timing = config.typing.timing();
        assert_eq!(timing.end_pause, Duration::from_millis(1500));
        assert_eq!(timing.type_delay, Duration::from_millis(100));

        let cycler = config.build_cycler().unwrap();
        assert_eq!(cycler.roles().len(), 2);
        assert_eq!(cycler.timing().end_pause, Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse("[typing]\ntype_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, TypingError::ConfigParse { .. }));
        assert!(err.to_string().contains("folio.toml"));
    }

    #[test]
    fn test_empty_roles_fail_at_build() {
        let config = parse("[typing]\nroles = []").unwrap();
        assert!(matches!(
            config.build_cycler().unwrap_err(),
            TypingError::EmptyRoleList
        ));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = temp_dir("load");
        fs::write(
            dir.join(CONFIG_FILE_NAME),
            "[typing]\nroles = [\"Builder\"]\ndelete_ms = 25\n",
        )
        .unwrap();

        let config = FolioConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.typing.roles, vec!["Builder"]);
        assert_eq!(config.typing.delete_ms, 25);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = temp_dir("missing");
        let config = FolioConfig::load_from_dir(&dir).unwrap();
        assert_eq!(config.typing.roles[0], "Full Stack Developer");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_then_load_from_dir() {
        let dir = temp_dir("save");
        let mut config = FolioConfig::default();
        config.typing.roles = vec!["Maintainer".to_string(), "Reviewer".to_string()];
        config.typing.pre_type_pause_ms = 300;

        let path = config.save_to_dir(&dir).unwrap();
        assert_eq!(path, dir.join(CONFIG_FILE_NAME));

        let loaded = FolioConfig::load_from_dir(&dir).unwrap();
        assert_eq!(loaded.typing.roles, vec!["Maintainer", "Reviewer"]);
        assert_eq!(loaded.typing.pre_type_pause_ms, 300);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_to_missing_dir_is_write_error() {
        let err = FolioConfig::default()
            .save_to_dir(Path::new("/nonexistent/folio"))
            .unwrap_err();
        assert!(matches!(err, TypingError::ConfigWrite { .. }));
    }

    #[test]
    fn test_load_missing_path_is_read_error() {
        let err = FolioConfig::load(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(err, TypingError::ConfigRead { .. }));
    }

    #[test]
    fn test_round_trip_keeps_overrides() {
        let mut config = FolioConfig::default();
        config.typing.roles = vec!["Tinkerer".to_string()];
        config.typing.type_ms = 80;

        let reparsed = parse(&config.to_toml_string().unwrap()).unwrap();
        assert_eq!(reparsed.typing.roles, vec!["Tinkerer"]);
        assert_eq!(reparsed.typing.type_ms, 80);
    }
}
