//! Board configuration loaded with figment
//!
//! Precedence: built-in defaults → optional file → `PROCUREBOARD_*`
//! environment variables. The file format follows its extension: `.toml`,
//! `.json`, anything else is read as YAML. Nothing is cached; each call
//! reads fresh.

use crate::error::{KanbanError, Result};
use crate::store::YamlFileStore;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "PROCUREBOARD_";

/// Settings that shape board behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Title of the column whose tasks are treated as resolved. Overdue
    /// checks never fire for tasks in this column.
    pub terminal_column: String,

    /// Appended to the title of a duplicated task
    pub copy_suffix: String,

    /// Seed the default columns and rules on a fresh board
    pub seed_defaults: bool,

    /// Where a file-backed store keeps the board
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            terminal_column: "Completed".to_string(),
            copy_suffix: " (Copy)".to_string(),
            seed_defaults: true,
            store_path: None,
        }
    }
}

impl BoardConfig {
    /// Build the layered figment without extracting it
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(BoardConfig::default()));
        if let Some(path) = file {
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Yaml::file(path)),
            };
        }
        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load and validate configuration
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config: BoardConfig = Self::figment(file).extract()?;
        config.validate()?;
        debug!(
            terminal_column = %config.terminal_column,
            seed_defaults = config.seed_defaults,
            "board configuration loaded"
        );
        Ok(config)
    }

    /// Reject values the board cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.terminal_column.trim().is_empty() {
            return Err(KanbanError::config("terminal_column must not be empty"));
        }
        Ok(())
    }

    /// File store at `store_path`, if one is configured
    pub fn file_store(&self) -> Option<YamlFileStore> {
        self.store_path.as_deref().map(YamlFileStore::new)
    }

    /// Set the terminal column title
    pub fn with_terminal_column(mut self, title: impl Into<String>) -> Self {
        self.terminal_column = title.into();
        self
    }

    /// Enable or disable default seeding
    pub fn with_seed_defaults(mut self, seed: bool) -> Self {
        self.seed_defaults = seed;
        self
    }

    /// Set the store path
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        writeln!(file, "{}", contents).unwrap();
        file
    }

    fn yaml_file(contents: &str) -> NamedTempFile {
        config_file(".yaml", contents)
    }

    fn clear_env() {
        for key in [
            "PROCUREBOARD_TERMINAL_COLUMN",
            "PROCUREBOARD_COPY_SUFFIX",
            "PROCUREBOARD_SEED_DEFAULTS",
            "PROCUREBOARD_STORE_PATH",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = BoardConfig::load(None).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.terminal_column, "Completed");
        assert_eq!(config.copy_suffix, " (Copy)");
    }

    #[test]
    #[serial]
    fn test_yaml_file_overrides_defaults() {
        clear_env();
        let file = yaml_file("terminal_column: Done\nseed_defaults: false");

        let config = BoardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.terminal_column, "Done");
        assert!(!config.seed_defaults);
        assert_eq!(config.copy_suffix, " (Copy)");
    }

    #[test]
    #[serial]
    fn test_toml_file_by_extension() {
        clear_env();
        let file = config_file(".toml", "terminal_column = \"Done\"\ncopy_suffix = \" copy\"");

        let config = BoardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.terminal_column, "Done");
        assert_eq!(config.copy_suffix, " copy");
    }

    #[test]
    #[serial]
    fn test_json_file_by_extension() {
        clear_env();
        let file = config_file(".json", r#"{"seed_defaults": false, "store_path": "boards/main.yaml"}"#);

        let config = BoardConfig::load(Some(file.path())).unwrap();
        assert!(!config.seed_defaults);
        assert_eq!(
            config.file_store().unwrap().path(),
            Path::new("boards/main.yaml")
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        clear_env();
        let file = yaml_file("terminal_column: Done");
        std::env::set_var("PROCUREBOARD_TERMINAL_COLUMN", "Closed");

        let config = BoardConfig::load(Some(file.path()));
        clear_env();
        assert_eq!(config.unwrap().terminal_column, "Closed");
    }

    #[test]
    #[serial]
    fn test_empty_terminal_column_rejected() {
        clear_env();
        let file = yaml_file("terminal_column: \"\"");
        let result = BoardConfig::load(Some(file.path()));
        assert!(matches!(result, Err(KanbanError::Config { .. })));
    }
}
