use crate::constants::highlight::{MODERATE_GAP, STRONG_GAP};
use crate::constants::{DEFAULT_LOG_FILE_NAME, DEFAULT_MAX_INPUT_BYTES, env_vars};
use crate::error::AppError;
use crate::teams::AliasTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
/// Every field is optional in the file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Directory for exported charts. Defaults to the current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// Largest accepted size of each pasted input, in bytes.
    pub max_input_bytes: usize,
    /// Confidence gap (percentage points) at which a row is drawn as a strong play.
    pub highlight_strong_gap: f64,
    /// Confidence gap (percentage points) at which a row is drawn as a moderate play.
    pub highlight_moderate_gap: f64,
    /// Extra schedule-name to ranking-table-name aliases, merged over the built-in table.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            output_dir: None,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            highlight_strong_gap: STRONG_GAP,
            highlight_moderate_gap: MODERATE_GAP,
            aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the defaults.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `ATS_CHART_LOG_FILE` - Override log file path
    /// - `ATS_CHART_OUTPUT_DIR` - Override export directory
    /// - `ATS_CHART_MAX_INPUT_BYTES` - Override input size limit
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - The file could not be read, parsed or validated
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies the `ATS_CHART_*` environment overrides. Unparseable numbers are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = Some(output_dir);
        }

        if let Some(max_input_bytes) = std::env::var(env_vars::MAX_INPUT_BYTES)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.max_input_bytes = max_input_bytes;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// The built-in alias table with this config's aliases merged over it.
    pub fn alias_table(&self) -> AliasTable {
        AliasTable::standard().with_overrides(&self.aliases)
    }

    /// Directory where `--export` writes chart files.
    pub fn export_dir(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .map_or_else(|| PathBuf::from("."), PathBuf::from)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using default settings)");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{DEFAULT_LOG_FILE_NAME}");
            println!("(Default location)");
        }
        println!("────────────────────────────────────");
        println!("Export Directory:");
        println!("{}", config.export_dir().display());
        println!("────────────────────────────────────");
        println!("Input Size Limit:");
        println!("{} bytes", config.max_input_bytes);
        println!("────────────────────────────────────");
        println!("Highlight Thresholds:");
        println!(
            "strong >= {:.1}, moderate >= {:.1}",
            config.highlight_strong_gap, config.highlight_moderate_gap
        );
        println!("────────────────────────────────────");
        println!("Custom Aliases:");
        if config.aliases.is_empty() {
            println!("(none)");
        } else {
            for (name, target) in &config.aliases {
                println!("{name} -> {target}");
            }
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        let mut aliases = BTreeMap::new();
        aliases.insert("UConn".to_string(), "Connecticut".to_string());
        Config {
            log_file_path: Some("/custom/log/path".to_string()),
            output_dir: Some("/charts".to_string()),
            max_input_bytes: 4096,
            highlight_strong_gap: 40.0,
            highlight_moderate_gap: 20.0,
            aliases,
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
log_file_path = "/custom/log/path"
output_dir = "/charts"
max_input_bytes = 4096
highlight_strong_gap = 40.0
highlight_moderate_gap = 20.0

[aliases]
UConn = "Connecticut"
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config, sample_config());
    }

    #[tokio::test]
    async fn test_config_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "output_dir = \"/charts\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config.output_dir, Some("/charts".to_string()));
        assert_eq!(config.log_file_path, None);
        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
        assert_eq!(config.highlight_strong_gap, STRONG_GAP);
        assert!(config.aliases.is_empty());
    }

    #[tokio::test]
    async fn test_config_empty_file_gives_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("empty_config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let original_config = sample_config();
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();
        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[tokio::test]
    async fn test_config_save_creates_nested_directories() {
        let temp_dir = tempdir().unwrap();
        let nested_path = temp_dir
            .path()
            .join("level1")
            .join("ats_chart")
            .join("config.toml");
        let nested_path_str = nested_path.to_string_lossy();

        Config::default().save_to_path(&nested_path_str).await.unwrap();
        assert!(nested_path.exists());
    }

    #[test]
    fn test_config_default_serialization_skips_unset_fields() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(!toml_string.contains("output_dir"));
        assert!(!toml_string.contains("aliases"));
        assert!(toml_string.contains("max_input_bytes"));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");
        let config_path_str = config_path.to_string_lossy();

        let malformed_content = r#"
output_dir = "/charts"
[invalid_section
malformed = "data
"#;
        tokio::fs::write(&config_path, malformed_content)
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path_str).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_wrong_field_type() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("typed_config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "max_input_bytes = \"lots\"\n")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path_str).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_with_extra_fields() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("extra_fields_config.toml");
        let config_path_str = config_path.to_string_lossy();

        let extra_fields_content = r#"
output_dir = "/charts"
extra_field = "this should be ignored"
another_extra = 123
"#;
        tokio::fs::write(&config_path, extra_fields_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config.output_dir, Some("/charts".to_string()));
    }

    #[test]
    fn test_config_validation_valid_configs() {
        let valid_configs = vec![
            Config::default(),
            Config {
                log_file_path: None,
                ..sample_config()
            },
            Config {
                highlight_strong_gap: 30.0,
                highlight_moderate_gap: 30.0,
                ..Config::default()
            },
            Config {
                log_file_path: Some("ats_chart.log".to_string()),
                ..Config::default()
            },
        ];

        for config in valid_configs {
            assert!(
                config.validate().is_ok(),
                "Config should be valid: {config:?}"
            );
        }
    }

    #[test]
    fn test_config_validation_invalid_configs() {
        let mut empty_alias = BTreeMap::new();
        empty_alias.insert("Ole Miss".to_string(), " ".to_string());

        let invalid_configs = vec![
            Config {
                max_input_bytes: 0,
                ..Config::default()
            },
            Config {
                highlight_strong_gap: f64::NAN,
                ..Config::default()
            },
            Config {
                highlight_moderate_gap: -1.0,
                ..Config::default()
            },
            Config {
                highlight_strong_gap: 20.0,
                highlight_moderate_gap: 30.0,
                ..Config::default()
            },
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
            Config {
                output_dir: Some("  ".to_string()),
                ..Config::default()
            },
            Config {
                aliases: empty_alias,
                ..Config::default()
            },
        ];

        for config in invalid_configs {
            let result = config.validate();
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "Config should be invalid: {config:?}"
            );
        }
    }

    #[test]
    fn test_alias_table_merges_user_entries() {
        let mut config = Config::default();
        config
            .aliases
            .insert("Ole Miss".to_string(), "Ole Miss Rebels".to_string());
        config
            .aliases
            .insert("UConn".to_string(), "Connecticut".to_string());

        let aliases = config.alias_table();
        assert_eq!(aliases.get("Ole Miss"), Some("Ole Miss Rebels"));
        assert_eq!(aliases.get("UConn"), Some("Connecticut"));
        assert_eq!(aliases.get("Michigan State"), Some("Michigan St"));
    }

    #[test]
    fn test_export_dir_defaults_to_current_directory() {
        assert_eq!(Config::default().export_dir(), PathBuf::from("."));
        assert_eq!(sample_config().export_dir(), PathBuf::from("/charts"));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        unsafe {
            std::env::set_var(env_vars::LOG_FILE, "/env/log/path.log");
            std::env::set_var(env_vars::OUTPUT_DIR, "/env/charts");
            std::env::set_var(env_vars::MAX_INPUT_BYTES, "2048");
        }

        let mut config = sample_config();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::OUTPUT_DIR);
            std::env::remove_var(env_vars::MAX_INPUT_BYTES);
        }

        assert_eq!(config.log_file_path, Some("/env/log/path.log".to_string()));
        assert_eq!(config.output_dir, Some("/env/charts".to_string()));
        assert_eq!(config.max_input_bytes, 2048);
    }

    #[test]
    #[serial]
    fn test_unparseable_size_override_is_ignored() {
        unsafe {
            std::env::set_var(env_vars::MAX_INPUT_BYTES, "a lot");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::MAX_INPUT_BYTES);
        }

        assert_eq!(config.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("ats_chart"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("ats_chart"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
