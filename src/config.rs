//! Configuration management module.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Backend API settings used by the login screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Accept any non-empty credentials without calling the API.
    #[serde(default = "default_offline_login")]
    pub offline_login: bool,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_offline_login() -> bool {
    true
}

/// UI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub organization_name: String,
    pub page_sizes: PageSizes,
}

/// Rows per page for each list page. Missing entries keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSizes {
    pub members: usize,
    pub departments: usize,
    pub events: usize,
    pub prayer: usize,
    pub admins: usize,
}

/// Export defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the save dialog opens in.
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Get config file path in the platform config directory.
    ///
    /// Falls back to the executable's directory when no home directory is known.
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("org", "NewJerusalem", "church-admin")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "API base URL must start with http:// or https://".to_string(),
            ));
        }
        if self.api.timeout_secs < 1 {
            return Err(ConfigError::Validation("API timeout must be at least 1 second".to_string()));
        }
        if self.ui.organization_name.trim().is_empty() {
            return Err(ConfigError::Validation("Organization name cannot be empty".to_string()));
        }
        let sizes = &self.ui.page_sizes;
        for (name, size) in [
            ("members", sizes.members),
            ("departments", sizes.departments),
            ("events", sizes.events),
            ("prayer", sizes.prayer),
            ("admins", sizes.admins),
        ] {
            if size < 1 {
                return Err(ConfigError::Validation(format!("Page size for {name} must be at least 1")));
            }
        }
        Ok(())
    }

    /// Save configuration to file, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Directory for the rolling log file.
    pub fn log_dir() -> PathBuf {
        ProjectDirs::from("org", "NewJerusalem", "church-admin")
            .map(|dirs| dirs.data_local_dir().join("logs"))
            .unwrap_or_else(|| std::env::temp_dir().join("church-admin"))
    }
}

impl ApiConfig {
    /// Full URL of the login endpoint.
    pub fn login_url(&self) -> String {
        format!("{}/api/login", self.base_url.trim_end_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: default_timeout_secs(),
            offline_login: default_offline_login(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            organization_name: "New Jerusalem of All Nations".to_string(),
            page_sizes: PageSizes::default(),
        }
    }
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            members: 10,
            departments: 9,
            events: 6,
            prayer: 8,
            admins: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_login_url_trims_trailing_slash() {
        let api = ApiConfig {
            base_url: "https://church.example.org/".to_string(),
            ..Default::default()
        };
        assert_eq!(api.login_url(), "https://church.example.org/api/login");
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "ftp://invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_page_size() {
        let mut config = AppConfig::default();
        config.ui.page_sizes.events = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_organization() {
        let mut config = AppConfig::default();
        config.ui.organization_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str("[api]\nbase_url = \"https://api.example.org\"\n").unwrap();
        assert_eq!(config.api.timeout_secs, 10);
        assert!(config.api.offline_login);
        assert_eq!(config.ui.page_sizes.prayer, 8);

        let config: AppConfig = toml::from_str("[ui]\norganization_name = \"Grace Community\"\n").unwrap();
        assert_eq!(config.ui.organization_name, "Grace Community");
        assert_eq!(config.ui.page_sizes.members, 10);
        assert!(config.validate().is_ok());

        let config: AppConfig = toml::from_str("[ui.page_sizes]\nevents = 12\n").unwrap();
        assert_eq!(config.ui.page_sizes.events, 12);
        assert_eq!(config.ui.page_sizes.departments, 9);
        assert_eq!(config.ui.organization_name, "New Jerusalem of All Nations");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.ui.organization_name = "Grace Community".to_string();
        config.save(&path).unwrap();

        match AppConfig::try_load(&path) {
            ConfigLoadResult::Loaded(loaded) => assert_eq!(loaded.ui.organization_name, "Grace Community"),
            other => panic!("unexpected load result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_and_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Missing));

        std::fs::write(&path, "this is = = not toml").unwrap();
        assert!(matches!(AppConfig::try_load(&path), ConfigLoadResult::Invalid(_)));
    }
}
