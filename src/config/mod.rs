use ::config::{Config, File, FileFormat};
use crate::models::AppConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Name of the settings file inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "passforge.yaml";

/// Configuration manager for loading and saving the YAML settings file.
///
/// Settings are layered: compiled defaults first, then whatever keys
/// `passforge.yaml` provides.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory holding `passforge.yaml` (created if missing)
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE_NAME),
            config_dir,
        })
    }

    /// Load the settings file.
    ///
    /// # Returns
    /// The merged AppConfig, or defaults if the file doesn't exist
    pub fn load_config(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            tracing::warn!(
                "Config file not found at {}, using defaults",
                self.config_path
            );
            return Ok(AppConfig::default());
        }

        let defaults = serde_yaml_ng::to_string(&AppConfig::default())
            .context("Failed to serialize default config")?;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Yaml))
            .add_source(File::new(self.config_path.as_str(), FileFormat::Yaml))
            .build()
            .and_then(Config::try_deserialize)
            .with_context(|| format!("Failed to parse config: {}", self.config_path))?;

        tracing::info!("Loaded config from {}", self.config_path);
        Ok(config)
    }

    /// Save the settings file.
    ///
    /// # Arguments
    /// * `config` - The AppConfig to save
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    /// Resolve the record store path. Relative paths stay relative to the
    /// working directory.
    pub fn store_path(&self, config: &AppConfig) -> Utf8PathBuf {
        Utf8PathBuf::from(&config.store.path)
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the settings file path.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}
