//! Configuration loader with multiple source support

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError, OutputFormat, Result, validation};

/// Configuration loader that supports multiple sources
pub struct ConfigLoader {
    search_paths: Vec<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: default_search_paths(),
            env_prefix: "PLUGIN_DEMO".to_string(),
        }
    }

    /// Create a loader with no search paths
    pub fn empty() -> Self {
        Self {
            search_paths: Vec::new(),
            env_prefix: "PLUGIN_DEMO".to_string(),
        }
    }

    /// Add a search path
    pub fn add_search_path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Set environment variable prefix
    pub fn set_env_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all available sources
    pub fn load(&self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(file_config) = self.load_from_file()? {
            config.merge(file_config)?;
        }

        self.apply_env_overrides(&mut config)?;

        config.validate()?;
        Ok(config)
    }

    /// Load a specific file, then apply environment overrides
    pub fn load_with_file<P: AsRef<Path>>(&self, path: P) -> Result<Config> {
        let mut config = self.load_from_specific_file(path)?;
        self.apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_specific_file<P: AsRef<Path>>(&self, path: P) -> Result<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        match extension {
            "yaml" | "yml" => Config::from_yaml_file(path),
            "json" => Config::from_json_file(path),
            _ => Err(ConfigError::UnsupportedFile(path.display().to_string())),
        }
    }

    /// Load configuration from the first found config file
    fn load_from_file(&self) -> Result<Option<Config>> {
        let config_names = [
            "plugin-demo.yaml",
            "plugin-demo.yml",
            "plugin-demo.json",
            ".plugin-demo.yaml",
            ".plugin-demo.yml",
            ".plugin-demo.json",
        ];

        for dir in &self.search_paths {
            for name in &config_names {
                let path = dir.join(name);
                if path.exists() {
                    tracing::debug!("Loading config from: {}", path.display());
                    return self.load_from_specific_file(path).map(Some);
                }
            }
        }

        Ok(None)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, config: &mut Config) -> Result<()> {
        if let Ok(format) = env::var(format!("{}_OUTPUT_FORMAT", self.env_prefix)) {
            config.output.format = format.parse::<OutputFormat>()?;
        }

        if let Ok(pretty) = env::var(format!("{}_PRETTY", self.env_prefix)) {
            config.output.pretty = match pretty.to_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: format!("{}_PRETTY", self.env_prefix),
                        value: pretty,
                    });
                }
            };
        }

        if let Ok(log_level) = env::var(format!("{}_LOG_LEVEL", self.env_prefix)) {
            validation::validate_log_level(&log_level)?;
            config.log_level = Some(log_level);
        }

        if let Ok(import_name) = env::var(format!("{}_IMPORT_NAME", self.env_prefix)) {
            config.plugin.import_name = import_name;
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Get default configuration search paths
fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![env::current_dir().unwrap_or_default()];

    if let Ok(config_dir) = env::var("PLUGIN_DEMO_CONFIG_DIR") {
        paths.push(PathBuf::from(config_dir));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join("plugin-demo"));
    }

    if let Some(config_home) = dirs::config_dir() {
        paths.push(config_home.join("plugin-demo"));
    }

    paths.push(PathBuf::from("/etc/plugin-demo"));

    paths
}
