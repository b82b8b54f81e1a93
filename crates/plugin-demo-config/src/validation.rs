//! Configuration validation

use plugin_demo::{PluginRoot, Root};

use crate::{Config, ConfigError, Result};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_version(&config.version)?;
    validate_import_name(&config.plugin.import_name)?;

    if let Some(ref level) = config.log_level {
        validate_log_level(level)?;
    }

    // The plugin decides what it accepts from the host.
    Root::new()
        .configure(&config.host)
        .map_err(ConfigError::HostRejected)?;

    Ok(())
}

fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(ConfigError::Invalid("version cannot be empty".to_string()));
    }

    if !version.starts_with("1.") && version != "1" {
        return Err(ConfigError::Invalid(format!(
            "version {} is not supported (expected 1.x)",
            version
        )));
    }

    Ok(())
}

fn validate_import_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfigError::Invalid(
            "plugin.import_name cannot be empty".to_string(),
        ));
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(ConfigError::InvalidValue {
            field: "plugin.import_name".to_string(),
            value: format!("{} (unexpected character {:?})", name, bad),
        });
    }

    Ok(())
}

pub(crate) fn validate_log_level(level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "log_level".to_string(),
            value: level.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_config;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&default_config()).is_ok());
    }

    #[test]
    fn test_import_name_characters() {
        assert!(validate_import_name("plugin-demo").is_ok());
        assert!(validate_import_name("env_tools2").is_ok());
        assert!(validate_import_name("").is_err());
        assert!(matches!(
            validate_import_name("bad name"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_log_levels() {
        for level in ["trace", "DEBUG", "info", "warn", "error"] {
            assert!(validate_log_level(level).is_ok(), "{level} should be accepted");
        }
        assert!(validate_log_level("verbose").is_err());
    }

    #[test]
    fn test_import_name_checked_with_config() {
        let mut config = default_config();
        config.plugin.import_name = "env tools".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
