//! Default configuration values

use plugin_demo::HostConfig;

use crate::*;

/// Create a default configuration
pub fn default_config() -> Config {
    Config {
        version: "1.0".to_string(),
        plugin: default_plugin_config(),
        output: OutputConfig::default(),
        log_level: Some("info".to_string()),
        host: HostConfig::new(),
    }
}

pub fn default_plugin_config() -> PluginConfig {
    PluginConfig {
        import_name: default_import_name(),
    }
}

pub fn default_import_name() -> String {
    "plugin_demo".to_string()
}
