pub mod call;
pub mod get;
pub mod list;
pub mod validate;

use plugin_demo::Plugin;
use plugin_demo_config::OutputConfig;

/// What every lookup command needs
pub struct Session {
    pub plugin: Plugin,
    pub output: OutputConfig,
    /// Name policies import the plugin under
    pub import_name: String,
}
