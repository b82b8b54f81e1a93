//! Core trait definitions for the host contracts

use serde_json::{Map, Value as JsonValue};

use crate::{error::Result, root::Function, value::Value};

/// Host configuration block, as handed over by the policy host
pub type HostConfig = Map<String, JsonValue>;

/// Something the host can read properties from and call functions on
///
/// Implementations must be safe to call from several host worker threads at
/// once without external locking.
pub trait Namespace: Send + Sync {
    /// Property lookup
    ///
    /// `Ok(None)` means the key is not recognized; `Err` means the key was
    /// recognized but computing it failed.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Function lookup, `None` when no such function exists
    fn func(&self, key: &str) -> Option<Function> {
        let _ = key;
        None
    }
}

/// Top-level namespace of a plugin
pub trait PluginRoot: Namespace {
    /// Accept the configuration block the host passes at load time
    fn configure(&self, config: &HostConfig) -> Result<()>;

    /// Build a namespace instance from host-provided data
    ///
    /// Plugins without per-instance state return `Ok(None)`.
    fn new_namespace(&self, data: &HostConfig) -> Result<Option<Box<dyn Namespace>>> {
        let _ = data;
        Ok(None)
    }
}
