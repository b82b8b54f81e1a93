//! Host-facing plugin wrapper
//!
//! Routes a host lookup to either the function or the property contract of
//! the wrapped root namespace.

use std::sync::Arc;

use crate::{
    core::{HostConfig, PluginRoot},
    error::{PluginError, Result},
    root::Root,
    value::Value,
};

/// One lookup issued by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Lookup key
    pub key: String,
    /// Call arguments; `None` makes this a property read
    pub args: Option<Vec<Value>>,
}

impl LookupRequest {
    /// Property read of `key`
    pub fn property(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            args: None,
        }
    }

    /// Call of function `key` with `args`
    pub fn call(key: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            key: key.into(),
            args: Some(args),
        }
    }

    /// Whether this request invokes a function
    pub fn is_call(&self) -> bool {
        self.args.is_some()
    }
}

/// A plugin wrapping a root namespace
#[derive(Debug)]
pub struct Plugin<R: PluginRoot = Root> {
    root: Arc<R>,
}

impl<R: PluginRoot> Clone for Plugin<R> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
        }
    }
}

impl Plugin<Root> {
    /// Plugin serving the built-in dispatch table
    pub fn builtin() -> Self {
        Self::new(Root::new())
    }
}

impl<R: PluginRoot> Plugin<R> {
    /// Wrap a root namespace
    pub fn new(root: R) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Get a reference to the root namespace
    pub fn root(&self) -> &R {
        &self.root
    }

    /// Pass a host configuration block to the root
    pub fn configure(&self, config: &HostConfig) -> Result<()> {
        self.root.configure(config)
    }

    /// Pass a configuration block given as JSON text
    ///
    /// The text must hold a JSON object; `null` counts as an empty block.
    pub fn configure_json(&self, json: &str) -> Result<()> {
        let config = match serde_json::from_str::<serde_json::Value>(json)? {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => HostConfig::new(),
            other => {
                return Err(PluginError::config(format!(
                    "expected an object, got {}",
                    json_kind(&other)
                )));
            }
        };
        self.configure(&config)
    }

    /// Resolve a single host lookup
    ///
    /// A call to an unknown function and a read of an unknown property both
    /// yield `Ok(None)`.
    pub fn lookup(&self, request: &LookupRequest) -> Result<Option<Value>> {
        tracing::trace!(key = %request.key, call = request.is_call(), "lookup");

        match &request.args {
            Some(args) => match self.root.func(&request.key) {
                Some(function) => function.call(args),
                None => Ok(None),
            },
            None => self.root.get(&request.key),
        }
    }

    /// Resolve a batch of lookups, one result per request
    pub fn lookup_all(&self, requests: &[LookupRequest]) -> Vec<Result<Option<Value>>> {
        requests.iter().map(|request| self.lookup(request)).collect()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
