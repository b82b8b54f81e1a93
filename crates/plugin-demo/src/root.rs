//! The dispatch table: lookup keys to native operations

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    core::{HostConfig, Namespace, PluginRoot},
    error::{PluginError, Result},
    ops,
    value::Value,
};

/// Key not present in the dispatch table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown key: {0}")]
pub struct UnknownKey(pub String);

/// Function keys the plugin answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKey {
    /// `getallenvs()`
    GetAllEnvs,
    /// `getenv(name)`
    GetEnv,
    /// `getfile(path)`
    GetFile,
    /// `test()`
    Test,
}

impl FunctionKey {
    /// Every function key, in listing order
    pub const ALL: [FunctionKey; 4] = [
        FunctionKey::GetAllEnvs,
        FunctionKey::GetEnv,
        FunctionKey::GetFile,
        FunctionKey::Test,
    ];

    /// Key as seen by the host
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionKey::GetAllEnvs => "getallenvs",
            FunctionKey::GetEnv => "getenv",
            FunctionKey::GetFile => "getfile",
            FunctionKey::Test => "test",
        }
    }

    /// Number of arguments the function takes
    pub fn arity(&self) -> usize {
        match self {
            FunctionKey::GetAllEnvs | FunctionKey::Test => 0,
            FunctionKey::GetEnv | FunctionKey::GetFile => 1,
        }
    }
}

impl FromStr for FunctionKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FunctionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property keys the plugin answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// `envs`
    Envs,
    /// `now`
    Now,
    /// `pwd`
    Pwd,
}

impl PropertyKey {
    /// Every property key, in listing order
    pub const ALL: [PropertyKey; 3] = [PropertyKey::Envs, PropertyKey::Now, PropertyKey::Pwd];

    /// Key as seen by the host
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKey::Envs => "envs",
            PropertyKey::Now => "now",
            PropertyKey::Pwd => "pwd",
        }
    }

    /// Compute the property
    pub fn read(&self) -> Result<Value> {
        match self {
            PropertyKey::Envs => Ok(Value::Map(ops::get_all_envs())),
            PropertyKey::Now => Ok(Value::Timestamp(ops::now())),
            PropertyKey::Pwd => Ok(Value::String(ops::pwd()?)),
        }
    }
}

impl FromStr for PropertyKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        PropertyKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved function, ready to be called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Function {
    key: FunctionKey,
}

impl Function {
    /// Function for a known key
    pub fn new(key: FunctionKey) -> Self {
        Self { key }
    }

    /// Key this function was resolved from
    pub fn key(&self) -> FunctionKey {
        self.key
    }

    /// Name as seen by the host
    pub fn name(&self) -> &'static str {
        self.key.as_str()
    }

    /// Number of arguments expected
    pub fn arity(&self) -> usize {
        self.key.arity()
    }

    /// Invoke the function
    ///
    /// Arguments are checked before anything runs. Once running, the
    /// operation itself never fails: missing data comes back as `Ok(None)`.
    pub fn call(&self, args: &[Value]) -> Result<Option<Value>> {
        if args.len() != self.arity() {
            return Err(PluginError::Arity {
                function: self.name().to_string(),
                expected: self.arity(),
                got: args.len(),
            });
        }

        tracing::trace!(function = self.name(), "calling");

        let result = match self.key {
            FunctionKey::GetAllEnvs => Some(Value::Map(ops::get_all_envs())),
            FunctionKey::GetEnv => Some(Value::String(ops::get_env(self.string_arg(args, 0)?))),
            FunctionKey::GetFile => ops::get_file(self.string_arg(args, 0)?).map(Value::File),
            FunctionKey::Test => Some(Value::Timestamp(ops::test_record())),
        };

        Ok(result)
    }

    fn string_arg<'a>(&self, args: &'a [Value], index: usize) -> Result<&'a str> {
        let arg = &args[index];
        arg.as_str().ok_or_else(|| PluginError::ArgumentType {
            function: self.name().to_string(),
            index,
            expected: "string",
            got: arg.kind(),
        })
    }
}

/// The plugin's root namespace
///
/// Holds no state; one instance can serve every concurrent lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Root;

impl Root {
    /// Create the root namespace
    pub fn new() -> Self {
        Root
    }

    /// Supported function keys
    pub fn function_keys() -> impl Iterator<Item = &'static str> {
        FunctionKey::ALL.into_iter().map(|key| key.as_str())
    }

    /// Supported property keys
    pub fn property_keys() -> impl Iterator<Item = &'static str> {
        PropertyKey::ALL.into_iter().map(|key| key.as_str())
    }
}

impl Namespace for Root {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let Ok(property) = key.parse::<PropertyKey>() else {
            tracing::debug!("Unknown property: {}", key);
            return Ok(None);
        };

        tracing::debug!(property = property.as_str(), "property lookup");
        property.read().map(Some)
    }

    fn func(&self, key: &str) -> Option<Function> {
        match key.parse::<FunctionKey>() {
            Ok(function) => {
                tracing::debug!(function = function.as_str(), "function lookup");
                Some(Function::new(function))
            }
            Err(_) => {
                tracing::debug!("Unknown function: {}", key);
                None
            }
        }
    }
}

impl PluginRoot for Root {
    fn configure(&self, config: &HostConfig) -> Result<()> {
        for key in config.keys() {
            tracing::warn!("Ignoring unsupported configuration key: {}", key);
        }
        Ok(())
    }
}
