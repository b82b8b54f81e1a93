//! # plugin-demo
//!
//! A policy-host plugin exposing process information to policies through two
//! lookup contracts: function lookup (`getallenvs`, `getenv`, `getfile`,
//! `test`) and property lookup (`envs`, `now`, `pwd`).
//!
//! ## Features
//! - Stateless dispatch table, safe to share across host worker threads
//! - Typed results: every lookup yields a [`Value`] variant or an explicit absence
//! - Absence, unsupported keys and operational failures stay distinguishable
//!
//! ```no_run
//! use plugin_demo::{Namespace, Root};
//!
//! let root = Root::new();
//! let pwd = root.get("pwd")?;
//! let home = root.func("getenv").map(|f| f.call(&["HOME".into()]));
//! # Ok::<(), plugin_demo::PluginError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod ops;
pub mod plugin;
pub mod root;
pub mod value;

// Re-export main types
pub use crate::core::{HostConfig, Namespace, PluginRoot};

pub use error::{PluginError, Result};
pub use plugin::{LookupRequest, Plugin};
pub use root::{Function, FunctionKey, PropertyKey, Root};
pub use value::{EnvironmentMap, FileContent, TimestampRecord, Value};

/// Label attached to the record returned by the `test` function
pub const TEST_MESSAGE: &str = "Test message";
