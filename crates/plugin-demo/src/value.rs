//! Values handed back to the host

use std::{borrow::Cow, collections::BTreeMap, fmt};

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Environment variables keyed by name
pub type EnvironmentMap = BTreeMap<String, String>;

/// Result of a lookup
///
/// Absence is not a variant: lookups return `Option<Value>` and use `None`
/// for "no value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Plain string
    String(String),
    /// Environment snapshot
    Map(EnvironmentMap),
    /// Point in time with a label
    Timestamp(TimestampRecord),
    /// Contents of a regular file
    File(FileContent),
}

impl Value {
    /// Short name of the variant, used in argument errors
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Map(_) => "map",
            Value::Timestamp(_) => "timestamp",
            Value::File(_) => "file",
        }
    }

    /// Borrow the string payload
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the environment map payload
    pub fn as_map(&self) -> Option<&EnvironmentMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Borrow the timestamp payload
    pub fn as_timestamp(&self) -> Option<&TimestampRecord> {
        match self {
            Value::Timestamp(t) => Some(t),
            _ => None,
        }
    }

    /// Borrow the file payload
    pub fn as_file(&self) -> Option<&FileContent> {
        match self {
            Value::File(f) => Some(f),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<EnvironmentMap> for Value {
    fn from(m: EnvironmentMap) -> Self {
        Value::Map(m)
    }
}

impl From<TimestampRecord> for Value {
    fn from(t: TimestampRecord) -> Self {
        Value::Timestamp(t)
    }
}

impl From<FileContent> for Value {
    fn from(f: FileContent) -> Self {
        Value::File(f)
    }
}

/// A point in time plus an optional human-readable label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimestampRecord {
    /// Instant the record was taken
    pub time: DateTime<Utc>,
    /// Label, empty when none was attached
    pub message: String,
}

impl TimestampRecord {
    /// Record the current time with the given label
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            time: Utc::now(),
            message: message.into(),
        }
    }

    /// Record the current time without a label
    pub fn unlabeled() -> Self {
        Self::now(String::new())
    }
}

/// Raw bytes of a file
///
/// The bytes are kept exactly as read. [`FileContent::as_text`] decodes them,
/// replacing invalid UTF-8 sequences.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct FileContent(Vec<u8>);

impl FileContent {
    /// Wrap raw bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Text view of the bytes
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Number of bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the file was empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FileContent").field(&self.as_text()).finish()
    }
}

impl Serialize for FileContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_text())
    }
}

impl From<Vec<u8>> for FileContent {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
