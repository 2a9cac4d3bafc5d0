//! Property values and their query-string encoding

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Event properties keyed by name
pub type Properties = IndexMap<String, PropertyValue>;

/// A single heterogeneous property value
#[derive(Clone)]
pub enum PropertyValue {
    /// Value with its own textual representation, rendered via `Display`
    Custom(Arc<dyn fmt::Display + Send + Sync>),
    /// Plain string, used verbatim
    Text(String),
    /// Structured value, rendered as compact JSON
    Json(serde_json::Value),
    /// Value that failed structured serialization, kept as its debug text
    Fallback(String),
}

impl PropertyValue {
    /// Wrap a value exposing a custom textual representation
    pub fn custom<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(value))
    }

    /// Wrap any serializable value, falling back to its `Debug` text when
    /// serialization fails
    pub fn serialize<T>(value: &T) -> Self
    where
        T: Serialize + fmt::Debug + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(serde_json::Value::String(s)) => Self::Text(s),
            Ok(json) => Self::Json(json),
            Err(e) => {
                log::debug!("Property value not serializable ({}), using debug text", e);
                Self::Fallback(format!("{:?}", value))
            }
        }
    }

    /// Render the value as a single query parameter value
    pub fn encode(&self) -> String {
        match self {
            Self::Custom(value) => value.to_string(),
            Self::Text(s) => s.clone(),
            Self::Json(json) => match serde_json::to_string(json) {
                Ok(s) => strip_quotes(&s).to_string(),
                Err(_) => json.to_string(),
            },
            Self::Fallback(s) => s.clone(),
        }
    }
}

fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(value) => f.debug_tuple("Custom").field(&value.to_string()).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Json(json) => f.debug_tuple("Json").field(json).finish(),
            Self::Fallback(s) => f.debug_tuple("Fallback").field(s).finish(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Json(other),
        }
    }
}

macro_rules! impl_from_json_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(v: $ty) -> Self {
                    Self::Json(serde_json::Value::from(v))
                }
            }
        )*
    };
}

impl_from_json_scalar!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
