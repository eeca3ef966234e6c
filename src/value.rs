//! Cell value types and their string encoding

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::Configuration;

/// A single cell's logical value
///
/// Encoding is total: every variant renders to a string under any
/// [`Configuration`]. Non-finite floats use Rust's canonical tokens
/// (`NaN`, `inf`, `-inf`).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free-form text, emitted unchanged (before escaping)
    Text(String),
    /// A UTC timestamp, rendered per the configured date strategy
    DateTime(DateTime<Utc>),
    /// A unique identifier, rendered in hyphenated hex form
    Uuid(Uuid),
    /// A signed integer, rendered in base 10 without grouping
    Int(i64),
    /// A floating point number, rendered via `f64::to_string`
    Float(f64),
    /// A boolean, rendered per the configured bool strategy
    Bool(bool),
    /// An optional value: absent renders as the empty string,
    /// present delegates to the wrapped value
    Optional(Option<Box<Value>>),
}

impl Value {
    /// Render the raw (unescaped) string form of this value
    pub fn encode(&self, config: &Configuration) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::DateTime(dt) => config.date_strategy.format(*dt),
            Value::Uuid(id) => id.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Bool(b) => {
                let (true_token, false_token) = config.bool_strategy.tokens();
                let token = if *b { true_token } else { false_token };
                token.to_string()
            }
            Value::Optional(opt) => match opt {
                Some(inner) => inner.encode(config),
                None => String::new(),
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<Uuid> for Value {
    fn from(id: Uuid) -> Self {
        Value::Uuid(id)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        Value::Optional(opt.map(|v| Box::new(v.into())))
    }
}
