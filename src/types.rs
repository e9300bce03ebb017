//! Core types for the export pipeline.
//!
//! Documents coming out of the store are converted into an ordered,
//! typed key/value model before any pipeline step touches them.

use std::fmt::Display;

use serde::Serialize;

/// Metadata field naming the language of a document. Stripped by the
/// language matcher, never exported.
pub const LANG_FIELD: &str = "lang";

/// Identity field of a stored document. Excluded by the flattener, but
/// counted by the parity check (both language variants carry one).
pub const ID_FIELD: &str = "_id";

/// A translatable value. Only strings and numbers are allowed in
/// language documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

/// One stored document: an ordered mapping from field name to value,
/// preserving the store's natural enumeration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: Vec<(String, Value)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    /// Removes the first field with the given name, keeping the order of
    /// the remaining fields.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.fields.iter().position(|(k, _)| k.as_str() == key)?;
        Some(self.fields.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Document {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One flattened localization entry: `{collection}_{key}` plus the raw
/// value. Accumulated per language across all collections, in collection
/// order, and handed to the format emitters.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    pub key: String,
    pub value: Value,
}

impl FlatEntry {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        FlatEntry {
            key: key.into(),
            value: value.into(),
        }
    }
}
