//! Web JSON output format.
//!
//! All entries of one language merge into a single object literal,
//! pretty-printed with 2-space indentation. A duplicate qualified key
//! overwrites the earlier value but keeps the position of its first
//! insertion.

use serde_json::{Map, Value as JsonValue};

use crate::{error::Error, formats::Emitter, types::FlatEntry};

/// Represents one merged JSON localization object.
#[derive(Debug, Clone, Default)]
pub struct Format {
    object: Map<String, JsonValue>,
}

impl Format {
    pub fn from_entries(entries: Vec<FlatEntry>) -> Result<Self, Error> {
        let mut object = Map::new();
        for entry in entries {
            object.insert(entry.key, serde_json::to_value(&entry.value)?);
        }
        Ok(Format { object })
    }
}

impl Emitter for Format {
    fn render(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.object)?)
    }
}
