//! Apple `.strings` output format.
//!
//! Emits one `"{key}" = {value}` line per entry under a comment header
//! carrying the generation timestamp. Values are written without
//! surrounding quotes or a trailing semicolon, which is invalid
//! `.strings` syntax for anything containing spaces or punctuation.
//! Existing consumers depend on these exact lines, so the behavior is
//! kept and documented rather than fixed.

use indoc::indoc;

use crate::{error::Error, formats::Emitter, types::FlatEntry};

/// Represents one Apple `.strings` localization artifact.
#[derive(Debug, Clone)]
pub struct Format {
    entries: Vec<FlatEntry>,
    generated_at: String,
}

impl Format {
    /// `generated_at` is injected by the caller so that rendering stays
    /// deterministic for a given input.
    pub fn new(entries: Vec<FlatEntry>, generated_at: impl Into<String>) -> Self {
        Format {
            entries,
            generated_at: generated_at.into(),
        }
    }
}

impl Emitter for Format {
    fn render(&self) -> Result<String, Error> {
        let mut content = format!(
            indoc! {"
                /*
                  Localizable.strings
                  Generated by locship
                  on {}
                */

            "},
            self.generated_at
        );

        for entry in &self.entries {
            content.push_str(&format!("\"{}\" = {}\n", entry.key, entry.value));
        }

        Ok(content)
    }
}
