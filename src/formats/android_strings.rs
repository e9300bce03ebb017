//! Android `strings.xml` output format.
//!
//! One `<string>` element per entry inside a single `<resources>` root
//! with a fixed XML prolog. Values are written verbatim: existing
//! consumers receive unescaped text, so characters like `&` and `<`
//! pass through as-is. Known limitation, kept for compatibility.

use crate::{error::Error, formats::Emitter, types::FlatEntry};

const PROLOG: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// Represents one Android string-resources artifact.
#[derive(Debug, Clone, Default)]
pub struct Format {
    entries: Vec<FlatEntry>,
}

impl Format {
    pub fn from_entries(entries: Vec<FlatEntry>) -> Self {
        Format { entries }
    }
}

impl Emitter for Format {
    fn render(&self) -> Result<String, Error> {
        let mut content = String::from(PROLOG);
        content.push_str("<resources>\n");
        for entry in &self.entries {
            content.push_str(&format!(
                "<string name=\"{}\">{}</string>\n",
                entry.key, entry.value
            ));
        }
        content.push_str("</resources>\n");
        Ok(content)
    }
}
