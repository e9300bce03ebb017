//! Output format emitters.
//!
//! Each submodule exposes a `Format` struct that consumes the flattened
//! per-language entries and serializes them as one complete artifact.
//! Rendering is deterministic: identical entries (and, for `.strings`,
//! an identical generation timestamp) produce byte-identical output.

pub mod android_strings;
pub mod json;
pub mod strings;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::Error;

/// Serialization surface shared by all output formats.
pub trait Emitter {
    /// Render the artifact to its final text form.
    fn render(&self) -> Result<String, Error>;

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(self.render()?.as_bytes()).map_err(Error::Io)
    }

    /// Write to a file path, overwriting any previous artifact.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(Error::Io)
    }
}
