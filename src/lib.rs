#![forbid(unsafe_code)]
//! Exports localization strings from a document store into platform
//! resource files.
//!
//! Every collection in the store holds one document per language. The
//! export pipeline pairs the source and target language documents of each
//! collection, checks that both expose the same number of properties,
//! flattens them into a `{collection}_{key}` namespace, and writes one
//! artifact per language in the format of the selected platform:
//!
//! - **web**: a merged JSON object (`localization-en.json`)
//! - **android**: a `strings.xml` resource file (`localization-en.xml`)
//! - **ios**: an Apple `.strings` file (`Localizable_EN.strings`)
//!
//! The document store and the filesystem are collaborators behind seams
//! (`store::DocumentStore`, `formats::Emitter`); the pipeline itself is
//! stateless and rebuilt from the store on every run.

pub mod config;
pub mod error;
pub mod export;
pub mod formats;
pub mod store;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    config::{Config, Platform},
    error::Error,
    types::{Document, FlatEntry, Value},
};
