//! Top-level interface document parsing.

use crate::content::{parse_content, Content, ContentError};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DtdlError {
    #[error("failed to read interface file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse interface document: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Raw interface document as it appears on disk: metadata plus contents
/// still in JSON form. Content entries are dispatched individually so that
/// one malformed entry produces a typed error for the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceDoc {
    #[serde(default, alias = "@id")]
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub contents: Vec<Value>,
    #[serde(default)]
    pub extends: Vec<String>,
}

/// Fully-parsed interface: every content entry decoded into its variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interface {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub comment: String,
    pub contents: Vec<Content>,
    pub extends: Vec<String>,
}

impl InterfaceDoc {
    /// Decode every raw content entry, preserving document order.
    pub fn parse_contents(&self) -> Result<Vec<Content>, ContentError> {
        self.contents.iter().map(parse_content).collect()
    }
}

pub fn parse_interface_str(input: &str) -> Result<Interface, DtdlError> {
    let doc: InterfaceDoc = serde_json::from_str(input)?;
    let contents = doc.parse_contents()?;
    debug!(
        id = %doc.id,
        contents = contents.len(),
        "parsed interface document"
    );
    Ok(Interface {
        id: doc.id,
        display_name: doc.display_name,
        description: doc.description,
        comment: doc.comment,
        contents,
        extends: doc.extends,
    })
}

pub fn parse_interface_file(path: impl AsRef<Path>) -> Result<Interface, DtdlError> {
    let content = fs::read_to_string(path)?;
    parse_interface_str(&content)
}
