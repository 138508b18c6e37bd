//! Frontend Models
//!
//! The record being edited and its list rows.

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// One row of the editable list
///
/// Rows have no identity beyond their position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub some_string: String,
    /// `None` is the "not a number" sentinel, rendered as `null`
    pub some_number: Option<i64>,
    pub some_boolean: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub some_optional: Option<String>,
}

/// The top-level record being edited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub title: String,
    pub some_number: i64,
    pub include_list: bool,
    /// Ignored downstream when `include_list` is false
    pub some_list: Vec<ListItem>,
}

impl Record {
    /// Render as pretty JSON with `indent` spaces per level
    pub fn to_pretty_json(&self, indent: usize) -> Result<String, RenderError> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
