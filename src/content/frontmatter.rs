//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::MalformedReason;

/// Marker line delimiting the metadata header
const MARKER: &str = "---";

/// Front-matter data from a document header
///
/// Only `layout` and `title` are recognized; anything else the author wrote
/// is kept in `extra`, in file order, for the external renderer to consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from a document's full text.
    /// Returns (front_matter, remaining_content).
    ///
    /// The header must be the first thing in the file: a `---` marker line,
    /// `key: value` pairs, and a matching closing marker. Every way the
    /// header can be broken maps to a distinct [`MalformedReason`].
    pub fn parse(content: &str) -> Result<(Self, &str), MalformedReason> {
        let content = content.trim_start();

        if !content.starts_with(MARKER) {
            return Err(MalformedReason::MissingHeader);
        }

        let rest = &content[MARKER.len()..];
        let rest = rest.trim_start_matches(['\n', '\r']);

        // The closing marker may sit on the very next line: structurally a
        // header, just one with every field missing
        if let Some(after) = rest.strip_prefix(MARKER) {
            if after.is_empty() || after.starts_with(['\n', '\r']) {
                let remaining = after.trim_start_matches(['\n', '\r']);
                return Ok((FrontMatter::default(), remaining));
            }
        }

        // Find the closing ---
        let Some(end_pos) = rest.find("\n---") else {
            return Err(MalformedReason::UnterminatedHeader);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..]; // Skip \n---
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml_content)
            .map_err(|e| MalformedReason::Header(e.to_string()))?;

        Ok((fm, remaining))
    }

    /// Check that every required field is present and non-empty
    pub fn validate(&self) -> Result<(), MalformedReason> {
        Self::require("layout", &self.layout)?;
        Self::require("title", &self.title)?;
        Ok(())
    }

    fn require(field: &'static str, value: &Option<String>) -> Result<(), MalformedReason> {
        match value {
            None => Err(MalformedReason::MissingField(field)),
            Some(v) if v.trim().is_empty() => Err(MalformedReason::EmptyField(field)),
            Some(_) => Ok(()),
        }
    }
}
