//! Markdown front matter codec

use crate::error::{RipenError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Metadata header of a document: an ordered YAML mapping.
///
/// Key order is preserved through a decode/encode round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: Mapping,
}

impl Metadata {
    /// Get a metadata field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(&Value::String(key.to_string()))
    }

    /// Set a metadata field, keeping the key's position if it already exists.
    pub fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(Value::String(key.to_string()), value);
    }

    /// Read the `tags` field as an ordered string sequence.
    ///
    /// An absent field reads as empty; anything other than a sequence of
    /// strings is a malformed header.
    pub fn tags(&self) -> Result<Vec<String>> {
        let Some(value) = self.get("tags") else {
            return Ok(Vec::new());
        };

        let Value::Sequence(items) = value else {
            return Err(RipenError::FrontMatter(
                "tags field is not a sequence".to_string(),
            ));
        };

        items
            .iter()
            .map(|item| match item {
                Value::String(tag) => Ok(tag.clone()),
                _ => Err(RipenError::FrontMatter(
                    "tags entries must be strings".to_string(),
                )),
            })
            .collect()
    }

    /// Replace the `tags` field.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        let items = tags.into_iter().map(Value::String).collect();
        self.set("tags", Value::Sequence(items));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A document split into its metadata header and free-form body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub metadata: Metadata,
    pub body: String,
}

impl Document {
    /// Re-emit the document with its current metadata.
    ///
    /// The body is appended unchanged after the closing delimiter line.
    pub fn render(&self) -> Result<String> {
        if self.metadata.is_empty() {
            return Ok(self.body.clone());
        }

        let yaml = serde_yaml::to_string(&self.metadata)?;
        Ok(format!("---\n{}---\n{}", yaml, self.body))
    }
}

/// Split a document into metadata and body.
///
/// A file that does not open with a `---` line has no header: it decodes to
/// empty metadata with the whole content as body. An opening delimiter
/// without a closing one, or invalid YAML between the delimiters, is an
/// error.
pub fn parse_document(content: &str) -> Result<Document> {
    let Some(rest) = content.strip_prefix("---\n") else {
        return Ok(Document {
            metadata: Metadata::default(),
            body: content.to_string(),
        });
    };

    let Some(split_at) = rest.find("\n---\n") else {
        return Err(RipenError::FrontMatter(
            "missing closing delimiter".to_string(),
        ));
    };

    let block = &rest[..split_at];
    let body = rest[split_at + 5..].to_string();

    let metadata = if block.trim().is_empty() {
        Metadata::default()
    } else {
        serde_yaml::from_str(block).map_err(|e| RipenError::FrontMatter(e.to_string()))?
    };

    Ok(Document { metadata, body })
}
