//! Document row types

use serde::{Deserialize, Serialize};

/// A document as read back from the store
///
/// Serializes to the uniform `{id, title, content}` shape written to the
/// output artifact, and deserializes from it again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedRecord {
    /// Surrogate key assigned by the store
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl ExtractedRecord {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            content: row.get("content")?,
        })
    }
}

/// A fixture row waiting to be inserted; the store assigns its id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
}

impl NewDocument {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_uniform_shape() {
        let record = ExtractedRecord {
            id: 7,
            title: "Doc 7".to_string(),
            content: "Seven".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"id": 7, "title": "Doc 7", "content": "Seven"}));
    }

    #[test]
    fn test_new_document_from_yaml() {
        let yaml = "title: Doc A\ncontent: Alpha\n";
        let doc: NewDocument = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc, NewDocument::new("Doc A", "Alpha"));
    }
}
