use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Body of `POST /summarize`.
///
/// `text` is kept as raw JSON so that any falsy value is reported as missing
/// text rather than as a malformed body.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

impl SummaryRequest {
    /// The text to summarize, or `None` when it is missing or falsy
    /// (`null`, `false`, `0`, `""`). Other non-string values are summarized
    /// as their JSON text.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self.text.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64().is_some_and(|f| f == 0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
}

impl SummaryResult {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}

/// A note as stored by the hosted database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update sent to the note store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl NoteChanges {
    /// The store keeps "no summary" as null, never as an empty string.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.summary.as_deref().is_some_and(str::is_empty) {
            self.summary = None;
        }
        self
    }
}
