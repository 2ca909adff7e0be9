//! Filtering and ordering types for note queries.
//!
//! [`NoteQuery`] is a structured filter: each provided field is a
//! case-sensitive, unanchored substring check against the corresponding note
//! field, and all provided fields must match (AND). An omitted field imposes
//! no constraint, so the default query matches every note.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NotzError;
use crate::model::Note;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// True when every provided filter matches the note.
    pub fn matches(&self, note: &Note) -> bool {
        if let Some(title) = &self.title {
            if !note.title.contains(title.as_str()) {
                return false;
            }
        }
        if let Some(content) = &self.content {
            if !note.content.contains(content.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Key for the in-place collection sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Orders by the status *label* compared as a plain string, so "Done"
    /// sorts before "Not Done". This mirrors the historical behavior; it is
    /// not a semantic done/not-done grouping.
    Status,
    /// Ascending by creation time, ties keep input order.
    CreatedAt,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Status => write!(f, "status"),
            SortKey::CreatedAt => write!(f, "created"),
        }
    }
}

impl FromStr for SortKey {
    type Err = NotzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(SortKey::Status),
            "created" => Ok(SortKey::CreatedAt),
            other => Err(NotzError::UnknownSortKey(other.to_string())),
        }
    }
}
