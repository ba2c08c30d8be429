use super::value_objects::BookDraft;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalogued book.
///
/// # Invariants
/// - `id` is unique and never changes after creation
/// - `title` and `author` are non-blank
/// - `created_at` is the default listing order (newest first)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Builds a new, not yet persisted book from a validated draft.
    pub fn from_draft(draft: &BookDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: draft.title.clone(),
            author: draft.author.clone(),
            genre: draft.genre.clone(),
            year: draft.year_value(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the editable attributes and bumps `updated_at`.
    pub fn apply(&mut self, draft: &BookDraft) {
        self.title = draft.title.clone();
        self.author = draft.author.clone();
        self.genre = draft.genre.clone();
        self.year = draft.year_value();
        self.updated_at = Utc::now();
    }
}
