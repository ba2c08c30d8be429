use crate::domain::book::{
    entity::Book,
    value_objects::{BookDraft, FieldError},
};
use serde::{Deserialize, Serialize};

/// Raw form fields as posted by the create and update forms.
///
/// Also used to re-populate a form, so every field is plain text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub year: String,
}

impl From<&BookForm> for BookDraft {
    fn from(form: &BookForm) -> Self {
        BookDraft::new(
            form.title.as_str(),
            form.author.as_str(),
            Some(form.genre.as_str()),
            Some(form.year.as_str()),
        )
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            year: book.year.map(|y| y.to_string()).unwrap_or_default(),
        }
    }
}

/// How a create or update request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum BookMutation {
    Saved(Book),
    /// Nothing was written; the form should be shown again with these errors.
    Invalid(Vec<FieldError>),
    /// No book has the addressed id.
    Missing,
}
