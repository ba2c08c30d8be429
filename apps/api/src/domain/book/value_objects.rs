use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

lazy_static! {
    static ref YEAR_REGEX: regex::Regex = regex::Regex::new(r"^\d{1,4}$").unwrap();
}

/// Form fields in display order; field errors are sorted by this.
const FORM_FIELDS: [&str; 4] = ["title", "author", "genre", "year"];

/// Book attributes submitted through the create or update form.
///
/// Optional fields are trimmed and stored as `None` when left blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct BookDraft {
    #[validate(custom(function = "not_blank", message = "Please provide a title"))]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "Please provide an author"))]
    pub author: String,

    pub genre: Option<String>,

    #[validate(regex(path = *YEAR_REGEX, message = "Year must be a number of up to four digits"))]
    pub year: Option<String>,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Option<&str>,
        year: Option<&str>,
    ) -> Self {
        Self {
            title: title.into().trim().to_string(),
            author: author.into().trim().to_string(),
            genre: optional_field(genre),
            year: optional_field(year),
        }
    }

    /// Runs the validation rules, returning the failures as an ordered
    /// list of field errors.
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        self.validate().map_err(|errors| FieldError::collect(&errors))
    }

    /// Publication year as stored. Only meaningful after [`check`](Self::check) passed.
    pub fn year_value(&self) -> Option<i32> {
        self.year.as_deref().and_then(|y| y.parse().ok())
    }
}

fn optional_field(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// A validation message attributed to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Flattens `validator` output into form order.
    pub fn collect(errors: &ValidationErrors) -> Vec<FieldError> {
        let mut collected: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter()
                    .map(move |err| FieldError {
                        field: field.clone(),
                        message: err
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field)),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        collected.sort_by_key(|e| {
            FORM_FIELDS
                .iter()
                .position(|f| *f == e.field)
                .unwrap_or(FORM_FIELDS.len())
        });
        collected
    }
}
