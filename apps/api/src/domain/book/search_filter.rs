//! Free-text search predicate over the four searchable book columns.
//!
//! A query matches a book when it is a case-insensitive substring of any of
//! title, author, genre or year. The query is wrapped as `%query%` and used
//! as a LIKE pattern without escaping, so `%` and `_` inside the query keep
//! their wildcard meaning. There is no escape character: `\` is literal.

use super::entity::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
    Year,
}

impl SearchField {
    pub const ALL: [SearchField; 4] = [
        SearchField::Title,
        SearchField::Author,
        SearchField::Genre,
        SearchField::Year,
    ];

    /// SQL expression compared against the pattern.
    pub fn column(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
            SearchField::Year => "year::text",
        }
    }

    fn value_of(&self, book: &Book) -> Option<String> {
        match self {
            SearchField::Title => Some(book.title.clone()),
            SearchField::Author => Some(book.author.clone()),
            SearchField::Genre => book.genre.clone(),
            SearchField::Year => book.year.map(|y| y.to_string()),
        }
    }
}

/// OR-combination of one "contains" test per [`SearchField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
    fields: Vec<SearchField>,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            fields: SearchField::ALL.to_vec(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    /// LIKE pattern bound for every field.
    pub fn like_pattern(&self) -> String {
        format!("%{}%", self.query)
    }

    /// Evaluates the predicate in process with ILIKE semantics.
    ///
    /// A `NULL` genre or year never matches, as in SQL.
    pub fn matches(&self, book: &Book) -> bool {
        let pattern: Vec<char> = self.like_pattern().to_lowercase().chars().collect();
        self.fields.iter().any(|field| {
            field.value_of(book).is_some_and(|value| {
                let value: Vec<char> = value.to_lowercase().chars().collect();
                like_matches(&pattern, &value)
            })
        })
    }
}

/// `%` matches any run of characters, `_` exactly one. Every other character,
/// `\` included, matches itself.
fn like_matches(pattern: &[char], value: &[char]) -> bool {
    let (mut p, mut v) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        if p < pattern.len() && pattern[p] == '%' {
            backtrack = Some((p, v));
            p += 1;
        } else if p < pattern.len() && (pattern[p] == '_' || pattern[p] == value[v]) {
            p += 1;
            v += 1;
        } else if let Some((star_p, star_v)) = backtrack {
            backtrack = Some((star_p, star_v + 1));
            p = star_p + 1;
            v = star_v + 1;
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|c| *c == '%')
}
