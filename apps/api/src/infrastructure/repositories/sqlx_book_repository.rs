use crate::domain::book::{
    entity::Book,
    errors::DomainError,
    repository::{BookRepository, WriteOutcome},
    search_filter::SearchFilter,
    value_objects::BookDraft,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{debug, info, instrument};
use uuid::Uuid;

const BOOK_COLUMNS: &str = "id, title, author, genre, year, created_at, updated_at";

#[derive(FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: String,
    genre: Option<String>,
    year: Option<i32>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookRow> for Book {
    fn from(r: BookRow) -> Self {
        Book {
            id: r.id,
            title: r.title,
            author: r.author,
            genre: r.genre,
            year: r.year,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Appends `WHERE title ILIKE $n ESCAPE '' OR ...` for the filter.
///
/// The empty escape keeps `\` literal, matching [`SearchFilter::matches`].
fn push_search_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &SearchFilter) {
    let pattern = filter.like_pattern();
    qb.push(" WHERE ");
    let mut predicates = qb.separated(" OR ");
    for field in filter.fields() {
        predicates.push(format!("{} ILIKE ", field.column()));
        predicates.push_bind_unseparated(pattern.clone());
        predicates.push_unseparated(" ESCAPE ''");
    }
}

/// PostgreSQL-backed book accessor.
pub struct SqlxBookRepository {
    pub pool: PgPool,
}

impl SqlxBookRepository {
    /// Creates a new instance of the repository with the provided database pool.
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxBookRepository with connection pool");
        Self { pool }
    }
}

fn infrastructure(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::InfrastructureError(format!("Failed to {}: {}", action, e))
}

#[async_trait]
impl BookRepository for SqlxBookRepository {
    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| infrastructure("count books", e))
    }

    /// Retrieves one window of books ordered by creation date (newest first).
    ///
    /// # Arguments
    /// * `limit` - Maximum number of books to return
    /// * `offset` - Number of books to skip
    #[instrument(skip(self))]
    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Book>, DomainError> {
        let rows = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| infrastructure("retrieve books", e))?;

        debug!("Retrieved {} books", rows.len());
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Runs the four-column substring search. The result set is unbounded.
    #[instrument(skip(self, filter), fields(query_len = filter.query().len()))]
    async fn find_matching(&self, filter: &SearchFilter) -> Result<Vec<Book>, DomainError> {
        let mut qb = QueryBuilder::<Postgres>::new(format!("SELECT {BOOK_COLUMNS} FROM books"));
        push_search_filter(&mut qb, filter);
        qb.push(" ORDER BY created_at DESC, id DESC");

        let rows: Vec<BookRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| infrastructure("search books", e))?;

        debug!("Search completed successfully, found {} results", rows.len());
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, DomainError> {
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| infrastructure("look up book", e))?;
        Ok(row.map(Book::from))
    }

    /// Validates the draft and inserts it.
    ///
    /// An invalid draft is answered with [`WriteOutcome::Invalid`] and no
    /// statement is sent to the database.
    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &BookDraft) -> Result<WriteOutcome, DomainError> {
        if let Err(errors) = draft.check() {
            return Ok(WriteOutcome::Invalid(errors));
        }

        let book = Book::from_draft(draft);
        let row = sqlx::query_as::<_, BookRow>(&format!(
            "INSERT INTO books ({BOOK_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {BOOK_COLUMNS}"
        ))
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.genre)
        .bind(book.year)
        .bind(book.created_at)
        .bind(book.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| infrastructure("create book", e))?;

        info!("Successfully created book {}", row.id);
        Ok(WriteOutcome::Saved(row.into()))
    }

    #[instrument(skip(self, draft), fields(book_id = %id))]
    async fn update(&self, id: Uuid, draft: &BookDraft) -> Result<WriteOutcome, DomainError> {
        if let Err(errors) = draft.check() {
            return Ok(WriteOutcome::Invalid(errors));
        }

        let row = sqlx::query_as::<_, BookRow>(&format!(
            r#"UPDATE books
               SET title = $2,
                   author = $3,
                   genre = $4,
                   year = $5,
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {BOOK_COLUMNS}"#
        ))
        .bind(id)
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(&draft.genre)
        .bind(draft.year_value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| infrastructure("update book", e))?;

        let updated = row.ok_or_else(|| DomainError::NotFound("Books does not exist".into()))?;
        Ok(WriteOutcome::Saved(updated.into()))
    }

    /// Permanently deletes a book. Deleting an absent id is not an error.
    #[instrument(skip(self), fields(book_id = %id))]
    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| infrastructure("delete book", e))?;

        if result.rows_affected() == 0 {
            debug!("No book found with id {} for deletion", id);
        } else {
            info!("Successfully deleted book {}", id);
        }

        Ok(())
    }
}
