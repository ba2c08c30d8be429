//! Server-rendered book catalog: paginated listing, four-field search and
//! create/update/delete forms over a PostgreSQL `books` table.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
