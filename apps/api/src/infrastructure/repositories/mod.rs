pub mod sqlx_book_repository;
