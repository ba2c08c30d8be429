pub mod list_books;
pub mod manage_book;
pub mod search_books;
