pub mod book;
pub mod shared;
