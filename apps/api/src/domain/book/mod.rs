pub mod entity;
pub mod errors;
pub mod repository;
pub mod search_filter;
pub mod value_objects;
