use super::{
    handlers::{books, health, pages},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        .route("/", get(pages::home))
        // Listing and search
        .route("/books", get(books::redirect_to_first_page))
        .route("/books/", get(books::redirect_to_first_page))
        .route("/books/search", get(books::search_books))
        .route("/books/books", get(books::legacy_books_view))
        .route("/books/page/{page}", get(books::list_books))
        // Book forms
        .route(
            "/books/new",
            get(books::new_book_form).post(books::create_book),
        )
        .route(
            "/books/{id}",
            get(books::get_book).post(books::update_book),
        )
        .route("/books/{id}/delete", post(books::delete_book))
        .nest_service("/static", static_files)
        .fallback(pages::not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
