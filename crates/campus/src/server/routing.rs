//! Axum router configuration for all endpoints

use axum::middleware;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::services::ServeDir;

use crate::server::handlers::{query, records, speech, status};
use crate::server::SharedState;

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
  Router::new()
    // Status endpoint
    .route("/", get(status::home))
    // Question answering
    .route("/query", post(query::handle_query))
    // Speech synthesis and recognition
    .route("/speak", post(speech::speak))
    .route("/recognize", post(speech::recognize))
    .route("/test", get(speech::test_synthesis))
    // Student roster administration
    .route("/api/students", get(records::list_students))
    .route("/api/students", post(records::add_student))
    .route("/api/students/{index}", put(records::update_student))
    .route("/api/students/{index}", delete(records::remove_student))
    // Professor roster administration
    .route("/api/professors", get(records::list_professors))
    .route("/api/professors", post(records::add_professor))
    .route("/api/professors/{index}", put(records::update_professor))
    .route("/api/professors/{index}", delete(records::remove_professor))
    // Synthesized audio files
    .nest_service("/audio", ServeDir::new(&state.audio_dir))
    .layer(middleware::from_fn(crate::server::middleware::request_context_middleware))
    .with_state(state)
}
