use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::story::StoryService;

pub mod handlers;
pub mod page;
pub mod types;

use handlers::{generate_story, health, index, submit_form};

#[derive(Clone)]
pub struct AppState {
    pub stories: StoryService,
}

/// The story page plus its JSON twin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/api/story", post(generate_story))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}
