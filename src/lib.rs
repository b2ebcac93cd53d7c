pub mod auth;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod states;

use axum::{
    Router,
    routing::{get, post},
};
use routes::{
    blog::{add_comment, create_blog, delete_blog, get_blog, list_blogs, update_likes},
    health::health_check,
    login::login,
    user::{get_user, list_users, signup},
};
use states::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the application router on top of the given state.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        // Public routes (no auth required)
        .route("/api/login", post(login))
        .route("/api/users", post(signup).get(list_users))
        .route("/api/users/{id}", get(get_user))
        .route("/api/blogs", get(list_blogs).post(create_blog))
        // Likes and comments are deliberately open; create and delete
        // require a bearer token, checked inside the handlers.
        .route(
            "/api/blogs/{id}",
            get(get_blog).put(update_likes).delete(delete_blog),
        )
        .route("/api/blogs/{id}/comments", post(add_comment))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
