use crate::states::AppState;
use axum::{Router, extract::State, http::StatusCode, routing::post};
use tracing::info;

/// Router for end-to-end test support. Only mounted when `APP_ENV=test`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/testing/reset", post(reset))
        .with_state(state)
}

/// POST /api/testing/reset
async fn reset(State(state): State<AppState>) -> StatusCode {
    state.blogs.clear();
    state.users.clear();
    state.username_index.clear();

    info!("All stores reset");

    StatusCode::NO_CONTENT
}
