use crate::{
    auth::create_token,
    dto::{LoginRequest, LoginResponse},
    errors::ApiError,
    states::AppState,
};
use axum::{Json, extract::State};
use bcrypt::verify;
use tracing::info;

/// POST /api/login
/// Body: { "username": "...", "password": "..." }
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user_id = state
        .username_index
        .get(&payload.username)
        .ok_or(ApiError::InvalidCredentials)?;

    let user = state
        .users
        .get(&*user_id)
        .map(|entry| entry.clone())
        .ok_or(ApiError::InvalidCredentials)?;

    let valid = verify(&payload.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("Password verification failed: {}", e)))?;

    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(&user.id, &user.username, &state.jwt_secret)?;

    info!("User logged in: {}", user.username);

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
