use crate::{
    dto::{SignupRequest, UserResponse},
    errors::ApiError,
    models::User,
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bcrypt::{DEFAULT_COST, hash};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// POST /api/users
/// Body: { "username": "...", "name": "...", "password": "..." }
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    if state.username_index.contains_key(&payload.username) {
        return Err(ApiError::InvalidInput("username must be unique".into()));
    }

    let password_hash = hash(&payload.password, DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))?;

    let user = User {
        id: Uuid::new_v4(),
        username: payload.username,
        name: payload.name,
        password_hash,
        blogs: Vec::new(),
    };

    state.username_index.insert(user.username.clone(), user.id);
    state.users.insert(user.id, user.clone());

    info!("New user registered: {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse::populate(user, &state)),
    ))
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let users = state
        .users
        .iter()
        .map(|entry| UserResponse::populate(entry.value().clone(), &state))
        .collect();

    Json(users)
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .get(&id)
        .map(|entry| entry.clone())
        .ok_or(ApiError::NotFound("user not found"))?;

    Ok(Json(UserResponse::populate(user, &state)))
}
