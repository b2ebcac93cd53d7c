use crate::{
    auth::validate_token,
    dto::{AddCommentRequest, BlogResponse, CreateBlogRequest, UpdateLikesRequest},
    errors::ApiError,
    models::Blog,
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use tracing::info;
use uuid::Uuid;

const BLOG_NOT_FOUND: &str = "Blog not found";

/// GET /api/blogs
pub async fn list_blogs(State(state): State<AppState>) -> Json<Vec<BlogResponse>> {
    let blogs = state
        .blogs
        .iter()
        .map(|entry| BlogResponse::populate(entry.value().clone(), &state))
        .collect();

    Json(blogs)
}

/// GET /api/blogs/{id}
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogResponse>, ApiError> {
    let blog = state
        .blogs
        .get(&id)
        .map(|entry| entry.clone())
        .ok_or(ApiError::NotFound(BLOG_NOT_FOUND))?;

    Ok(Json(BlogResponse::populate(blog, &state)))
}

/// POST /api/blogs
/// Headers: Authorization: Bearer <token>
/// Body: { "title": "...", "url": "...", "author": "...", "likes": 0 }
///
/// The caller check runs before the payload check; a request that is both
/// unauthenticated and incomplete gets 401, and nothing is persisted on
/// either failure. The blog insert and the owner-list append are two
/// separate writes, not a transaction.
pub async fn create_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<Blog>), ApiError> {
    let claims = validate_token(&headers, &state.jwt_secret)?;
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthenticated)?;

    if !state.users.contains_key(&user_id) {
        return Err(ApiError::Unauthenticated);
    }

    let title = payload.title.filter(|t| !t.is_empty());
    let url = payload.url.filter(|u| !u.is_empty());
    let (Some(title), Some(url)) = (title, url) else {
        return Err(ApiError::InvalidInput(
            "title and url must be provided".into(),
        ));
    };

    let blog = Blog {
        id: Uuid::new_v4(),
        title,
        author: payload.author,
        url,
        likes: payload.likes.unwrap_or(0),
        user: user_id,
        comments: Vec::new(),
    };

    state.blogs.insert(blog.id, blog.clone());

    if let Some(mut owner) = state.users.get_mut(&user_id) {
        owner.blogs.push(blog.id);
    }

    info!("Blog created: {} by user {}", blog.id, user_id);

    Ok((StatusCode::CREATED, Json(blog)))
}

/// PUT /api/blogs/{id}
/// Body: { "likes": N }
///
/// No authentication: anyone may set the like count. Only `likes` is
/// replaced; concurrent calls race last-write-wins.
pub async fn update_likes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLikesRequest>,
) -> Result<Json<BlogResponse>, ApiError> {
    let updated = {
        let mut blog = state
            .blogs
            .get_mut(&id)
            .ok_or(ApiError::NotFound(BLOG_NOT_FOUND))?;
        blog.likes = payload.likes;
        blog.clone()
    };

    Ok(Json(BlogResponse::populate(updated, &state)))
}

/// DELETE /api/blogs/{id}
/// Headers: Authorization: Bearer <token>
///
/// Owner only. Failure order is part of the contract:
/// no/invalid token -> 401, unknown id -> 404, non-owner -> 401.
pub async fn delete_blog(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let claims = validate_token(&headers, &state.jwt_secret)?;
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::Unauthenticated)?;

    let owner = state
        .blogs
        .get(&id)
        .ok_or(ApiError::NotFound(BLOG_NOT_FOUND))?
        .user;

    if owner != user_id {
        return Err(ApiError::Unauthorized);
    }

    state.blogs.remove(&id);
    // The owner's blogs list is left as-is; the removed id stays in it.

    info!("Blog deleted: {} by user {}", id, user_id);

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/blogs/{id}/comments
/// Body: { "comment": "..." }
///
/// No authentication. Comments append in arrival order; duplicates allowed.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddCommentRequest>,
) -> Result<(StatusCode, Json<Blog>), ApiError> {
    let updated = {
        let mut blog = state
            .blogs
            .get_mut(&id)
            .ok_or(ApiError::NotFound(BLOG_NOT_FOUND))?;
        blog.comments.push(payload.comment);
        blog.clone()
    };

    Ok((StatusCode::CREATED, Json(updated)))
}
