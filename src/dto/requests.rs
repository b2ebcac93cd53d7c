use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Validate, Deserialize)]
pub struct SignupRequest {
    #[validate(length(min = 3, message = "username must be at least 3 characters long"))]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 3, message = "password must be at least 3 characters long"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Create payload. `title` and `url` are optional at the type level so their
/// absence produces the contract's InvalidInput message instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

/// Only `likes` is ever applied; clients may send a whole blog object and
/// the other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateLikesRequest {
    pub likes: u64,
}

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    pub comment: String,
}
