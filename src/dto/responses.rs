use crate::models::{Blog, User};
use crate::states::AppState;
use serde::Serialize;
use uuid::Uuid;

/// Owner shape embedded in blog responses, `{id, username, name}`.
#[derive(Debug, Serialize)]
pub struct UserRef {
    pub id: Uuid,
    pub username: String,
    pub name: String,
}

/// Blog shape embedded in user responses, `{id, title, author, url}`.
#[derive(Debug, Serialize)]
pub struct BlogRef {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user: Option<UserRef>,
    pub comments: Vec<String>,
}

impl BlogResponse {
    /// Resolves the owner id into `{id, username, name}`. Joining is the
    /// service's job, not the store's; an owner missing from the store
    /// serializes as `null`.
    pub fn populate(blog: Blog, state: &AppState) -> Self {
        let user = state.users.get(&blog.user).map(|u| UserRef {
            id: u.id,
            username: u.username.clone(),
            name: u.name.clone(),
        });

        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user,
            comments: blog.comments,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub blogs: Vec<BlogRef>,
}

impl UserResponse {
    /// Resolves the owned-blog ids into `{id, title, author, url}`. Ids with
    /// no matching blog (left behind by delete) are skipped, not surfaced.
    pub fn populate(user: User, state: &AppState) -> Self {
        let blogs = user
            .blogs
            .iter()
            .filter_map(|id| {
                state.blogs.get(id).map(|b| BlogRef {
                    id: b.id,
                    title: b.title.clone(),
                    author: b.author.clone(),
                    url: b.url.clone(),
                })
            })
            .collect();

        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            blogs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}
