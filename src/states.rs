use crate::models::{Blog, User};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Shared application state. `DashMap` gives atomic per-entry
/// read-modify-write; there is no cross-map transaction, so the two writes
/// of blog creation (blog insert, owner list append) are independent.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<DashMap<Uuid, User>>,
    pub blogs: Arc<DashMap<Uuid, Blog>>,
    pub username_index: Arc<DashMap<String, Uuid>>, // Quick lookup by username
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(jwt_secret: String) -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            blogs: Arc::new(DashMap::new()),
            username_index: Arc::new(DashMap::new()),
            jwt_secret,
        }
    }
}
