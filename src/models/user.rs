use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Ids of the blogs this user created. Appended on create; a deleted
    /// blog's id stays in the list.
    pub blogs: Vec<Uuid>,
}
