use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    /// Owner id, set at creation and never reassigned.
    pub user: Uuid,
    /// Append-only, in arrival order.
    pub comments: Vec<String>,
}
