use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TodoId(pub Uuid);

impl Default for TodoId {
    fn default() -> Self { Self(Uuid::new_v4()) }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

/// A stored to-do record. `owner_id` is fixed at creation from the
/// authenticated session and never taken from a request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub is_completed: bool,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTodo {
    pub text: String,
    pub is_completed: bool,
    pub owner_id: UserId,
}

/// Outcome descriptor for a bulk owner-scoped removal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteSummary {
    pub deleted: u64,
}
