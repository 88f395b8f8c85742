use async_trait::async_trait;

use super::todo::{DeleteSummary, NewTodo, TodoId, TodoItem, UserId};

#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn init(&self) -> anyhow::Result<()>;
    async fn create(&self, input: NewTodo) -> anyhow::Result<TodoItem>;
    /// All records owned by `owner`. No ordering contract.
    async fn list(&self, owner: UserId) -> anyhow::Result<Vec<TodoItem>>;
    /// Overwrites the text of the record matching `id` and returns the
    /// record's pre-update state. Matches by id alone, with no owner filter.
    async fn update_text(&self, id: TodoId, text: String) -> anyhow::Result<Option<TodoItem>>;
    /// Removes the record matching `id`, returning its prior state.
    /// Matches by id alone, with no owner filter.
    async fn delete(&self, id: TodoId) -> anyhow::Result<Option<TodoItem>>;
    /// Removes every record owned by `owner`.
    async fn delete_all(&self, owner: UserId) -> anyhow::Result<DeleteSummary>;
}
