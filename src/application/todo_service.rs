use anyhow::Result;
use async_trait::async_trait;

use crate::domain::repository::TodoRepository;
use crate::domain::todo::{DeleteSummary, NewTodo, TodoId, TodoItem, UserId};

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn add(&self, input: NewTodo) -> Result<TodoItem>;
    async fn list(&self, owner: UserId) -> Result<Vec<TodoItem>>;
    async fn edit(&self, id: TodoId, text: String) -> Result<Option<TodoItem>>;
    async fn delete(&self, id: TodoId) -> Result<Option<TodoItem>>;
    async fn delete_all(&self, owner: UserId) -> Result<DeleteSummary>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self { Self { repo } }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn add(&self, input: NewTodo) -> Result<TodoItem> { self.repo.create(input).await }
    async fn list(&self, owner: UserId) -> Result<Vec<TodoItem>> { self.repo.list(owner).await }
    async fn edit(&self, id: TodoId, text: String) -> Result<Option<TodoItem>> { self.repo.update_text(id, text).await }
    async fn delete(&self, id: TodoId) -> Result<Option<TodoItem>> { self.repo.delete(id).await }
    async fn delete_all(&self, owner: UserId) -> Result<DeleteSummary> { self.repo.delete_all(owner).await }
}
