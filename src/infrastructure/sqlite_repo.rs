use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::{SqlitePoolOptions, SqliteRow}, Pool, Row, Sqlite};
use uuid::Uuid;

use crate::domain::{
    repository::TodoRepository,
    todo::{DeleteSummary, NewTodo, TodoId, TodoItem, UserId},
};

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    pub fn pool(&self) -> Arc<Pool<Sqlite>> {
        Arc::clone(&self.pool)
    }

    async fn get(&self, id: TodoId) -> Result<Option<TodoItem>> {
        let row = sqlx::query("SELECT id, text, is_completed, owner_id, created_at FROM todos WHERE id = ?1")
            .bind(id.0.to_string())
            .fetch_optional(&*self.pool)
            .await?;
        Ok(row.map(row_to_todo))
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id TEXT PRIMARY KEY,
                text TEXT NOT NULL,
                is_completed INTEGER NOT NULL,
                owner_id TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn create(&self, input: NewTodo) -> Result<TodoItem> {
        let now = Utc::now();
        let id = TodoId(Uuid::new_v4());
        sqlx::query(
            "INSERT INTO todos (id, text, is_completed, owner_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(id.0.to_string())
        .bind(&input.text)
        .bind(input.is_completed)
        .bind(input.owner_id.0.to_string())
        .bind(now.to_rfc3339())
        .execute(&*self.pool)
        .await?;
        Ok(TodoItem {
            id,
            text: input.text,
            is_completed: input.is_completed,
            owner_id: input.owner_id,
            created_at: now,
        })
    }

    async fn list(&self, owner: UserId) -> Result<Vec<TodoItem>> {
        let rows = sqlx::query("SELECT id, text, is_completed, owner_id, created_at FROM todos WHERE owner_id = ?1")
            .bind(owner.0.to_string())
            .fetch_all(&*self.pool)
            .await?;
        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn update_text(&self, id: TodoId, text: String) -> Result<Option<TodoItem>> {
        // Matched by id alone: the edit surface carries no owner filter.
        let Some(prior) = self.get(id).await? else { return Ok(None) };

        sqlx::query("UPDATE todos SET text = ?2 WHERE id = ?1")
            .bind(id.0.to_string())
            .bind(&text)
            .execute(&*self.pool)
            .await?;

        Ok(Some(prior))
    }

    async fn delete(&self, id: TodoId) -> Result<Option<TodoItem>> {
        let Some(prior) = self.get(id).await? else { return Ok(None) };

        sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id.0.to_string())
            .execute(&*self.pool)
            .await?;

        Ok(Some(prior))
    }

    async fn delete_all(&self, owner: UserId) -> Result<DeleteSummary> {
        let result = sqlx::query("DELETE FROM todos WHERE owner_id = ?1")
            .bind(owner.0.to_string())
            .execute(&*self.pool)
            .await?;
        Ok(DeleteSummary { deleted: result.rows_affected() })
    }
}

fn row_to_todo(row: SqliteRow) -> TodoItem {
    let id_str: String = row.get("id");
    let text: String = row.get("text");
    let is_completed: bool = row.get("is_completed");
    let owner_str: String = row.get("owner_id");
    let created_at_str: String = row.get("created_at");

    // Columns are written exclusively by this repository, so the stored
    // uuid/rfc3339 strings are well-formed.
    let created_at = DateTime::parse_from_rfc3339(&created_at_str).unwrap().with_timezone(&Utc);

    TodoItem {
        id: TodoId(Uuid::parse_str(&id_str).unwrap()),
        text,
        is_completed,
        owner_id: UserId(Uuid::parse_str(&owner_str).unwrap()),
        created_at,
    }
}
