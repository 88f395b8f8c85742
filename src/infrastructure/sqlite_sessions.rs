use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Row, Sqlite};
use uuid::Uuid;

use crate::domain::{session::SessionStore, todo::UserId};

/// Session lookups backed by the same sqlite pool as the record store.
#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteSessionStore {
    pub fn new(pool: Arc<Pool<Sqlite>>) -> Self {
        Self { pool }
    }

    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS sessions (
                token TEXT PRIMARY KEY,
                user_id TEXT NOT NULL
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn resolve(&self, token: &str) -> Result<Option<UserId>> {
        let row = sqlx::query("SELECT user_id FROM sessions WHERE token = ?1")
            .bind(token)
            .fetch_optional(&*self.pool)
            .await?;
        match row {
            Some(row) => {
                let user_str: String = row.get("user_id");
                Ok(Some(UserId(Uuid::parse_str(&user_str)?)))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, token: &str, user: UserId) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO sessions (token, user_id) VALUES (?1, ?2)")
            .bind(token)
            .bind(user.0.to_string())
            .execute(&*self.pool)
            .await?;
        Ok(())
    }
}
