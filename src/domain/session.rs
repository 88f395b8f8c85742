use async_trait::async_trait;

use super::todo::UserId;

/// Boundary contract for the session guard: maps an opaque bearer token to
/// the user it authenticates, if any. Session creation itself (login) is
/// outside this service; `insert` exists so deployments and tests can seed
/// sessions.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    async fn resolve(&self, token: &str) -> anyhow::Result<Option<UserId>>;
    async fn insert(&self, token: &str, user: UserId) -> anyhow::Result<()>;
}
