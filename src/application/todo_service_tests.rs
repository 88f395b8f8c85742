#[cfg(test)]
mod tests {
    use super::super::todo_service::{TodoService, TodoServiceImpl};
    use crate::domain::{
        repository::TodoRepository,
        todo::{DeleteSummary, NewTodo, TodoId, TodoItem, UserId},
    };
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::Utc;

    #[derive(Clone, Default)]
    struct InMemoryRepo {
        items: std::sync::Arc<std::sync::Mutex<std::collections::HashMap<TodoId, TodoItem>>>,
    }

    #[async_trait]
    impl TodoRepository for InMemoryRepo {
        async fn init(&self) -> Result<()> { Ok(()) }
        async fn create(&self, input: NewTodo) -> Result<TodoItem> {
            let item = TodoItem {
                id: TodoId::default(),
                text: input.text,
                is_completed: input.is_completed,
                owner_id: input.owner_id,
                created_at: Utc::now(),
            };
            self.items.lock().unwrap().insert(item.id, item.clone());
            Ok(item)
        }
        async fn list(&self, owner: UserId) -> Result<Vec<TodoItem>> {
            Ok(self.items.lock().unwrap().values().filter(|t| t.owner_id == owner).cloned().collect())
        }
        async fn update_text(&self, id: TodoId, text: String) -> Result<Option<TodoItem>> {
            let mut map = self.items.lock().unwrap();
            let Some(prior) = map.get(&id).cloned() else { return Ok(None) };
            let mut updated = prior.clone();
            updated.text = text;
            map.insert(id, updated);
            Ok(Some(prior))
        }
        async fn delete(&self, id: TodoId) -> Result<Option<TodoItem>> {
            Ok(self.items.lock().unwrap().remove(&id))
        }
        async fn delete_all(&self, owner: UserId) -> Result<DeleteSummary> {
            let mut map = self.items.lock().unwrap();
            let before = map.len();
            map.retain(|_, t| t.owner_id != owner);
            Ok(DeleteSummary { deleted: (before - map.len()) as u64 })
        }
    }

    fn user() -> UserId { UserId(uuid::Uuid::new_v4()) }

    fn new_todo(text: &str, owner: UserId) -> NewTodo {
        NewTodo { text: text.into(), is_completed: false, owner_id: owner }
    }

    #[tokio::test]
    async fn unit_add_then_list_scoped_to_owner() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        let (a, b) = (user(), user());
        service.add(new_todo("buy milk", a)).await.unwrap();
        service.add(new_todo("walk dog", a)).await.unwrap();
        service.add(new_todo("other user", b)).await.unwrap();

        let listed = service.list(a).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|t| t.owner_id == a));
    }

    #[tokio::test]
    async fn unit_edit_returns_prior_state_and_changes_only_text() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        let a = user();
        let created = service.add(new_todo("before", a)).await.unwrap();

        let prior = service.edit(created.id, "after".into()).await.unwrap().unwrap();
        assert_eq!(prior.text, "before");

        let listed = service.list(a).await.unwrap();
        let current = listed.iter().find(|t| t.id == created.id).unwrap();
        assert_eq!(current.text, "after");
        assert_eq!(current.owner_id, created.owner_id);
        assert_eq!(current.is_completed, created.is_completed);
        assert_eq!(current.created_at, created.created_at);
    }

    #[tokio::test]
    async fn unit_edit_missing_id_is_none_not_error() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        let outcome = service.edit(TodoId::default(), "x".into()).await.unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn unit_delete_returns_prior_state_then_none_on_repeat() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        let a = user();
        let created = service.add(new_todo("ephemeral", a)).await.unwrap();

        let removed = service.delete(created.id).await.unwrap().unwrap();
        assert_eq!(removed, created);
        assert!(service.delete(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unit_delete_all_removes_only_owner_records() {
        let service = TodoServiceImpl::new(InMemoryRepo::default());
        let (a, b) = (user(), user());
        service.add(new_todo("one", a)).await.unwrap();
        service.add(new_todo("two", a)).await.unwrap();
        let kept = service.add(new_todo("keep", b)).await.unwrap();

        let summary = service.delete_all(a).await.unwrap();
        assert_eq!(summary.deleted, 2);
        assert!(service.list(a).await.unwrap().is_empty());
        assert_eq!(service.list(b).await.unwrap(), vec![kept]);
    }
}
