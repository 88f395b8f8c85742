use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::application::todo_service::TodoService;
use crate::domain::session::SessionStore;
use crate::domain::todo::{NewTodo, TodoId};
use crate::http::middleware::{session_guard, CurrentUser};
use crate::http::types::ApiError;

#[derive(Clone)]
pub struct AppState<S: TodoService> {
    pub service: S,
}

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(
    state: AppState<S>,
    sessions: Arc<dyn SessionStore>,
) -> Router {
    Router::new()
        .route("/list", get(list_todos::<S>))
        .route("/add", post(add_todo::<S>))
        .route("/edit/:id", put(edit_todo::<S>))
        .route("/delete/:id", delete(delete_todo::<S>))
        .route("/deleteAll", delete(delete_all_todos::<S>))
        .layer(middleware::from_fn_with_state(sessions, session_guard))
        .with_state(state)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddBody {
    #[serde(default)]
    text: String,
    #[serde(default)]
    is_completed: bool,
}

#[derive(Deserialize)]
struct EditBody {
    #[serde(default)]
    text: String,
}

async fn add_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<AddBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // Owner comes from the session; any owner field in the body is ignored.
    let item = state
        .service
        .add(NewTodo { text: payload.text, is_completed: payload.is_completed, owner_id: user.0 })
        .await?;
    Ok(Json(json!({ "item": item })))
}

async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let items = state.service.list(user.0).await?;
    Ok(Json(json!({ "items": items })))
}

async fn edit_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<EditBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // No owner filter here: the record is located by id alone. The prior
    // state comes back; an id that matches nothing is a success with null.
    let Some(id) = parse_id(&id) else { return Ok(Json(json!({ "item": null }))) };
    let prior = state.service.edit(id, payload.text).await?;
    Ok(Json(json!({ "item": prior })))
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(id) = parse_id(&id) else { return Ok(Json(json!({ "item": null }))) };
    let prior = state.service.delete(id).await?;
    Ok(Json(json!({ "item": prior })))
}

async fn delete_all_todos<S: TodoService>(
    State(state): State<AppState<S>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let summary = state.service.delete_all(user.0).await?;
    Ok(Json(json!({ "deleted": summary.deleted })))
}

// A non-uuid id can never match a stored record, so it falls under the
// "nothing matched" success outcome rather than a distinct error kind.
fn parse_id(s: &str) -> Option<TodoId> {
    uuid::Uuid::parse_str(s).ok().map(TodoId)
}
