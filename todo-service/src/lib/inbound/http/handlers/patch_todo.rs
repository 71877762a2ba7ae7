use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoResponseData;
use crate::domain::identity::AuthContext;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoPatch;
use crate::domain::todo::models::TodoState;
use crate::inbound::http::router::AppState;

/// HTTP request body for a partial to-do update (raw JSON)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<TodoState>,
}

impl From<PatchTodoRequest> for TodoPatch {
    fn from(req: PatchTodoRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            state: req.state,
        }
    }
}

pub async fn patch_todo(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Path(todo_id): Path<i64>,
    Json(req): Json<PatchTodoRequest>,
) -> Result<ApiSuccess<TodoResponseData>, ApiError> {
    state
        .todo_service
        .patch_todo(&context, TodoId(todo_id), req.into())
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::OK, todo.into()))
}
