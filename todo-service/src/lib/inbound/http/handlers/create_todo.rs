use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoResponseData;
use crate::domain::identity::AuthContext;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::TodoState;
use crate::inbound::http::router::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<ApiSuccess<TodoResponseData>, ApiError> {
    state
        .todo_service
        .create_todo(&context, body.into())
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::CREATED, todo.into()))
}

/// HTTP request body for creating a to-do (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoRequest {
    title: String,
    description: String,
    state: TodoState,
}

impl From<CreateTodoRequest> for CreateTodoCommand {
    fn from(body: CreateTodoRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
            state: body.state,
        }
    }
}
