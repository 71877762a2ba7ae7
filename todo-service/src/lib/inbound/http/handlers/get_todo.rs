use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::TodoResponseData;
use crate::domain::identity::AuthContext;
use crate::domain::todo::models::TodoId;
use crate::inbound::http::router::AppState;

pub async fn get_todo(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Path(todo_id): Path<i64>,
) -> Result<ApiSuccess<TodoResponseData>, ApiError> {
    state
        .todo_service
        .get_todo(&context, TodoId(todo_id))
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::OK, todo.into()))
}
