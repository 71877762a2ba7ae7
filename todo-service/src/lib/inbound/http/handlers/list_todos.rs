use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::TodoResponseData;
use crate::domain::identity::AuthContext;
use crate::domain::page::Page;
use crate::domain::todo::models::TodoFilter;
use crate::domain::todo::models::TodoState;
use crate::inbound::http::router::AppState;
use crate::todo::errors::TodoError;

pub async fn list_todos(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Query(query): Query<ListTodosQuery>,
) -> Result<ApiSuccess<ListTodosResponseData>, ApiError> {
    let filter = query.try_into_filter()?;

    state
        .todo_service
        .list_todos(&context, filter)
        .await
        .map_err(ApiError::from)
        .map(|todos| {
            ApiSuccess::new(
                StatusCode::OK,
                ListTodosResponseData {
                    todos: todos.iter().map(TodoResponseData::from).collect(),
                },
            )
        })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTodosQuery {
    title: Option<String>,
    description: Option<String>,
    state: Option<TodoState>,
    offset: Option<i64>,
    limit: Option<i64>,
}

impl ListTodosQuery {
    fn try_into_filter(self) -> Result<TodoFilter, TodoError> {
        Ok(TodoFilter {
            title: self.title,
            description: self.description,
            state: self.state,
            page: Page::new(self.offset, self.limit)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTodosResponseData {
    pub todos: Vec<TodoResponseData>,
}
