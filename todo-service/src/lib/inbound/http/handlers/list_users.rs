use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserResponseData;
use crate::domain::page::Page;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<ApiSuccess<ListUsersResponseData>, ApiError> {
    let page = Page::new(query.offset, query.limit).map_err(UserError::from)?;

    state
        .user_service
        .list_users(page)
        .await
        .map_err(ApiError::from)
        .map(|users| {
            ApiSuccess::new(
                StatusCode::OK,
                ListUsersResponseData {
                    users: users.iter().map(UserResponseData::from).collect(),
                },
            )
        })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsersQuery {
    offset: Option<i64>,
    limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUsersResponseData {
    pub users: Vec<UserResponseData>,
}
