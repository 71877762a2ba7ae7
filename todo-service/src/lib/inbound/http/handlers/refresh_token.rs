use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::login::TokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::AuthContext;
use crate::inbound::http::router::AppState;

pub async fn refresh_token(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .authentication_service
        .refresh(&context, state.clock.now())
        .await
        .map_err(ApiError::from)
        .map(|ref token| ApiSuccess::new(StatusCode::OK, token.into()))
}
