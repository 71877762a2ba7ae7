use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::identity::AccessToken;
use crate::domain::identity::Credential;
use crate::inbound::http::router::AppState;

/// Exchange form-encoded credentials for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    state
        .authentication_service
        .login(
            Credential::new(form.username, form.password),
            state.clock.now(),
        )
        .await
        .map_err(ApiError::from)
        .map(|ref token| ApiSuccess::new(StatusCode::OK, token.into()))
}

/// OAuth2 password-flow form fields; anything else in the form is ignored.
#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub access_token: String,
    pub token_type: String,
}

impl From<&AccessToken> for TokenResponseData {
    fn from(token: &AccessToken) -> Self {
        Self {
            access_token: token.token.clone(),
            token_type: "bearer".to_string(),
        }
    }
}
