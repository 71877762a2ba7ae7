use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_todo::create_todo;
use super::handlers::create_user::create_user;
use super::handlers::delete_todo::delete_todo;
use super::handlers::delete_user::delete_user;
use super::handlers::get_todo::get_todo;
use super::handlers::get_user::get_user;
use super::handlers::list_todos::list_todos;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::patch_todo::patch_todo;
use super::handlers::refresh_token::refresh_token;
use super::handlers::update_user::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::identity::ports::AuthenticationServicePort;
use crate::domain::identity::ports::Clock;
use crate::domain::identity::ports::IdentityResolverPort;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub todo_service: Arc<dyn TodoServicePort>,
    pub authentication_service: Arc<dyn AuthenticationServicePort>,
    pub identity_resolver: Arc<dyn IdentityResolverPort>,
    pub clock: Arc<dyn Clock>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/auth/token", post(login))
        .route("/users", post(create_user).get(list_users))
        .route("/users/", post(create_user).get(list_users))
        .route("/users/:user_id", get(get_user));

    let protected_routes = Router::new()
        .route("/auth/refresh_token", post(refresh_token))
        .route("/users/:user_id", put(update_user).delete(delete_user))
        .route("/todos", post(create_todo).get(list_todos))
        .route("/todos/", post(create_todo).get(list_todos))
        .route(
            "/todos/:todo_id",
            get(get_todo).patch(patch_todo).delete(delete_todo),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Authorization headers are left out of the span on purpose.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
