use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use std::sync::Arc;

use crate::config::Settings;
use crate::services::UserService;

use super::dto::HealthResponse;
use super::handlers;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub user_service: Arc<UserService>,
}

pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout));

    // The users collection answers with and without the trailing slash;
    // axum treats them as distinct paths, so both are registered.
    let users_collection = get(handlers::users::list_users).post(handlers::users::create_user);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1/auth", auth_routes)
        .route("/api/v1/users", users_collection.clone())
        .route("/api/v1/users/", users_collection)
        .route(
            "/api/v1/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        app: state.settings.app.name.clone(),
        version: state.settings.app.version.clone(),
        debug: state.settings.app.debug,
    })
}
