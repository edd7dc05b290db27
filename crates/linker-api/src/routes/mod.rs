//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, admin, auth, chat, health, issues, proxies, users};
use crate::state::AppState;

/// Create the main API router with all routes and the 404 fallback
///
/// Known paths called with an unrouted method get the same 404 as unknown paths.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        // Must follow `nest`: only routes registered so far receive it
        .method_not_allowed_fallback(handlers::not_found)
        .fallback(handlers::not_found)
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(chat_routes())
        .merge(issue_routes())
        .merge(proxy_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/verify", post(auth::verify))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/:id", get(users::get_user).put(users::update_user))
}

/// Chat routes
fn chat_routes() -> Router<AppState> {
    Router::new().route(
        "/chat/messages",
        get(chat::list_messages).post(chat::post_message),
    )
}

/// Issue routes
fn issue_routes() -> Router<AppState> {
    Router::new()
        .route("/issues", get(issues::list_issues).post(issues::create_issue))
        .route("/issues/:id", get(issues::get_issue).put(issues::update_issue))
}

/// Proxy link routes
fn proxy_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/proxies",
            get(proxies::list_proxies).post(proxies::create_proxy),
        )
        .route(
            "/proxies/:id",
            get(proxies::get_proxy)
                .put(proxies::update_proxy)
                .delete(proxies::delete_proxy),
        )
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/stats", get(admin::stats))
}
