// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{auth, blogs, users},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Reads (`GET`) are public, as is blog update.
/// * Blog create/delete authenticate through the `Claims` extractor.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .route("/api/blogs", get(blogs::list_blogs).post(blogs::create_blog))
        .route("/api/blogs/stats", get(blogs::blog_stats))
        .route(
            "/api/blogs/{id}",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route("/api/users", get(users::list_users).post(users::register))
        .route("/api/login", post(auth::login))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
