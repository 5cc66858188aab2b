pub mod error;
pub mod routes;
pub mod state;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, patch, post},
};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    let cors = if state.settings.app.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = state
            .settings
            .app
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Auth: minimal register/login + the /me stub
    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        .route("/me", get(routes::auth::me));

    // Full-profile registrations
    let user_routes = Router::new().route("/register", post(routes::user::register));
    let admin_routes = Router::new().route("/register", post(routes::admin::register));

    // NGO directory & proximity search
    let ngo_routes = Router::new()
        .route("/", get(routes::ngo::list))
        .route("/register", post(routes::ngo::register))
        .route("/nearby", get(routes::ngo::nearby));

    // Help request lifecycle
    let help_request_routes = Router::new()
        .route(
            "/",
            get(routes::help_request::list).post(routes::help_request::create),
        )
        .route("/{id}", get(routes::help_request::get))
        .route("/{id}/accept", patch(routes::help_request::accept))
        .route("/{id}/helped", patch(routes::help_request::helped));

    let api = Router::new()
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/admin", admin_routes)
        .nest("/ngos", ngo_routes)
        .nest("/help-requests", help_request_routes);

    // Health check
    let health = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api)
        .merge(health)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
