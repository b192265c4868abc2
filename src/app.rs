use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::JwtKeys;
use crate::config::{AppConfig, SecurityConfig};
use crate::database::Store;
use crate::handlers;
use crate::middleware::jwt_auth_middleware;

/// Dependencies shared by every handler, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, jwt: JwtKeys) -> Self {
        Self { store, jwt }
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        state.jwt.clone()
    }
}

/// Full application: routes plus the configured global layers
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut app = router(state)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(cors_layer(&config.security));

    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

/// Routes only. `/api/like` and `/api/view` sit behind the JWT middleware;
/// `/api/auth` and `/api/user` belong to other services and are not served.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(like_routes())
        .merge(view_routes())
        .route_layer(middleware::from_fn_with_state(
            state.jwt.clone(),
            jwt_auth_middleware,
        ));

    Router::new()
        // Public
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        // Protected API
        .merge(protected)
        .fallback(handlers::public::not_found)
        .with_state(state)
}

fn like_routes() -> Router<AppState> {
    use axum::routing::delete;
    use handlers::protected as p;

    Router::new()
        .route("/api/like", get(p::like_list).post(p::like_create))
        .route("/api/like/:pokemon_id", delete(p::like_delete))
}

fn view_routes() -> Router<AppState> {
    use handlers::protected as p;

    Router::new().route("/api/view", get(p::view_list).post(p::view_create))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
