use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::app::{app, router, AppState};
use crate::auth::{generate_jwt, JwtKeys};
use crate::config::AppConfig;
use crate::database::{DatabaseError, Like, MemoryStore, NewLike, NewView, Store, View};

pub const TEST_SECRET: &str = "pokedex-test-secret";

/// Router wired to an in-memory (or substitute) store, driven in-process
pub struct TestApp {
    pub router: Router,
    pub store: Arc<dyn Store>,
    keys: JwtKeys,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn Store>) -> Self {
        let keys = JwtKeys::new(TEST_SECRET, 1);
        let router = router(AppState::new(store.clone(), keys.clone()));
        Self { router, store, keys }
    }

    /// Full `app()` stack (body limit, CORS, trace) over a memory store
    pub fn with_config(config: &AppConfig) -> Self {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let keys = JwtKeys::new(TEST_SECRET, 1);
        let router = app(AppState::new(store.clone(), keys.clone()), config);
        Self { router, store, keys }
    }

    /// Bearer token for `user_id`
    pub fn token(&self, user_id: i32) -> String {
        generate_jwt(&self.keys, user_id, format!("trainer{}", user_id)).expect("mint test token")
    }

    pub async fn seed_like(&self, pokemon_id: i32, user_id: i32) -> Like {
        self.store
            .create_like(NewLike { pokemon_id, user_id })
            .await
            .expect("seed like")
    }

    pub async fn seed_view(&self, pokemon_id: i32, user_id: i32) -> View {
        self.store
            .create_view(NewView { pokemon_id, user_id })
            .await
            .expect("seed view")
    }

    /// Send one request; returns the status and the body parsed as JSON
    /// (`null` when empty or not JSON).
    pub async fn call(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&v).unwrap())
            }
            None => Body::empty(),
        };

        let req = builder.body(body).unwrap();
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }
}

/// Store whose every call fails, for exercising the error path
pub struct FailingStore;

fn refused() -> DatabaseError {
    DatabaseError::QueryError("connection refused".to_string())
}

#[async_trait]
impl Store for FailingStore {
    async fn create_like(&self, _new: NewLike) -> Result<Like, DatabaseError> {
        Err(refused())
    }

    async fn find_likes(&self, _user_id: i32) -> Result<Vec<Like>, DatabaseError> {
        Err(refused())
    }

    async fn delete_likes(&self, _pokemon_id: i32, _user_id: i32) -> Result<u64, DatabaseError> {
        Err(refused())
    }

    async fn create_view(&self, _new: NewView) -> Result<View, DatabaseError> {
        Err(refused())
    }

    async fn find_views(&self, _user_id: Option<i32>) -> Result<Vec<View>, DatabaseError> {
        Err(refused())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(refused())
    }
}
