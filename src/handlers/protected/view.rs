use std::sync::Arc;

use axum::extract::{rejection::JsonRejection, Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::database::{NewView, Store, View};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

use super::utils::{self, ListQuery};

/// Strict body for POST /api/view: `pokemonId` must be a JSON integer
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateViewRequest {
    pub pokemon_id: i32,
}

impl CreateViewRequest {
    pub fn parse(body: Value) -> Result<Self, ApiError> {
        serde_json::from_value(body)
            .map_err(|e| ApiError::validation_error(format!("Invalid request body: {}", e)))
    }
}

/// POST /api/view - record that the caller opened a Pokemon's detail page
pub async fn create(
    State(store): State<Arc<dyn Store>>,
    user: Option<Extension<AuthUser>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<View> {
    let request = CreateViewRequest::parse(utils::json_body(body)?)?;
    let user = utils::require_user(user)?;

    let view = store
        .create_view(NewView {
            pokemon_id: request.pokemon_id,
            user_id: user.id,
        })
        .await?;

    Ok(ApiResponse::created(view))
}

/// GET /api/view?userId=N - views of user N, or every view when omitted.
///
/// Unlike GET /api/like this does not fall back to the caller: `userId=0`
/// and non-numeric values also return every view.
pub async fn list(
    State(store): State<Arc<dyn Store>>,
    user: Option<Extension<AuthUser>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<View>> {
    utils::require_user(user)?;
    let user_id = utils::parse_user_id_query(query.user_id.as_deref());

    let views = store.find_views(user_id).await?;
    Ok(ApiResponse::success(views))
}

#[cfg(test)]
mod tests {
    use crate::testing::TestApp;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn create_returns_201() {
        let app = TestApp::new();
        let (status, body) = app
            .call("POST", "/api/view", Some(&app.token(3)), Some(json!({ "pokemonId": 150 })))
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["pokemonId"], 150);
        assert_eq!(body["userId"], 3);
    }

    #[tokio::test]
    async fn create_schema_checks_pokemon_id() {
        let app = TestApp::new();
        let token = app.token(3);

        for payload in [
            json!({ "pokemonId": "25" }),
            json!({ "pokemonId": 2.5 }),
            json!({ "pokemonId": true }),
            json!({}),
        ] {
            let (status, body) = app.call("POST", "/api/view", Some(&token), Some(payload.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
            assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
        }
    }

    #[tokio::test]
    async fn zero_is_a_valid_view_but_not_a_valid_like() {
        let app = TestApp::new();
        let token = app.token(3);

        let (status, _) = app.call("POST", "/api/view", Some(&token), Some(json!({ "pokemonId": 0 }))).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = app.call("POST", "/api/like", Some(&token), Some(json!({ "pokemonId": 0 }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_without_user_id_returns_all_views() {
        let app = TestApp::new();
        app.seed_view(1, 7).await;
        app.seed_view(2, 8).await;
        app.seed_view(3, 7).await;

        let (status, body) = app.call("GET", "/api/view", Some(&app.token(99)), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);

        let (_, body) = app.call("GET", "/api/view?userId=7", Some(&app.token(99)), None).await;
        let pokemon: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["pokemonId"].as_i64().unwrap())
            .collect();
        assert_eq!(pokemon, vec![1, 3]);
    }

    #[tokio::test]
    async fn list_with_zero_or_non_numeric_user_id_returns_all_views() {
        let app = TestApp::new();
        app.seed_view(1, 7).await;
        app.seed_view(2, 8).await;

        for uri in ["/api/view?userId=0", "/api/view?userId=abc"] {
            let (status, body) = app.call("GET", uri, Some(&app.token(7)), None).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body.as_array().unwrap().len(), 2, "{}", uri);
        }
    }

    #[tokio::test]
    async fn routes_require_a_token() {
        let app = TestApp::new();
        let (status, _) = app.call("POST", "/api/view", None, Some(json!({ "pokemonId": 1 }))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = app.call("GET", "/api/view", Some("not-a-jwt"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn there_is_no_view_delete() {
        let app = TestApp::new();
        let (status, _) = app.call("DELETE", "/api/view", Some(&app.token(1)), None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
