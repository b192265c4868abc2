use std::sync::Arc;

use axum::extract::{rejection::JsonRejection, Path, Query, State};
use axum::{Extension, Json};
use serde::Serialize;
use serde_json::Value;

use crate::database::{Like, NewLike, Store};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

use super::utils::{self, ListQuery};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLikesResponse {
    pub deleted_count: u64,
}

/// POST /api/like - record that the caller likes `pokemonId`
///
/// The body check runs before the identity check, so a missing `pokemonId`
/// is reported as 400 even when no identity is attached.
pub async fn create(
    State(store): State<Arc<dyn Store>>,
    user: Option<Extension<AuthUser>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Like> {
    let body = utils::json_body(body)?;
    let pokemon_id = utils::loose_pokemon_id(&body)?;
    let user = utils::require_user(user)?;

    let like = store
        .create_like(NewLike {
            pokemon_id,
            user_id: user.id,
        })
        .await?;

    tracing::debug!("User {} liked pokemon {} (like {})", user.id, pokemon_id, like.id);
    Ok(ApiResponse::created(like))
}

/// GET /api/like?userId=N - likes of user N, or of the caller when omitted.
/// `userId=0` and non-numeric values count as omitted.
///
/// Any authenticated caller may read any user's likes.
pub async fn list(
    State(store): State<Arc<dyn Store>>,
    user: Option<Extension<AuthUser>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<Like>> {
    let user = utils::require_user(user)?;
    let user_id = utils::parse_user_id_query(query.user_id.as_deref()).unwrap_or(user.id);

    let likes = store.find_likes(user_id).await?;
    Ok(ApiResponse::success(likes))
}

/// DELETE /api/like/:pokemonId - remove every like the caller has for `pokemonId`
pub async fn remove(
    State(store): State<Arc<dyn Store>>,
    user: Option<Extension<AuthUser>>,
    Path(pokemon_id): Path<String>,
) -> ApiResult<DeleteLikesResponse> {
    let user = utils::require_user(user)?;
    let pokemon_id = utils::parse_pokemon_id_param(&pokemon_id)?;

    let deleted_count = store.delete_likes(pokemon_id, user.id).await?;

    tracing::debug!("User {} unliked pokemon {} ({} rows)", user.id, pokemon_id, deleted_count);
    Ok(ApiResponse::success(DeleteLikesResponse { deleted_count }))
}
