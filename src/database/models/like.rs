use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user liked a Pokemon. Duplicates per (user, pokemon) are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: i32,
    pub pokemon_id: i32,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a Like; `id` and `created_at` are assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewLike {
    pub pokemon_id: i32,
    pub user_id: i32,
}
