use async_trait::async_trait;

use super::manager::DatabaseError;
use super::models::{Like, NewLike, NewView, View};

/// Persistence operations behind the like and view routes.
///
/// Every handler issues exactly one of these per request. Implementations own
/// whatever concurrency control they need; callers hold no locks.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert one Like and return it with its generated id and timestamp
    async fn create_like(&self, new: NewLike) -> Result<Like, DatabaseError>;

    /// All Likes for `user_id`, oldest first
    async fn find_likes(&self, user_id: i32) -> Result<Vec<Like>, DatabaseError>;

    /// Remove every Like matching the (pokemon, user) pair. Returns the row count.
    async fn delete_likes(&self, pokemon_id: i32, user_id: i32) -> Result<u64, DatabaseError>;

    async fn create_view(&self, new: NewView) -> Result<View, DatabaseError>;

    /// Views for `user_id`, or every View when `None`, oldest first
    async fn find_views(&self, user_id: Option<i32>) -> Result<Vec<View>, DatabaseError>;

    /// Connectivity check used by `/health`
    async fn ping(&self) -> Result<(), DatabaseError>;

    /// Release connections on shutdown
    async fn close(&self) {}
}
