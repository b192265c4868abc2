use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::manager::DatabaseError;
use super::models::{Like, NewLike, NewView, View};
use super::store::Store;

/// Process-local `Store`. Used by the test suites and by `DATABASE_BACKEND=memory`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    likes: Vec<Like>,
    views: Vec<View>,
    last_like_id: i32,
    last_view_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(last: &mut i32, table: &str) -> Result<i32, DatabaseError> {
    *last = last
        .checked_add(1)
        .ok_or_else(|| DatabaseError::QueryError(format!("{} id sequence exhausted", table)))?;
    Ok(*last)
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_like(&self, new: NewLike) -> Result<Like, DatabaseError> {
        let mut tables = self.tables.write().await;
        let like = Like {
            id: next_id(&mut tables.last_like_id, "likes")?,
            pokemon_id: new.pokemon_id,
            user_id: new.user_id,
            created_at: Utc::now(),
        };
        tables.likes.push(like.clone());
        Ok(like)
    }

    async fn find_likes(&self, user_id: i32) -> Result<Vec<Like>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .likes
            .iter()
            .filter(|like| like.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_likes(&self, pokemon_id: i32, user_id: i32) -> Result<u64, DatabaseError> {
        let mut tables = self.tables.write().await;
        let before = tables.likes.len();
        tables
            .likes
            .retain(|like| !(like.pokemon_id == pokemon_id && like.user_id == user_id));
        Ok((before - tables.likes.len()) as u64)
    }

    async fn create_view(&self, new: NewView) -> Result<View, DatabaseError> {
        let mut tables = self.tables.write().await;
        let view = View {
            id: next_id(&mut tables.last_view_id, "views")?,
            pokemon_id: new.pokemon_id,
            user_id: new.user_id,
            created_at: Utc::now(),
        };
        tables.views.push(view.clone());
        Ok(view)
    }

    async fn find_views(&self, user_id: Option<i32>) -> Result<Vec<View>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .views
            .iter()
            .filter(|view| user_id.map_or(true, |id| view.user_id == id))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
