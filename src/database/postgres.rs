use async_trait::async_trait;
use sqlx::PgPool;

use super::manager::DatabaseError;
use super::models::{Like, NewLike, NewView, View};
use super::store::Store;

/// `Store` backed by a shared PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_like(&self, new: NewLike) -> Result<Like, DatabaseError> {
        let like = sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO likes (pokemon_id, user_id)
            VALUES ($1, $2)
            RETURNING id, pokemon_id, user_id, created_at
            "#,
        )
        .bind(new.pokemon_id)
        .bind(new.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(like)
    }

    async fn find_likes(&self, user_id: i32) -> Result<Vec<Like>, DatabaseError> {
        let likes = sqlx::query_as::<_, Like>(
            r#"
            SELECT id, pokemon_id, user_id, created_at
            FROM likes
            WHERE user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(likes)
    }

    async fn delete_likes(&self, pokemon_id: i32, user_id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM likes WHERE pokemon_id = $1 AND user_id = $2")
            .bind(pokemon_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn create_view(&self, new: NewView) -> Result<View, DatabaseError> {
        let view = sqlx::query_as::<_, View>(
            r#"
            INSERT INTO views (pokemon_id, user_id)
            VALUES ($1, $2)
            RETURNING id, pokemon_id, user_id, created_at
            "#,
        )
        .bind(new.pokemon_id)
        .bind(new.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(view)
    }

    async fn find_views(&self, user_id: Option<i32>) -> Result<Vec<View>, DatabaseError> {
        // NULL filter selects every row
        let views = sqlx::query_as::<_, View>(
            r#"
            SELECT id, pokemon_id, user_id, created_at
            FROM views
            WHERE $1::INTEGER IS NULL OR user_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(views)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Closed database pool");
    }
}
