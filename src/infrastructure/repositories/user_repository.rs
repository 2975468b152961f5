use crate::infrastructure::db::DbPool;
use crate::{
    domain::user::{ProfileStats, Technology, User},
    error::{AppError, AppResult},
};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Technologies the user follows, ordered by name
    pub async fn find_technologies(&self, user_id: Uuid) -> AppResult<Vec<Technology>> {
        let pool = self.pool.as_ref();
        let technologies = sqlx::query_as::<_, Technology>(
            r#"
            SELECT t.id, t.name, t.category, t.color
            FROM user_technologies ut
            JOIN technologies t ON t.id = ut.technology_id
            WHERE ut.user_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(technologies)
    }

    pub async fn profile_stats(&self, user_id: Uuid) -> AppResult<ProfileStats> {
        let pool = self.pool.as_ref();
        let stats = sqlx::query_as::<_, ProfileStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM follows WHERE following_id = $1) AS followers_count,
                (SELECT COUNT(*) FROM follows WHERE follower_id = $1) AS following_count,
                (SELECT COUNT(*) FROM likes WHERE user_id = $1) AS liked_count,
                (SELECT COUNT(*) FROM bookmarks WHERE user_id = $1) AS bookmarked_count
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(stats)
    }

    /// Update username and/or image; `None` keeps the stored value
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        username: Option<&str>,
        image: Option<&str>,
    ) -> AppResult<Option<User>> {
        let pool = self.pool.as_ref();
        let now = chrono::Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = COALESCE($1, username),
                image = COALESCE($2, image),
                updated_at = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(image)
        .bind(now)
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return AppError::Conflict("Username already taken".to_string());
                }
            }
            AppError::Database(e)
        })?;

        Ok(user)
    }

    /// Replace the user's technology set in one transaction
    pub async fn replace_technologies(
        &self,
        user_id: Uuid,
        technology_ids: &[Uuid],
    ) -> AppResult<()> {
        let unique: Vec<Uuid> = technology_ids
            .iter()
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_technologies WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let inserted = sqlx::query(
            r#"
            INSERT INTO user_technologies (user_id, technology_id)
            SELECT $1, t.id
            FROM technologies t
            WHERE t.id = ANY($2)
            "#,
        )
        .bind(user_id)
        .bind(unique.as_slice())
        .execute(&mut *tx)
        .await?;

        // dropping the transaction rolls it back
        if inserted.rows_affected() != unique.len() as u64 {
            return Err(AppError::BadRequest("Unknown technology id".to_string()));
        }

        tx.commit().await?;

        Ok(())
    }
}
