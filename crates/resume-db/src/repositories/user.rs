//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use resume_core::entities::{NewUser, User};
use resume_core::error::DomainError;
use resume_core::traits::{Admission, RepoResult, UserRepository};
use resume_core::value_objects::CapacityPolicy;

use crate::mappers::UserRecord;
use crate::models::UserModel;

use super::error::{map_db_error, user_not_found};

const USER_COLUMNS: &str =
    "id, external_id, email, first_name, last_name, image_url, role, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_external_id(&self, external_id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE external_id = $1"
        ))
        .bind(external_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, user))]
    async fn admit(&self, user: &NewUser, policy: &CapacityPolicy) -> RepoResult<Admission> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // The count, the eviction, and the insert must observe a consistent
        // snapshot or concurrent signups can race past the ceiling.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        // Redelivered create events must not evict anyone
        let existing = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE external_id = $1"
        ))
        .bind(&user.external_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if let Some(model) = existing {
            tx.commit().await.map_err(map_db_error)?;
            return Ok(Admission {
                user: User::from(model),
                evicted: None,
            });
        }

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let mut evicted = None;
        if policy.is_at_capacity(count) {
            let cutoff = policy.idle_cutoff(Utc::now());
            let candidate = sqlx::query_as::<_, UserModel>(&format!(
                r"
                SELECT {USER_COLUMNS}
                FROM users
                WHERE updated_at < $1
                ORDER BY created_at ASC
                LIMIT 1
                FOR UPDATE
                "
            ))
            .bind(cutoff)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

            let Some(candidate) = candidate else {
                tx.rollback().await.map_err(map_db_error)?;
                return Err(DomainError::UserCapacityExhausted {
                    ceiling: policy.ceiling,
                });
            };

            sqlx::query("DELETE FROM users WHERE id = $1")
                .bind(candidate.id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

            evicted = Some(User::from(candidate));
        }

        let inserted = sqlx::query_as::<_, UserModel>(&format!(
            r"
            INSERT INTO users (external_id, email, first_name, last_name, image_url, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(&user.external_id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.image_url)
        .bind(user.role.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Admission {
            user: User::from(inserted),
            evicted,
        })
    }

    #[instrument(skip(self, user))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let record = UserRecord::new(user);
        let result = sqlx::query(
            r"
            UPDATE users
            SET email = $2, first_name = $3, last_name = $4, image_url = $5, role = $6,
                updated_at = NOW()
            WHERE external_id = $1
            ",
        )
        .bind(record.external_id)
        .bind(record.email)
        .bind(record.first_name)
        .bind(record.last_name)
        .bind(record.image_url)
        .bind(record.role)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(&user.external_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_external_id(&self, external_id: &str) -> RepoResult<bool> {
        // Owned resumes and the subscription row go with the user via
        // ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM users WHERE external_id = $1")
            .bind(external_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
