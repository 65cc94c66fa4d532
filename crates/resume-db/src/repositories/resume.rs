//! PostgreSQL implementation of ResumeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use resume_core::entities::Resume;
use resume_core::traits::{RepoResult, ResumeRepository};

use crate::mappers::ResumeRecord;
use crate::models::ResumeModel;

use super::error::{map_db_error, resume_not_found};

const RESUME_COLUMNS: &str = "id, user_id, title, description, photo_url, first_name, last_name, \
     job_title, city, country, phone, email, summary, skills, work_experiences, educations, \
     color_hex, border_style, created_at, updated_at";

/// PostgreSQL implementation of ResumeRepository
#[derive(Clone)]
pub struct PgResumeRepository {
    pool: PgPool,
}

impl PgResumeRepository {
    /// Create a new PgResumeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Resume>> {
        let result = sqlx::query_as::<_, ResumeModel>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Resume::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Uuid) -> RepoResult<Vec<Resume>> {
        let rows = sqlx::query_as::<_, ResumeModel>(&format!(
            "SELECT {RESUME_COLUMNS} FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Resume::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_user(&self, user_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM resumes WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, resume))]
    async fn create(&self, resume: &Resume) -> RepoResult<()> {
        let record = ResumeRecord::new(resume);
        sqlx::query(
            r"
            INSERT INTO resumes (
                id, user_id, title, description, photo_url, first_name, last_name,
                job_title, city, country, phone, email, summary, skills,
                work_experiences, educations, color_hex, border_style, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    $17, $18, $19, $20)
            ",
        )
        .bind(resume.id)
        .bind(resume.user_id)
        .bind(&resume.title)
        .bind(&resume.description)
        .bind(&resume.photo_url)
        .bind(&resume.first_name)
        .bind(&resume.last_name)
        .bind(&resume.job_title)
        .bind(&resume.city)
        .bind(&resume.country)
        .bind(&resume.phone)
        .bind(&resume.email)
        .bind(&resume.summary)
        .bind(&record.skills)
        .bind(&record.work_experiences)
        .bind(&record.educations)
        .bind(&resume.color_hex)
        .bind(record.border_style)
        .bind(resume.created_at)
        .bind(resume.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, resume))]
    async fn update(&self, resume: &Resume) -> RepoResult<()> {
        let record = ResumeRecord::new(resume);
        let result = sqlx::query(
            r"
            UPDATE resumes
            SET title = $2, description = $3, photo_url = $4, first_name = $5, last_name = $6,
                job_title = $7, city = $8, country = $9, phone = $10, email = $11, summary = $12,
                skills = $13, work_experiences = $14, educations = $15, color_hex = $16,
                border_style = $17, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(resume.id)
        .bind(&resume.title)
        .bind(&resume.description)
        .bind(&resume.photo_url)
        .bind(&resume.first_name)
        .bind(&resume.last_name)
        .bind(&resume.job_title)
        .bind(&resume.city)
        .bind(&resume.country)
        .bind(&resume.phone)
        .bind(&resume.email)
        .bind(&resume.summary)
        .bind(&record.skills)
        .bind(&record.work_experiences)
        .bind(&record.educations)
        .bind(&resume.color_hex)
        .bind(record.border_style)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(resume_not_found(resume.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(resume_not_found(id));
        }

        Ok(())
    }
}
