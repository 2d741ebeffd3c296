//! Insert-only job store.
//!
//! `AppState` holds an `Arc<dyn JobRepository>`; production uses Postgres,
//! tests use the in-memory store in `testing`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::job::{JobRecord, JobRow, NewJobRecord};

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Inserts one job and returns it with id and timestamps assigned.
    async fn insert(&self, job: NewJobRecord) -> Result<JobRecord, sqlx::Error>;

    /// Jobs owned by `company_id`, newest first.
    async fn list_by_company(
        &self,
        company_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JobRecord>, sqlx::Error>;
}

pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn insert(&self, job: NewJobRecord) -> Result<JobRecord, sqlx::Error> {
        let id = Uuid::new_v4();
        let data = &job.extracted_data;

        let row: JobRow = sqlx::query_as(
            r#"
            INSERT INTO jobs
                (id, company_id, raw_description, job_title, experience, position,
                 skills, location, job_type, status, metadata)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(job.company_id)
        .bind(&job.raw_description)
        .bind(&data.job_title)
        .bind(&data.experience)
        .bind(&data.position)
        .bind(&data.skills)
        .bind(&data.location)
        .bind(&data.job_type)
        .bind(job.status.as_str())
        .bind(&job.metadata)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted job {id} for company {}", job.company_id);
        into_record(row)
    }

    async fn list_by_company(
        &self,
        company_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<JobRecord>, sqlx::Error> {
        let rows: Vec<JobRow> = sqlx::query_as(
            "SELECT * FROM jobs WHERE company_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(company_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(into_record).collect()
    }
}

fn into_record(row: JobRow) -> Result<JobRecord, sqlx::Error> {
    JobRecord::try_from(row).map_err(|e| sqlx::Error::Decode(e.into()))
}
