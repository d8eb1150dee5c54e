//! PostgreSQL implementation of the access log repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::NewAccessLog;
use crate::domain::repositories::AccessLogRepository;
use crate::error::AppError;

pub struct PgAccessLogRepository {
    pool: Arc<PgPool>,
}

impl PgAccessLogRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessLogRepository for PgAccessLogRepository {
    async fn record(&self, entry: NewAccessLog) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO logs (url, slug, ip, referer, ua, create_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&entry.url)
        .bind(&entry.slug)
        .bind(&entry.ip)
        .bind(&entry.referer)
        .bind(&entry.ua)
        .bind(&entry.create_time)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
