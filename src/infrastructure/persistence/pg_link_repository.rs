//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (url, slug, ip, status, ua, create_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING slug, url, ip, status, ua, create_time
            "#,
        )
        .bind(&new_link.url)
        .bind(&new_link.slug)
        .bind(&new_link.ip)
        .bind(new_link.status)
        .bind(&new_link.ua)
        .bind(&new_link.create_time)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT slug, url, ip, status, ua, create_time
            FROM links
            WHERE slug = $1
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    /// Picks the lowest slug when several rows share the URL.
    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            SELECT slug, url, ip, status, ua, create_time
            FROM links
            WHERE url = $1
            ORDER BY slug
            LIMIT 1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
