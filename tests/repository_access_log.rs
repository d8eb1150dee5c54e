use shortlink::domain::entities::NewAccessLog;
use shortlink::domain::repositories::AccessLogRepository;
use shortlink::infrastructure::persistence::PgAccessLogRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_record_access(pool: PgPool) {
    let repo = PgAccessLogRepository::new(Arc::new(pool.clone()));

    repo.record(NewAccessLog {
        url: "https://example.com/a".to_string(),
        slug: "ab".to_string(),
        ip: Some("203.0.113.9".to_string()),
        referer: None,
        ua: Some("Mozilla/5.0".to_string()),
        create_time: "July 1, 2024 14:05:30".to_string(),
    })
    .await
    .unwrap();

    let (slug, url, referer): (String, String, Option<String>) =
        sqlx::query_as("SELECT slug, url, referer FROM logs")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert_eq!(slug, "ab");
    assert_eq!(url, "https://example.com/a");
    assert!(referer.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_record_appends(pool: PgPool) {
    let repo = PgAccessLogRepository::new(Arc::new(pool.clone()));

    for _ in 0..3 {
        repo.record(NewAccessLog {
            url: "https://example.com".to_string(),
            slug: "same".to_string(),
            ip: None,
            referer: None,
            ua: None,
            create_time: "July 1, 2024 14:05:30".to_string(),
        })
        .await
        .unwrap();
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM logs WHERE slug = $1")
        .bind("same")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(count, 3);
}
