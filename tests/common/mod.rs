#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shortlink::domain::entities::{Link, NewAccessLog, NewLink};
use shortlink::domain::repositories::{AccessLogRepository, LinkRepository};
use shortlink::error::AppError;
use shortlink::routes::router;
use shortlink::state::AppState;
use shortlink::utils::time_format::TimeFormatter;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const SERVICE_HOST: &str = "s.example.com";

/// In-memory `links` and `logs` tables.
///
/// Individual operations can be switched to fail to simulate an unavailable
/// datastore.
#[derive(Default)]
pub struct MemoryStore {
    links: Mutex<Vec<Link>>,
    logs: Mutex<Vec<NewAccessLog>>,
    fail_log_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_log_writes(&self) {
        self.fail_log_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn insert_link(&self, slug: &str, url: &str) {
        self.links.lock().unwrap().push(Link {
            slug: slug.to_string(),
            url: url.to_string(),
            ip: None,
            status: 1,
            ua: None,
            create_time: "July 1, 2024 14:05:30".to_string(),
        });
    }

    pub fn links(&self) -> Vec<Link> {
        self.links.lock().unwrap().clone()
    }

    pub fn logs(&self) -> Vec<NewAccessLog> {
        self.logs.lock().unwrap().clone()
    }

    fn check_reads(&self) -> Result<(), AppError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LinkRepository for MemoryStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = new_link.into_link();
        self.links.lock().unwrap().push(link.clone());
        Ok(link)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        self.check_reads()?;
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.slug == slug)
            .cloned())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError> {
        self.check_reads()?;
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.url == url)
            .min_by(|a, b| a.slug.cmp(&b.slug))
            .cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_reads()
    }
}

#[async_trait]
impl AccessLogRepository for MemoryStore {
    async fn record(&self, entry: NewAccessLog) -> Result<(), AppError> {
        if self.fail_log_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database(sqlx::Error::PoolClosed));
        }
        self.logs.lock().unwrap().push(entry);
        Ok(())
    }
}

pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    AppState::new(store.clone(), store, TimeFormatter::default())
}

pub fn create_test_server(store: Arc<MemoryStore>) -> TestServer {
    TestServer::new(router(create_test_state(store))).unwrap()
}
