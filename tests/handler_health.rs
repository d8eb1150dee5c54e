mod common;

use common::MemoryStore;

#[tokio::test]
async fn test_health_ok() {
    let server = common::create_test_server(MemoryStore::new());

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_health_degraded() {
    let store = MemoryStore::new();
    store.fail_reads();
    let server = common::create_test_server(store);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["database"]["status"], "error");
}
