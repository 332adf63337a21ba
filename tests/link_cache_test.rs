use std::collections::HashMap;

use fancam::{
    error::CacheError,
    management::{LinkCacheManager, OverrideTable},
    server,
};
use serde_json::{Value, json};

#[tokio::test]
async fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope/youtube-links.json");

    let cache = LinkCacheManager::load(&path).await.unwrap();

    assert_eq!(cache.count().await, 0);
    assert!(!path.exists());
}

#[tokio::test]
async fn flush_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache/youtube-links.json");

    let cache = LinkCacheManager::load(&path).await.unwrap();
    cache
        .put("NewJeans", "Ditto", "https://www.youtube.com/watch?v=a".to_string())
        .await;
    cache
        .put("IVE", "I AM", "https://www.youtube.com/watch?v=b".to_string())
        .await;
    cache.flush().await.unwrap();

    let reloaded = LinkCacheManager::load(&path).await.unwrap();
    assert_eq!(reloaded.all().await, cache.all().await);
    assert_eq!(
        reloaded.get("IVE", "I AM").await.as_deref(),
        Some("https://www.youtube.com/watch?v=b")
    );
}

#[tokio::test]
async fn persisted_file_is_flat_json_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("youtube-links.json");

    let cache = LinkCacheManager::new(&path, None);
    cache
        .put("aespa", "Next Level", "https://www.youtube.com/watch?v=c".to_string())
        .await;
    cache.flush().await.unwrap();

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({ "aespa_Next Level": "https://www.youtube.com/watch?v=c" })
    );
}

#[tokio::test]
async fn flush_overwrites_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("youtube-links.json");
    std::fs::write(&path, r#"{"old_entry": "https://example.com"}"#).unwrap();

    let cache = LinkCacheManager::new(&path, Some(HashMap::new()));
    cache.flush().await.unwrap();

    let reloaded = LinkCacheManager::load(&path).await.unwrap();
    assert_eq!(reloaded.count().await, 0);
}

#[tokio::test]
async fn put_overwrites_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let cache = LinkCacheManager::new(dir.path().join("c.json"), None);

    cache.put("A", "B", "first".to_string()).await;
    cache.put("A", "B", "second".to_string()).await;

    assert_eq!(cache.get("A", "B").await.as_deref(), Some("second"));
    assert_eq!(cache.count().await, 1);
}

#[tokio::test]
async fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("youtube-links.json");
    std::fs::write(&path, "not json").unwrap();

    let result = LinkCacheManager::load(&path).await;

    assert!(matches!(result, Err(CacheError::SerdeError(_))));
}

#[tokio::test]
async fn flush_failure_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    // a directory where the file should be
    let cache = LinkCacheManager::new(dir.path(), None);
    cache.put("A", "B", "url".to_string()).await;

    assert!(cache.flush().await.is_err());
    assert!(!server::flush_cache(&cache).await);
}

#[tokio::test]
async fn override_file_extends_builtins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overrides.json");
    std::fs::write(
        &path,
        r#"[
            {"artist": "IVE", "track": "After LIKE", "url": "https://www.youtube.com/watch?v=x"},
            {"artist": "NewJeans", "track": "Hype Boy", "url": "https://www.youtube.com/watch?v=y"}
        ]"#,
    )
    .unwrap();

    let table = OverrideTable::load_with_file(&path).await.unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.lookup("IVE", "After LIKE"),
        Some("https://www.youtube.com/watch?v=x")
    );
    assert_eq!(
        table.lookup("NewJeans", "Hype Boy"),
        Some("https://www.youtube.com/watch?v=y")
    );
}
