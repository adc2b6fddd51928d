use gardenist::storage::LocalStorage;

#[tokio::test]
async fn test_storage_creation() {
    // Test that we can create local storage with a fresh schema
    let result = LocalStorage::new(true).await;
    assert!(result.is_ok(), "LocalStorage should be created successfully");
}

#[tokio::test]
async fn test_in_memory_databases_are_independent() {
    // Two live instances must not share state or conflict on schema setup
    let first = LocalStorage::new(true).await;
    let second = LocalStorage::new(true).await;
    assert!(first.is_ok());
    assert!(second.is_ok());
}
