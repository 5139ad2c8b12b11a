//! Bucket storage integration tests.
//!
//! These run against a real S3-compatible endpoint and are ignored by
//! default; set the STORAGE_* environment variables (or a .env file) to run
//! them.

use festa_storage::{BucketClient, StorageError};

/// Test bucket connectivity.
#[tokio::test]
#[ignore = "requires storage credentials"]
async fn test_bucket_connection() {
    dotenvy::dotenv().ok();

    let client = BucketClient::from_env().expect("Failed to create bucket client");

    client
        .check_connectivity()
        .await
        .expect("Failed to check bucket connectivity");

    println!("Bucket connectivity check passed");
}

/// Test upload, listing and download of one object.
#[tokio::test]
#[ignore = "requires storage credentials"]
async fn test_upload_list_download() {
    dotenvy::dotenv().ok();

    let client = BucketClient::from_env().expect("Failed to create bucket client");

    let key = festa_models::object_key("integration_test.jpg", chrono::Utc::now());
    let content = b"integration test content".to_vec();

    client
        .upload_bytes(
            content.clone(),
            &key,
            "image/jpeg",
            &[("original-name", "integration_test.jpg".to_string())],
        )
        .await
        .expect("Failed to upload");

    let listing = client.list_objects("").await.expect("Failed to list");
    assert!(listing.iter().any(|o| o.key == key));

    let downloaded = client.download_bytes(&key).await.expect("Failed to download");
    assert_eq!(downloaded, content);

    let url = client.object_url(&key).await.expect("Failed to derive URL");
    println!("Object URL: {}", url);
}

/// Test that a second upload under the same key is rejected.
#[tokio::test]
#[ignore = "requires storage credentials"]
async fn test_no_overwrite() {
    dotenvy::dotenv().ok();

    let client = BucketClient::from_env().expect("Failed to create bucket client");

    let key = festa_models::object_key("no_overwrite.jpg", chrono::Utc::now());

    client
        .upload_bytes(b"first".to_vec(), &key, "image/jpeg", &[])
        .await
        .expect("First upload should succeed");

    let second = client
        .upload_bytes(b"second".to_vec(), &key, "image/jpeg", &[])
        .await;

    assert!(
        matches!(second, Err(StorageError::AlreadyExists(_))),
        "second upload under the same key should be rejected, got {:?}",
        second
    );

    let bytes = client.download_bytes(&key).await.expect("Failed to download");
    assert_eq!(bytes, b"first");
}

/// Test that downloading a missing key maps to NotFound.
#[tokio::test]
#[ignore = "requires storage credentials"]
async fn test_missing_key_is_not_found() {
    dotenvy::dotenv().ok();

    let client = BucketClient::from_env().expect("Failed to create bucket client");

    let result = client.download_bytes("does_not_exist_xyz.jpg").await;
    assert!(matches!(result, Err(StorageError::NotFound(_))));
}
