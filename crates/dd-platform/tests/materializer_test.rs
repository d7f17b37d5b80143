//! Filesystem materializer tests.

use std::sync::Arc;

use tempfile::TempDir;
use tokio::fs;

use dd_core::ports::{MediaPickerPort, ProviderFault, ResourceMaterializerPort};
use dd_core::resource::TransientResource;
use dd_platform::sim::SimMediaLibrary;
use dd_platform::FsResourceMaterializer;

fn setup() -> (TempDir, TempDir, Arc<SimMediaLibrary>, FsResourceMaterializer) {
    let staging = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();
    let media = Arc::new(SimMediaLibrary::new(staging.path()));
    let materializer = FsResourceMaterializer::new(media.clone(), cache.path());
    (staging, cache, media, materializer)
}

#[tokio::test]
async fn materialized_copy_is_byte_identical() {
    let (_staging, cache, media, materializer) = setup();

    let bytes: Vec<u8> = (0..4096).map(|n| (n % 251) as u8).collect();
    media.stage_photo("holiday.jpg", bytes.clone());
    let transient = media.pick_photo().await.unwrap().unwrap();

    let resource = materializer.materialize(&transient).await.unwrap();

    assert_eq!(resource.byte_len, bytes.len() as u64);
    assert_eq!(resource.file_name, "holiday.jpg");
    let copied = fs::read(&resource.path).await.unwrap();
    assert_eq!(copied, bytes, "durable copy must match the source bytes");
    assert!(resource.path.starts_with(cache.path()));
}

#[tokio::test]
async fn unreadable_source_yields_no_resource() {
    let (_staging, _cache, media, materializer) = setup();

    media.stage_photo("gone.jpg", b"abc".to_vec());
    let transient = media.pick_photo().await.unwrap().unwrap();
    media.make_unreadable();

    let result = materializer.materialize(&transient).await;

    assert!(matches!(result, Err(ProviderFault::Failed(_))));
}

#[tokio::test]
async fn missing_source_file_yields_no_resource_and_no_partial_reference() {
    let (staging, cache, _media, materializer) = setup();

    // A handle whose provider-side bytes vanished before the copy began.
    let transient = TransientResource::new("vanished.jpg", staging.path().join("vanished.jpg"));

    let result = materializer.materialize(&transient).await;

    assert!(result.is_err());
    assert!(
        !cache.path().join("vanished.jpg").exists(),
        "failed materialization must not leave a destination file behind"
    );
}

#[tokio::test]
async fn rematerializing_replaces_the_previous_copy() {
    let (_staging, _cache, media, materializer) = setup();

    media.stage_photo("shot.jpg", b"first".to_vec());
    let first = media.pick_photo().await.unwrap().unwrap();
    materializer.materialize(&first).await.unwrap();

    media.stage_photo("shot.jpg", b"second!".to_vec());
    let second = media.pick_photo().await.unwrap().unwrap();
    let resource = materializer.materialize(&second).await.unwrap();

    assert_eq!(resource.byte_len, 7);
    let copied = fs::read(&resource.path).await.unwrap();
    assert_eq!(copied, b"second!");
}
