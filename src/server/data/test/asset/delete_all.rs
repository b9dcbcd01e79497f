use super::*;

/// Tests removing a batch of assets concurrently.
///
/// Verifies one outcome is reported per path, in input order, and that a missing
/// file does not prevent the others from being removed.
///
/// Expected: [Deleted, Missing, Deleted] and both existing files gone
#[tokio::test]
async fn reports_each_path_in_order() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let first = test.write_asset("one.mp4", b"1").unwrap();
    let second = test.write_asset("two.mp4", b"2").unwrap();
    let dir = test.asset_dir().unwrap().to_path_buf();
    let missing = dir.join("gone.mp4").to_string_lossy().into_owned();
    let store = AssetStore::open(&dir).await.unwrap();

    let removals = store
        .delete_all(vec![first.clone(), missing.clone(), second.clone()])
        .await;

    assert_eq!(
        removals,
        vec![
            (first.clone(), AssetRemoval::Deleted),
            (missing, AssetRemoval::Missing),
            (second.clone(), AssetRemoval::Deleted),
        ]
    );
    assert!(!Path::new(&first).exists());
    assert!(!Path::new(&second).exists());
}

/// Tests an empty batch does nothing.
///
/// Expected: empty result
#[tokio::test]
async fn empty_batch_is_noop() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let store = AssetStore::open(test.asset_dir().unwrap()).await.unwrap();

    assert!(store.delete_all(Vec::new()).await.is_empty());
}
