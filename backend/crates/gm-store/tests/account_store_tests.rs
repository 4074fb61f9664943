mod common;

use common::{
    TEST_KEY, assert_same_accounts, create_file_store, create_memory_store, create_test_account,
};

use gm_store::{AccountStore, KeyValueStore};

use googletest::prelude::*;

#[tokio::test]
async fn given_never_saved_store_when_load_then_empty_without_error() {
    // Given: A fresh data directory
    let (_temp, _slots, store) = create_file_store();

    // When: Loading
    let result = store.load_detailed().await;

    // Then: Nothing loaded and nothing reported
    assert!(result.accounts.is_empty());
    assert_that!(result.corruption_error, none());
}

#[tokio::test]
async fn given_saved_accounts_when_load_then_same_accounts_in_same_order() {
    // Given
    let (_temp, _slots, store) = create_file_store();
    let accounts = vec![create_test_account("3"), create_test_account("2"), create_test_account("1")];

    // When
    store.save(&accounts).await.unwrap();
    let loaded = store.load().await;

    // Then
    assert_same_accounts(&loaded, &accounts);
}

#[tokio::test]
async fn given_empty_collection_when_saved_then_loads_empty() {
    let (_temp, slots, store) = create_file_store();
    store.save(&[create_test_account("1")]).await.unwrap();

    store.save(&[]).await.unwrap();

    assert!(store.load().await.is_empty());
    assert_eq!(slots.get(TEST_KEY).await.unwrap().as_deref(), Some("[]"));
}

#[tokio::test]
async fn given_same_list_saved_twice_when_load_then_idempotent() {
    let store = create_memory_store();
    let accounts = vec![create_test_account("7")];

    store.save(&accounts).await.unwrap();
    store.save(&accounts).await.unwrap();

    assert_same_accounts(&store.load().await, &accounts);
}

#[tokio::test]
async fn given_second_save_when_load_then_replaces_whole_collection() {
    let store = create_memory_store();
    store
        .save(&[create_test_account("1"), create_test_account("2")])
        .await
        .unwrap();
    let replacement = vec![create_test_account("9")];

    store.save(&replacement).await.unwrap();

    assert_same_accounts(&store.load().await, &replacement);
}

#[tokio::test]
async fn given_corrupted_slot_when_load_then_empty_with_corruption_error() {
    // Given: Garbage in the slot file
    let (_temp, slots, store) = create_file_store();
    slots.set(TEST_KEY, "{not json").await.unwrap();

    // When
    let result = store.load_detailed().await;

    // Then
    assert!(result.accounts.is_empty());
    assert_that!(result.corruption_error, some(anything()));
}

#[tokio::test]
async fn given_slot_path_is_directory_when_load_then_empty() {
    let (_temp, slots, store) = create_file_store();
    std::fs::create_dir_all(slots.slot_path(TEST_KEY)).unwrap();

    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn given_legacy_camel_case_json_when_load_then_fields_restored() {
    let (_temp, slots, store) = create_file_store();
    slots
        .set(
            TEST_KEY,
            r#"[{"id":"lz1abc","name":"Alice","gameId":"111","uid":"222","password":"pass123","createdAt":1700000000000}]"#,
        )
        .await
        .unwrap();

    let loaded = store.load().await;

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name.as_deref(), Some("Alice"));
    assert_eq!(loaded[0].game_id.as_deref(), Some("111"));
    assert_eq!(loaded[0].created_at, 1_700_000_000_000);
}

#[tokio::test]
async fn given_save_when_done_then_no_temp_file_left_behind() {
    let (_temp, slots, store) = create_file_store();

    store.save(&[create_test_account("1")]).await.unwrap();

    let names: Vec<String> = std::fs::read_dir(slots.slot_path(TEST_KEY).parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![format!("{TEST_KEY}.json")]);
}

#[test]
fn given_store_when_generate_id_then_distinct_ids() {
    assert_ne!(AccountStore::generate_id(), AccountStore::generate_id());
}
