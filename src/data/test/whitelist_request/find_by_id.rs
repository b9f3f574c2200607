use super::*;

/// Tests fetching a request by id.
///
/// Expected: Ok(Some) with the stored request
#[tokio::test]
async fn finds_existing_request() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    let user = create_user_with_id(&test.db, "123456789").await.unwrap();
    let stored = WhitelistRequestFactory::new(&test.db, user.discord_id)
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);
    let request = repo.find_by_id(stored.id).await.unwrap().unwrap();

    assert_eq!(request.id, stored.id);
    assert_eq!(request.serial_number, stored.serial_number);
}

/// Tests the lookup of an unknown id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);

    assert!(repo.find_by_id(4711).await.unwrap().is_none());
}
