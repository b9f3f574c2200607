use super::*;
use chrono::{Duration, Utc};

/// Tests that only the given user's requests come back, oldest first.
///
/// Expected: Ok with the user's two requests in submission order
#[tokio::test]
async fn returns_full_history_oldest_first() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();
    create_user_with_id(&test.db, "987654321").await.unwrap();

    let older = WhitelistRequestFactory::new(&test.db, "123456789")
        .status("rejected")
        .created_at(Utc::now() - Duration::days(30))
        .build()
        .await
        .unwrap();
    let newer = WhitelistRequestFactory::new(&test.db, "123456789")
        .build()
        .await
        .unwrap();
    WhitelistRequestFactory::new(&test.db, "987654321")
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);
    let requests = repo.get_by_user(123456789).await.unwrap();

    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].id, older.id);
    assert_eq!(requests[1].id, newer.id);
}

/// Tests the empty history of a user who never submitted.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_history_for_new_user() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);

    assert!(repo.get_by_user(123456789).await.unwrap().is_empty());
}
