use super::*;
use chrono::{Duration, Utc};

/// Tests the status write and the `updated_at` bump.
///
/// Expected: Ok(Some) with the new status and a later `updated_at`
#[tokio::test]
async fn updates_status_and_bumps_timestamp() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();
    let stored = WhitelistRequestFactory::new(&test.db, "123456789")
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);
    let updated = repo
        .update_status(stored.id, WhitelistStatus::Approved)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, WhitelistStatus::Approved);
    assert!(updated.updated_at > stored.created_at);
    assert_eq!(updated.created_at, stored.created_at);
    assert_eq!(updated.serial_number, stored.serial_number);
}

/// Tests re-asserting the current status.
///
/// Expected: Ok(Some) with the status unchanged but `updated_at` bumped,
/// recording that an admin touched the request
#[tokio::test]
async fn same_status_still_bumps_timestamp() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();
    let stored = WhitelistRequestFactory::new(&test.db, "123456789")
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);
    let updated = repo
        .update_status(stored.id, WhitelistStatus::Pending)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, WhitelistStatus::Pending);
    assert!(updated.updated_at > stored.updated_at);
}

/// Tests updating an id that does not exist.
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
    let result = repo
        .update_status(4711, WhitelistStatus::Approved)
        .await
        .unwrap();

    assert!(result.is_none());
}
