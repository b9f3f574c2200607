use super::*;
use chrono::{Duration, Utc};

/// Tests page slicing with newest-first ordering.
///
/// Expected: Ok with the newest request on the first page
#[tokio::test]
async fn paginates_newest_first() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();

    let oldest = WhitelistRequestFactory::new(&test.db, "123456789")
        .created_at(Utc::now() - Duration::days(3))
        .build()
        .await
        .unwrap();
    let middle = WhitelistRequestFactory::new(&test.db, "123456789")
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await
        .unwrap();
    let newest = WhitelistRequestFactory::new(&test.db, "123456789")
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);

    let (first_page, total, total_pages) = repo.get_all_paginated(0, 2, None).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(total_pages, 2);
    assert_eq!(first_page[0].id, newest.id);
    assert_eq!(first_page[1].id, middle.id);

    let (second_page, _, _) = repo.get_all_paginated(1, 2, None).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, oldest.id);
}

/// Tests the status filter of the admin listing.
///
/// Expected: Ok with only pending requests and a matching total
#[tokio::test]
async fn filters_by_status() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();

    create_request_with_status(&test.db, "123456789", "pending")
        .await
        .unwrap();
    create_request_with_status(&test.db, "123456789", "approved")
        .await
        .unwrap();
    create_request_with_status(&test.db, "123456789", "rejected")
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);
    let (requests, total, _) = repo
        .get_all_paginated(0, 10, Some(WhitelistStatus::Pending))
        .await
        .unwrap();

    assert_eq!(total, 1);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].status, WhitelistStatus::Pending);
}
