use super::*;
use chrono::{Datelike, TimeZone, Utc};

/// Tests that the year count only covers the requested calendar year.
///
/// Expected: Ok(2) for this year with one row backdated to last year
#[tokio::test]
async fn counts_only_the_given_year() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();

    let this_year = Utc::now().year();
    let last_year = Utc
        .with_ymd_and_hms(this_year - 1, 6, 15, 12, 0, 0)
        .single()
        .unwrap();

    WhitelistRequestFactory::new(&test.db, "123456789")
        .build()
        .await
        .unwrap();
    WhitelistRequestFactory::new(&test.db, "123456789")
        .build()
        .await
        .unwrap();
    WhitelistRequestFactory::new(&test.db, "123456789")
        .serial_number(format!("WL-{}-0001", this_year - 1))
        .created_at(last_year)
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);

    assert_eq!(repo.count_created_in_year(this_year).await.unwrap(), 2);
    assert_eq!(repo.count_created_in_year(this_year - 1).await.unwrap(), 1);
}

/// Tests a year with no requests at all.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_year_counts_zero() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);

    assert_eq!(repo.count_created_in_year(2031).await.unwrap(), 0);
}

/// Tests the January 1st boundary: midnight belongs to the new year.
///
/// Expected: Ok(1) for the new year, Ok(0) for the old one
#[tokio::test]
async fn january_first_belongs_to_the_new_year() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();

    let midnight = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).single().unwrap();

    WhitelistRequestFactory::new(&test.db, "123456789")
        .serial_number("WL-2030-0001")
        .created_at(midnight)
        .build()
        .await
        .unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);

    assert_eq!(repo.count_created_in_year(2030).await.unwrap(), 1);
    assert_eq!(repo.count_created_in_year(2029).await.unwrap(), 0);
}
