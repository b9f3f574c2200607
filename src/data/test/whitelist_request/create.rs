use super::*;
use sea_orm::SqlErr;

/// Tests creating a request through the submission path.
///
/// Expected: Ok with pending status, the assigned serial, and the answer
/// document intact
#[tokio::test]
async fn creates_pending_request() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();

    let form_data = serde_json::json!({ "1": "Jan Novák", "2": "25" });

    let repo = WhitelistRequestRepository::new(&test.db);
    let request = repo
        .create(CreateWhitelistRequestParam {
            user_id: 123456789,
            form_data: form_data.clone(),
            serial_number: "WL-2026-0001".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(request.user_id, 123456789);
    assert_eq!(request.status, WhitelistStatus::Pending);
    assert_eq!(request.serial_number, "WL-2026-0001");
    assert_eq!(request.created_at, request.updated_at);
    assert_eq!(request.form_data, form_data);
}

/// Tests that a stored request round-trips its answer document.
///
/// Expected: Ok with the fetched document equal to the submitted one
#[tokio::test]
async fn form_data_round_trips_through_storage() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();

    let form_data = serde_json::json!({
        "1": "RP jméno postavy",
        "2": ["možnost A", "možnost B"],
        "extra": { "nested": true }
    });

    let repo = WhitelistRequestRepository::new(&test.db);
    let created = repo
        .create(CreateWhitelistRequestParam {
            user_id: 123456789,
            form_data: form_data.clone(),
            serial_number: "WL-2026-0001".to_string(),
        })
        .await
        .unwrap();

    let fetched = repo.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.form_data, form_data);
}

/// Tests that the serial uniqueness constraint rejects a duplicate and
/// that the violation is recognizable for the retry path.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_serial() {
    let test = TestBuilder::new()
        .with_whitelist_tables()
        .build()
        .await
        .unwrap();

    create_user_with_id(&test.db, "123456789").await.unwrap();
    create_user_with_id(&test.db, "987654321").await.unwrap();

    let repo = WhitelistRequestRepository::new(&test.db);

    repo.create(CreateWhitelistRequestParam {
        user_id: 123456789,
        form_data: serde_json::json!({ "1": "first" }),
        serial_number: "WL-2026-0006".to_string(),
    })
    .await
    .unwrap();

    let err = repo
        .create(CreateWhitelistRequestParam {
            user_id: 987654321,
            form_data: serde_json::json!({ "1": "second" }),
            serial_number: "WL-2026-0006".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DbErr(ref db_err)
            if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    ));
}
