use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok with the user stored and no admin flag
#[tokio::test]
async fn creates_new_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(&test.db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
            is_admin: None,
        })
        .await
        .unwrap();

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert!(!user.admin);
}

/// Tests that a login with `is_admin: None` refreshes the name but leaves
/// the stored admin flag alone.
///
/// Expected: Ok with name updated and admin preserved
#[tokio::test]
async fn preserves_admin_flag_when_not_provided() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(&test.db);

    repo.upsert(UpsertUserParam {
        discord_id: 123456789,
        name: "OriginalName".to_string(),
        is_admin: Some(true),
    })
    .await
    .unwrap();

    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "UpdatedName".to_string(),
            is_admin: None,
        })
        .await
        .unwrap();

    assert_eq!(user.name, "UpdatedName");
    assert!(user.admin);
}

/// Tests that a login carrying an explicit admin flag writes it.
///
/// Expected: Ok with the flag following the provided value
#[tokio::test]
async fn writes_admin_flag_when_provided() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(&test.db);

    repo.upsert(UpsertUserParam {
        discord_id: 123456789,
        name: "RegularUser".to_string(),
        is_admin: None,
    })
    .await
    .unwrap();

    let promoted = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "RegularUser".to_string(),
            is_admin: Some(true),
        })
        .await
        .unwrap();
    assert!(promoted.admin);

    let demoted = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "RegularUser".to_string(),
            is_admin: Some(false),
        })
        .await
        .unwrap();
    assert!(!demoted.admin);
}

/// Tests that a repeated login advances the login timestamp.
///
/// Expected: Ok with `last_login_at` moved forward
#[tokio::test]
async fn refreshes_login_timestamp() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(&test.db);

    let first = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
            is_admin: None,
        })
        .await
        .unwrap();

    let second = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
            is_admin: None,
        })
        .await
        .unwrap();

    assert!(second.last_login_at >= first.last_login_at);
    assert_eq!(second.created_at, first.created_at);
}
