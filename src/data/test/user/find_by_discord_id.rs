use super::*;

/// Tests finding an existing user by Discord id.
///
/// Expected: Ok(Some) with the stored data
#[tokio::test]
async fn finds_existing_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    UserFactory::new(&test.db)
        .discord_id("123456789")
        .name("TestUser")
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(&test.db);
    let user = repo.find_by_discord_id(123456789).await.unwrap();

    assert!(user.is_some());
    assert_eq!(user.unwrap().name, "TestUser");
}

/// Tests the lookup of an unknown Discord id.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(&test.db);
    let user = repo.find_by_discord_id(999999999).await.unwrap();

    assert!(user.is_none());
}
