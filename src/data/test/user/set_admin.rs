use super::*;

/// Tests granting and revoking the admin flag.
///
/// Expected: Ok with the stored flag following each update
#[tokio::test]
async fn toggles_admin_flag() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    UserFactory::new(&test.db)
        .discord_id("123456789")
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(&test.db);

    repo.set_admin(123456789, true).await.unwrap();
    assert!(repo.find_by_discord_id(123456789).await.unwrap().unwrap().admin);

    repo.set_admin(123456789, false).await.unwrap();
    assert!(!repo.find_by_discord_id(123456789).await.unwrap().unwrap().admin);
}
