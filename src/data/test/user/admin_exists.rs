use super::*;

/// Tests the empty-database case used by the startup hint.
///
/// Expected: Ok(false)
#[tokio::test]
async fn no_admins_in_empty_database() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(&test.db);

    assert!(!repo.admin_exists().await.unwrap());
}

/// Tests that only admin users satisfy the check.
///
/// Expected: Ok(false) with regular users, Ok(true) once an admin exists
#[tokio::test]
async fn detects_admin_users() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    let repo = UserRepository::new(&test.db);

    UserFactory::new(&test.db).build().await.unwrap();
    assert!(!repo.admin_exists().await.unwrap());

    UserFactory::new(&test.db).admin(true).build().await.unwrap();
    assert!(repo.admin_exists().await.unwrap());
}
