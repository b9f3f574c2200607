use super::*;

/// Tests that only admins come back, ordered by name.
///
/// Expected: Ok with the two admins in alphabetical order
#[tokio::test]
async fn returns_admins_ordered_by_name() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    UserFactory::new(&test.db)
        .name("Zora")
        .admin(true)
        .build()
        .await
        .unwrap();
    UserFactory::new(&test.db)
        .name("Adam")
        .admin(true)
        .build()
        .await
        .unwrap();
    UserFactory::new(&test.db).name("Bystander").build().await.unwrap();

    let repo = UserRepository::new(&test.db);
    let admins = repo.get_all_admins().await.unwrap();

    let names: Vec<&str> = admins.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Adam", "Zora"]);
}
