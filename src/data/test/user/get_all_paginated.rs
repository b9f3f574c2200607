use super::*;

/// Tests page slicing and the total counts.
///
/// Expected: Ok with two users on the first page and one on the second
#[tokio::test]
async fn paginates_users() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();

    for name in ["Alfa", "Bravo", "Charlie"] {
        UserFactory::new(&test.db).name(name).build().await.unwrap();
    }

    let repo = UserRepository::new(&test.db);

    let (first_page, total, total_pages) = repo.get_all_paginated(0, 2).await.unwrap();
    assert_eq!(first_page.len(), 2);
    assert_eq!(total, 3);
    assert_eq!(total_pages, 2);

    let (second_page, _, _) = repo.get_all_paginated(1, 2).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Charlie");
}
