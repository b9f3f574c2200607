use super::*;

/// Tests deleting an existing question.
///
/// Expected: Ok(true) and the question gone from the listing
#[tokio::test]
async fn deletes_existing_question() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhitelistQuestion)
        .build()
        .await
        .unwrap();

    let stored = WhitelistQuestionFactory::new(&test.db).build().await.unwrap();

    let repo = WhitelistQuestionRepository::new(&test.db);

    assert!(repo.delete(stored.id).await.unwrap());
    assert!(repo.get_all().await.unwrap().is_empty());
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhitelistQuestion)
        .build()
        .await
        .unwrap();

    let repo = WhitelistQuestionRepository::new(&test.db);

    assert!(!repo.delete(4711).await.unwrap());
}
