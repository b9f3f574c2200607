use super::*;

/// Tests persisting a new display order.
///
/// Expected: Ok with sort orders rewritten to the list positions
#[tokio::test]
async fn rewrites_sort_orders() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhitelistQuestion)
        .build()
        .await
        .unwrap();

    let first = WhitelistQuestionFactory::new(&test.db)
        .question("A")
        .sort_order(0)
        .build()
        .await
        .unwrap();
    let second = WhitelistQuestionFactory::new(&test.db)
        .question("B")
        .sort_order(1)
        .build()
        .await
        .unwrap();
    let third = WhitelistQuestionFactory::new(&test.db)
        .question("C")
        .sort_order(2)
        .build()
        .await
        .unwrap();

    let repo = WhitelistQuestionRepository::new(&test.db);

    repo.reorder(&[third.id, first.id, second.id]).await.unwrap();

    let questions = repo.get_all().await.unwrap();
    let prompts: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(prompts, vec!["C", "A", "B"]);
}
