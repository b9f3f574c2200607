use super::*;

/// Tests that questions come back in display order.
///
/// Expected: Ok with questions sorted by sort order
#[tokio::test]
async fn returns_questions_in_display_order() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhitelistQuestion)
        .build()
        .await
        .unwrap();

    WhitelistQuestionFactory::new(&test.db)
        .question("Třetí")
        .sort_order(2)
        .build()
        .await
        .unwrap();
    WhitelistQuestionFactory::new(&test.db)
        .question("První")
        .sort_order(0)
        .build()
        .await
        .unwrap();
    WhitelistQuestionFactory::new(&test.db)
        .question("Druhá")
        .sort_order(1)
        .build()
        .await
        .unwrap();

    let repo = WhitelistQuestionRepository::new(&test.db);
    let questions = repo.get_all().await.unwrap();

    let prompts: Vec<&str> = questions.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(prompts, vec!["První", "Druhá", "Třetí"]);
}
