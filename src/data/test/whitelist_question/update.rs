use super::*;

/// Tests rewriting a question in place.
///
/// Expected: Ok(Some) with the new content and the old position
#[tokio::test]
async fn updates_question_in_place() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhitelistQuestion)
        .build()
        .await
        .unwrap();

    let stored = WhitelistQuestionFactory::new(&test.db)
        .question("Původní znění")
        .sort_order(5)
        .build()
        .await
        .unwrap();

    let repo = WhitelistQuestionRepository::new(&test.db);
    let updated = repo
        .update(UpdateQuestionParam {
            id: stored.id,
            question: "Nové znění".to_string(),
            field_type: QuestionFieldType::Textarea,
            options: Vec::new(),
            required: false,
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.question, "Nové znění");
    assert_eq!(updated.field_type, QuestionFieldType::Textarea);
    assert!(!updated.required);
    assert_eq!(updated.sort_order, 5);
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhitelistQuestion)
        .build()
        .await
        .unwrap();

    let repo = WhitelistQuestionRepository::new(&test.db);
    let result = repo
        .update(UpdateQuestionParam {
            id: 4711,
            question: "Nikam".to_string(),
            field_type: QuestionFieldType::Text,
            options: Vec::new(),
            required: true,
        })
        .await
        .unwrap();

    assert!(result.is_none());
}
