use super::*;

/// Tests creating a free-text question.
///
/// Expected: Ok with the question stored and no options
#[tokio::test]
async fn creates_text_question() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhitelistQuestion)
        .build()
        .await
        .unwrap();

    let repo = WhitelistQuestionRepository::new(&test.db);
    let question = repo
        .create(CreateQuestionParam {
            question: "Jak dlouho hraješ RP?".to_string(),
            field_type: QuestionFieldType::Text,
            options: Vec::new(),
            required: true,
        })
        .await
        .unwrap();

    assert_eq!(question.question, "Jak dlouho hraješ RP?");
    assert_eq!(question.field_type, QuestionFieldType::Text);
    assert!(question.options.is_empty());
    assert!(question.required);
}

/// Tests that a select question stores its choices.
///
/// Expected: Ok with the option list round-tripped
#[tokio::test]
async fn creates_select_question_with_options() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhitelistQuestion)
        .build()
        .await
        .unwrap();

    let repo = WhitelistQuestionRepository::new(&test.db);
    let question = repo
        .create(CreateQuestionParam {
            question: "Odkud ses o serveru dozvěděl?".to_string(),
            field_type: QuestionFieldType::Select,
            options: vec!["Discord".to_string(), "Kamarád".to_string()],
            required: false,
        })
        .await
        .unwrap();

    assert_eq!(question.options, vec!["Discord", "Kamarád"]);
    assert!(!question.required);
}

/// Tests that new questions land at the end of the form.
///
/// Expected: Ok with sort orders following creation order
#[tokio::test]
async fn appends_new_questions_at_the_end() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WhitelistQuestion)
        .build()
        .await
        .unwrap();

    let repo = WhitelistQuestionRepository::new(&test.db);

    let first = repo
        .create(CreateQuestionParam {
            question: "První".to_string(),
            field_type: QuestionFieldType::Text,
            options: Vec::new(),
            required: true,
        })
        .await
        .unwrap();
    let second = repo
        .create(CreateQuestionParam {
            question: "Druhá".to_string(),
            field_type: QuestionFieldType::Text,
            options: Vec::new(),
            required: true,
        })
        .await
        .unwrap();

    assert!(first.sort_order < second.sort_order);
}
