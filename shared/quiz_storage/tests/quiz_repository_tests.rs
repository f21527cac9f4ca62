use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use aws_sdk_dynamodb::types::AttributeValue;
use pretty_assertions::assert_eq;
use quiz_storage::category::{Category, CategoryCatalog};
use quiz_storage::quiz::{Quiz, QuizRepository, QuizStorageError};
use quiz_storage::store::MemoryQuizStore;

/// Test context holding the repository and the store behind it
struct TestContext {
    repository: QuizRepository,
    store: Arc<MemoryQuizStore>,
}

fn setup_test() -> TestContext {
    let store = Arc::new(MemoryQuizStore::new());
    let repository = QuizRepository::new(store.clone(), Arc::new(CategoryCatalog::default()));

    TestContext { repository, store }
}

fn create_quiz(id: &str, category: &str) -> Quiz {
    Quiz::new(
        id,
        format!("https://example.com/{category}/{id}.png"),
        format!("https://example.com/audio/{id}.mp3"),
        format!("answer-{id}"),
        vec![format!("answer-{id}"), "wrong-1".to_string(), "wrong-2".to_string()],
        category,
        format!("explanation for {id}"),
    )
}

fn seed(store: &MemoryQuizStore, category: &str, count: usize) -> Vec<Quiz> {
    (0..count)
        .map(|i| {
            let quiz = create_quiz(&format!("{category}-{i}"), category);
            store.insert(&quiz).expect("Failed to insert quiz");
            quiz
        })
        .collect()
}

#[tokio::test]
async fn test_get_by_category_returns_requested_subset() {
    let ctx = setup_test();
    let seeded = seed(&ctx.store, "flags", 5);
    seed(&ctx.store, "animals", 3);

    let quizzes = ctx.repository.get_by_category("flags", 3).await.unwrap();

    assert_eq!(quizzes.len(), 3);
    let ids: HashSet<_> = quizzes.iter().map(|quiz| quiz.id.clone()).collect();
    assert_eq!(ids.len(), 3, "results must not repeat a quiz");
    for quiz in &quizzes {
        assert!(seeded.contains(quiz), "unexpected quiz {}", quiz.id);
    }
    assert_eq!(ctx.store.query_count(), 1);
}

#[tokio::test]
async fn test_get_by_category_count_above_partition_size() {
    let ctx = setup_test();
    let seeded = seed(&ctx.store, "animals", 4);

    let quizzes = ctx.repository.get_by_category("animals", 10).await.unwrap();

    assert_eq!(quizzes.len(), 4);
    let mut ids: Vec<_> = quizzes.into_iter().map(|quiz| quiz.id).collect();
    let mut expected: Vec<_> = seeded.into_iter().map(|quiz| quiz.id).collect();
    ids.sort();
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_get_by_category_non_positive_count_returns_everything() {
    let ctx = setup_test();
    seed(&ctx.store, "words", 6);

    assert_eq!(ctx.repository.get_by_category("words", 0).await.unwrap().len(), 6);
    assert_eq!(ctx.repository.get_by_category("words", -3).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_get_by_category_empty_partition() {
    let ctx = setup_test();

    let quizzes = ctx.repository.get_by_category("flags", 10).await.unwrap();

    assert!(quizzes.is_empty());
}

#[tokio::test]
async fn test_get_by_category_store_failure() {
    let ctx = setup_test();
    seed(&ctx.store, "flags", 2);
    ctx.store.fail_partition("CATEGORY#flags");

    let err = ctx.repository.get_by_category("flags", 1).await.unwrap_err();

    assert!(matches!(err, QuizStorageError::DynamoDbQueryError(_)), "{err:?}");
}

#[tokio::test]
async fn test_get_by_category_malformed_item() {
    let ctx = setup_test();
    seed(&ctx.store, "flags", 2);
    let malformed = HashMap::from([
        ("id".to_string(), AttributeValue::S("broken".to_string())),
        ("choices".to_string(), AttributeValue::N("3".to_string())),
    ]);
    ctx.store
        .insert_item("CATEGORY#flags", "QUIZ#broken", malformed);

    let err = ctx.repository.get_by_category("flags", 10).await.unwrap_err();

    assert!(matches!(err, QuizStorageError::SerializationError(_)), "{err:?}");
}

#[tokio::test]
async fn test_get_by_id_finds_quiz_in_any_category() {
    let ctx = setup_test();
    let quiz = create_quiz("lion", "animals");
    ctx.store.insert(&quiz).unwrap();

    let found = ctx.repository.get_by_id("lion").await.unwrap();

    assert_eq!(found, quiz);
    // flags is probed first, then animals
    assert_eq!(ctx.store.get_count(), 2);
}

#[tokio::test]
async fn test_get_by_id_stops_at_first_match() {
    let ctx = setup_test();
    let flag = create_quiz("shared-id", "flags");
    let word = create_quiz("shared-id", "words");
    ctx.store.insert(&flag).unwrap();
    ctx.store.insert(&word).unwrap();

    let found = ctx.repository.get_by_id("shared-id").await.unwrap();

    assert_eq!(found.category, "flags");
    assert_eq!(ctx.store.get_count(), 1);
}

#[tokio::test]
async fn test_get_by_id_not_found_probes_every_category() {
    let ctx = setup_test();
    seed(&ctx.store, "flags", 2);

    let err = ctx.repository.get_by_id("nonexistent-id").await.unwrap_err();

    match err {
        QuizStorageError::QuizNotFound(id) => assert_eq!(id, "nonexistent-id"),
        other => panic!("expected QuizNotFound, got {other:?}"),
    }
    assert_eq!(ctx.store.get_count(), 3);
}

#[tokio::test]
async fn test_get_by_id_skips_failing_partition() {
    let ctx = setup_test();
    let quiz = create_quiz("cat", "words");
    ctx.store.insert(&quiz).unwrap();
    ctx.store.fail_partition("CATEGORY#flags");

    let found = ctx.repository.get_by_id("cat").await.unwrap();

    assert_eq!(found.id, "cat");
}

#[tokio::test]
async fn test_get_by_id_failure_on_owning_partition_reports_not_found() {
    let ctx = setup_test();
    let quiz = create_quiz("panda", "animals");
    ctx.store.insert(&quiz).unwrap();
    ctx.store.fail_partition("CATEGORY#animals");

    let err = ctx.repository.get_by_id("panda").await.unwrap_err();

    assert!(matches!(err, QuizStorageError::QuizNotFound(_)), "{err:?}");
}

#[tokio::test]
async fn test_get_by_id_uses_injected_catalog() {
    let store = Arc::new(MemoryQuizStore::new());
    let catalog = Arc::new(CategoryCatalog::new(vec![Category::new(
        "colors",
        "Colors",
        "Learn colors",
        "https://example.com/colors.jpg",
    )]));
    let repository = QuizRepository::new(store.clone(), catalog);
    store.insert(&create_quiz("red", "colors")).unwrap();
    store.insert(&create_quiz("italy", "flags")).unwrap();

    assert_eq!(repository.get_by_id("red").await.unwrap().category, "colors");
    assert!(matches!(
        repository.get_by_id("italy").await,
        Err(QuizStorageError::QuizNotFound(_))
    ));
}
