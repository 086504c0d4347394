//! Tests for QuoteService contracts and edge cases.

use std::collections::HashSet;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::{DatabaseError, Error, ValidationError};
use crate::quotes::{
    NewQuote, QuoteRepositoryTrait, QuoteService, QuoteServiceTrait, QuoteUpdate, DEFAULT_QUOTES,
};
use crate::testing::MockQuoteRepository;

fn service(repo: &MockQuoteRepository) -> QuoteService {
    QuoteService::with_rng(Arc::new(repo.clone()), StdRng::seed_from_u64(7))
}

#[tokio::test]
async fn test_create_then_get_returns_same_content() {
    let repo = MockQuoteRepository::new();
    let service = service(&repo);

    let created = service
        .create_quote(NewQuote::new("Stay hungry, stay foolish.", "Steve Jobs"))
        .await
        .unwrap();
    let fetched = service.get_quote(&created.id).unwrap();

    assert_eq!(fetched.text, "Stay hungry, stay foolish.");
    assert_eq!(fetched.author, "Steve Jobs");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_rejects_empty_text() {
    let repo = MockQuoteRepository::new();
    let service = service(&repo);

    let err = service
        .create_quote(NewQuote::new("", "X"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::MissingField(_))
    ));
    assert_eq!(repo.count_quotes().unwrap(), 0);
}

#[tokio::test]
async fn test_get_unknown_quote_is_not_found() {
    let repo = MockQuoteRepository::new();
    let err = service(&repo).get_quote("missing").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_update_replaces_text_and_author_but_keeps_id() {
    let repo = MockQuoteRepository::new();
    let original = repo.add("Old text", "Old author");
    let service = service(&repo);

    let updated = service
        .update_quote(&original.id, QuoteUpdate::new("New text", ""))
        .await
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.text, "New text");
    assert_eq!(updated.author, "");
}

#[tokio::test]
async fn test_update_checks_validation_and_existence() {
    let repo = MockQuoteRepository::new();
    let existing = repo.add("Text", "Author");
    let service = service(&repo);

    let missing = service
        .update_quote("missing", QuoteUpdate::new("Text", "Author"))
        .await
        .unwrap_err();
    assert!(matches!(missing, Error::NotFound(_)));

    let blank = service
        .update_quote(&existing.id, QuoteUpdate::new("  ", "Author"))
        .await
        .unwrap_err();
    assert!(matches!(blank, Error::Validation(_)));
    assert_eq!(service.get_quote(&existing.id).unwrap().text, "Text");
}

#[tokio::test]
async fn test_delete_twice_fails_with_not_found() {
    let repo = MockQuoteRepository::new();
    let quote = repo.add("Text", "Author");
    let service = service(&repo);

    service.delete_quote(&quote.id).await.unwrap();
    assert!(matches!(
        service.get_quote(&quote.id).unwrap_err(),
        Error::NotFound(_)
    ));
    assert!(matches!(
        service.delete_quote(&quote.id).await.unwrap_err(),
        Error::NotFound(_)
    ));
}

#[test]
fn test_random_quote_on_empty_store() {
    let repo = MockQuoteRepository::new();
    let err = service(&repo).random_quote(None).unwrap_err();
    assert!(matches!(err, Error::EmptyStore));
}

#[test]
fn test_random_quote_ignores_exclusion_with_single_quote() {
    let repo = MockQuoteRepository::new();
    let only = repo.add("Only one", "");
    let service = service(&repo);

    for _ in 0..10 {
        assert_eq!(service.random_quote(Some(&only.id)).unwrap(), only);
    }
}

#[test]
fn test_random_quote_never_returns_excluded_id() {
    let repo = MockQuoteRepository::with_texts(&["A", "B", "C"]);
    let service = service(&repo);

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let quote = service.random_quote(Some("q1")).unwrap();
        assert_ne!(quote.id, "q1");
        seen.insert(quote.id);
    }
    assert_eq!(seen.len(), 2, "both remaining quotes should be drawn");
}

#[test]
fn test_random_quote_with_unknown_exclusion_draws_from_all() {
    let repo = MockQuoteRepository::with_texts(&["A", "B"]);
    let service = service(&repo);

    let seen: HashSet<String> = (0..100)
        .map(|_| service.random_quote(Some("gone")).unwrap().id)
        .collect();
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_seeded_services_draw_the_same_sequence() {
    let repo = MockQuoteRepository::with_texts(&["A", "B", "C", "D"]);
    let first = service(&repo);
    let second = service(&repo);

    let a: Vec<String> = (0..20)
        .map(|_| first.random_quote(None).unwrap().id)
        .collect();
    let b: Vec<String> = (0..20)
        .map(|_| second.random_quote(None).unwrap().id)
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_store_failure_propagates() {
    let repo = MockQuoteRepository::with_texts(&["A"]);
    repo.set_fail_reads(true);
    let err = service(&repo).random_quote(None).unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::ConnectionFailed(_))
    ));
}

#[tokio::test]
async fn test_seed_only_fills_an_empty_store() {
    let repo = MockQuoteRepository::new();
    let service = service(&repo);

    assert_eq!(service.seed_default_quotes().await.unwrap(), DEFAULT_QUOTES.len());
    assert_eq!(service.seed_default_quotes().await.unwrap(), 0);
    assert_eq!(service.count_quotes().unwrap(), DEFAULT_QUOTES.len() as i64);
}
