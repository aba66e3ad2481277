use lexis_types::{DictionaryEntry, WordView};

use super::ScriptedResolver;
use crate::detail::load_word_view;
use crate::resolver::{ConfigurationError, Outcome};

#[tokio::test]
async fn test_entry_definitions_split_into_list() {
    let resolver = ScriptedResolver::new(Ok(Outcome::Found(DictionaryEntry::new(
        "hello",
        "A greeting.\n\nAn expression of surprise.",
    ))));

    let view = load_word_view(&resolver, "hello").await.unwrap();

    assert_eq!(
        view,
        WordView::Entry {
            word: "hello".to_string(),
            definitions: vec![
                "A greeting.".to_string(),
                "An expression of surprise.".to_string()
            ],
        }
    );
}

#[tokio::test]
async fn test_missing_word_is_not_found() {
    let resolver = ScriptedResolver::new(Ok(Outcome::NotFound));

    let view = load_word_view(&resolver, "zzz").await.unwrap();

    assert_eq!(
        view,
        WordView::NotFound {
            word: "zzz".to_string()
        }
    );
}

#[tokio::test]
async fn test_blank_word_skips_lookup() {
    let resolver = ScriptedResolver::new(Ok(Outcome::NotFound));

    let view = load_word_view(&resolver, "  ").await.unwrap();

    assert!(matches!(view, WordView::NotFound { .. }));
    assert!(resolver.calls().is_empty());
}

#[tokio::test]
async fn test_service_error_is_unavailable() {
    let resolver = ScriptedResolver::new(Ok(Outcome::ServiceError("boom".to_string())));

    let view = load_word_view(&resolver, "hello").await.unwrap();

    assert_eq!(
        view,
        WordView::Unavailable {
            word: "hello".to_string()
        }
    );
}

#[tokio::test]
async fn test_configuration_error_propagates() {
    let resolver = ScriptedResolver::new(Err(ConfigurationError::MissingBaseUrl));

    let err = load_word_view(&resolver, "hello").await.unwrap_err();

    assert_eq!(err, ConfigurationError::MissingBaseUrl);
}

#[test]
fn test_definition_list_drops_empty_parts() {
    let entry = DictionaryEntry::new("w", "one\n\n\n\ntwo");
    assert_eq!(entry.definition_list(), vec!["one", "two"]);
    assert!(DictionaryEntry::new("w", "").definition_list().is_empty());
}
