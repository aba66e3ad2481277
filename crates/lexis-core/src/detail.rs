use lexis_types::WordView;

use crate::resolver::{ConfigurationError, EntryResolver, Outcome, SearchTerm};

/// Resolve the word detail destination
///
/// A lookup that cannot complete yields `Unavailable`, which the front end
/// offers to retry.
pub async fn load_word_view<R>(resolver: &R, word: &str) -> Result<WordView, ConfigurationError>
where
    R: EntryResolver + ?Sized,
{
    let Some(term) = SearchTerm::parse(word) else {
        return Ok(WordView::NotFound {
            word: word.to_string(),
        });
    };

    let view = match resolver.resolve(&term).await? {
        Outcome::Found(entry) => WordView::Entry {
            definitions: entry.definition_list(),
            word: entry.word,
        },
        Outcome::NotFound => WordView::NotFound {
            word: term.to_string(),
        },
        Outcome::ServiceError(message) => {
            tracing::warn!("Unable to load '{}': {}", term, message);
            WordView::Unavailable {
                word: term.to_string(),
            }
        }
    };

    Ok(view)
}
