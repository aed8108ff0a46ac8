//! Metadata inference for manuscripts.
//!
//! Fills in identifier, title, author, and language when the caller supplies
//! none. Title and author come from an ordered chain of filename-stem
//! matchers (first match wins); language comes from statistical detection
//! over the manuscript text with a safe `"en"` fallback.

use uuid::Uuid;

/// Fully resolved book metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMeta {
    pub identifier: String,
    pub title: String,
    pub author: String,
    pub language: String,
}

/// Caller-supplied overrides. Any field left `None` is inferred.
#[derive(Debug, Clone, Default)]
pub struct MetaOverrides {
    pub identifier: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub language: Option<String>,
}

/// A stem matcher: returns `(title, author)` when the filename stem fits its
/// pattern. Matchers are tried in order; the first match wins.
type StemMatcher = fn(&str) -> Option<(String, String)>;

const STEM_MATCHERS: &[StemMatcher] = &[trailing_paren_author];

/// Resolve metadata from the filename stem, the manuscript text, and any
/// explicit overrides.
///
/// Deterministic for fixed inputs except the identifier, which is a fresh
/// UUID v4 whenever no override is given.
pub fn resolve(stem: &str, text: &str, overrides: &MetaOverrides) -> BookMeta {
    let identifier = overrides
        .identifier
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let inferred = STEM_MATCHERS.iter().find_map(|matcher| matcher(stem));
    let (stem_title, stem_author) = match inferred {
        Some((title, author)) => (title, author),
        None => (stem.to_string(), "Unknown".to_string()),
    };
    let title = overrides.title.clone().unwrap_or(stem_title);
    let author = overrides.author.clone().unwrap_or(stem_author);

    let language = overrides
        .language
        .clone()
        .unwrap_or_else(|| detect_language(text));

    BookMeta {
        identifier,
        title,
        author,
        language,
    }
}

/// Matches stems of the form `<title>(<author>)`: anything up to the first
/// `(`, then an author running to a closing `)` at the very end.
fn trailing_paren_author(stem: &str) -> Option<(String, String)> {
    let rest = stem.strip_suffix(')')?;
    let open = stem.find('(')?;
    Some((stem[..open].to_string(), rest[open + 1..].to_string()))
}

/// Best-effort language detection, mapped to an ISO 639-1 tag.
///
/// Detection failure (text too short, ambiguous or unreliable, or a language
/// with no two-letter code) falls back to `"en"` and is never surfaced.
fn detect_language(text: &str) -> String {
    whatlang::detect(text)
        .filter(|info| info.is_reliable())
        .and_then(|info| isolang::Language::from_639_3(info.lang().code()))
        .and_then(|lang| lang.to_639_1())
        .unwrap_or("en")
        .to_string()
}
