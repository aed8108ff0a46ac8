//! Plain-text manuscript conversion.
//!
//! Turns a loosely formatted text file into a [`Book`]: metadata inference
//! ([`metadata`]), blank-line-run segmentation ([`segment`]), and document
//! tree assembly ([`builder`]). [`convert_file`] glues the pieces to file
//! I/O and the EPUB writer.

pub mod builder;
pub mod metadata;
pub mod segment;
mod styles;

use std::fs;
use std::path::{Path, PathBuf};

use crate::book::Book;
use crate::cover;
use crate::epub;
use crate::error::{Error, Result};
use crate::txt::metadata::MetaOverrides;

/// Conversion options. Every `None` field is inferred from the input.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Unique book identifier; a fresh UUID when absent.
    pub identifier: Option<String>,
    /// Book title; inferred from the filename stem when absent.
    pub title: Option<String>,
    /// Book author; inferred from the filename stem when absent.
    pub author: Option<String>,
    /// Language tag; detected from the text when absent, `"en"` fallback.
    pub language: Option<String>,
    /// Cover image path; re-encoded to JPEG when supplied and non-empty.
    pub cover: Option<PathBuf>,
    /// Chapter delimiter run length in newlines. Must be >= 1.
    pub linebreaks: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            identifier: None,
            title: None,
            author: None,
            language: None,
            cover: None,
            linebreaks: 3,
        }
    }
}

/// Build a [`Book`] from manuscript text. Pure core: no file I/O.
///
/// `stem` is the input filename stem used for title/author inference.
pub fn build_book(text: &str, stem: &str, options: &ConvertOptions) -> Result<Book> {
    if options.linebreaks == 0 {
        return Err(Error::InvalidOptions(
            "linebreaks must be at least 1".to_string(),
        ));
    }

    let overrides = MetaOverrides {
        identifier: options.identifier.clone(),
        title: options.title.clone(),
        author: options.author.clone(),
        language: options.language.clone(),
    };
    let meta = metadata::resolve(stem, text, &overrides);
    let seg = segment::segment(text, options.linebreaks)?;
    Ok(builder::build_book(&seg, &meta))
}

/// Convert a text file to an EPUB.
///
/// Reads `input` (strict UTF-8), builds the book, attaches the cover when
/// one is configured, and writes the EPUB to `output` — or, when `output`
/// is `None`, to the input path with its extension replaced by `.epub`.
/// Returns the path written.
pub fn convert_file<P: AsRef<Path>>(
    input: P,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<PathBuf> {
    let input = input.as_ref();
    let text = String::from_utf8(fs::read(input)?)?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut book = build_book(&text, &stem, options)?;

    if let Some(cover_path) = &options.cover
        && !cover_path.as_os_str().is_empty()
    {
        let jpeg = cover::reencode_jpeg(cover_path)?;
        book.add_resource("cover.jpg", jpeg, "image/jpeg");
        book.metadata.cover_image = Some("cover.jpg".to_string());
    }

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("epub"),
    };
    epub::write_epub(&book, &output)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_book_scenario() {
        let text = "Hello\n\n\nChapter One\nLine A\nLine B\n\n\nChapter Two\nLine C";
        let options = ConvertOptions {
            identifier: Some("id".to_string()),
            title: Some("T".to_string()),
            author: Some("A".to_string()),
            language: Some("en".to_string()),
            ..Default::default()
        };
        let book = build_book(text, "T", &options).unwrap();
        assert_eq!(book.toc.len(), 2);
        assert_eq!(book.toc[0].title, "Chapter One");
        assert_eq!(book.toc[1].title, "Chapter Two");
        assert!(book.toc.iter().all(|e| e.children.is_empty()));
        assert_eq!(book.spine.len(), 5);
    }

    #[test]
    fn test_zero_linebreaks_rejected() {
        let options = ConvertOptions {
            linebreaks: 0,
            ..Default::default()
        };
        let err = build_book("text", "stem", &options).unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
    }

    #[test]
    fn test_metadata_flows_from_stem() {
        let book = build_book("text", "MyBook(Jane Doe)", &ConvertOptions::default()).unwrap();
        assert_eq!(book.metadata.title, "MyBook");
        assert_eq!(book.metadata.authors, vec!["Jane Doe"]);
    }

    #[test]
    fn test_missing_input_fails_fast() {
        let err = convert_file("no/such/file.txt", None, &ConvertOptions::default());
        assert!(matches!(err, Err(Error::Io(_))));
    }

    #[test]
    fn test_non_utf8_input_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0xFF, 0xFE, 0x00]).unwrap();
        let err = convert_file(&path, None, &ConvertOptions::default());
        assert!(matches!(err, Err(Error::Utf8(_))));
        // no partial output
        assert!(!dir.path().join("bad.epub").exists());
    }

    #[test]
    fn test_default_output_path_replaces_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        fs::write(&path, "Pre\n\n\nOne\nA").unwrap();
        let written = convert_file(&path, None, &ConvertOptions::default()).unwrap();
        assert_eq!(written, dir.path().join("book.epub"));
        assert!(written.exists());
    }
}
