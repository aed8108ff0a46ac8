use std::collections::HashMap;

/// Intermediate representation of an ebook.
/// Format-agnostic structure that the text parser produces and the EPUB
/// writer consumes.
#[derive(Debug, Clone, Default)]
pub struct Book {
    pub metadata: Metadata,
    pub spine: Vec<SpineItem>,
    pub toc: Vec<TocEntry>,
    pub resources: HashMap<String, Resource>,
}

/// Book metadata (Dublin Core subset)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub authors: Vec<String>,
    pub language: String,
    pub identifier: String,
    /// Href of the cover image resource, when one was supplied.
    pub cover_image: Option<String>,
}

/// An item in the reading order (spine)
#[derive(Debug, Clone)]
pub struct SpineItem {
    pub id: String,
    pub href: String,
    pub media_type: String,
    pub linear: bool,
}

/// A table of contents entry (hierarchical)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TocEntry {
    pub title: String,
    pub href: String,
    pub children: Vec<TocEntry>,
}

/// A resource (content document, image, CSS, etc.)
#[derive(Debug, Clone)]
pub struct Resource {
    pub data: Vec<u8>,
    pub media_type: String,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to the book
    pub fn add_resource(
        &mut self,
        href: impl Into<String>,
        data: Vec<u8>,
        media_type: impl Into<String>,
    ) {
        self.resources.insert(
            href.into(),
            Resource {
                data,
                media_type: media_type.into(),
            },
        );
    }

    /// Get a resource by href
    pub fn get_resource(&self, href: &str) -> Option<&Resource> {
        self.resources.get(href)
    }

    /// Add a spine item
    pub fn add_spine_item(
        &mut self,
        id: impl Into<String>,
        href: impl Into<String>,
        media_type: impl Into<String>,
    ) {
        self.spine.push(SpineItem {
            id: id.into(),
            href: href.into(),
            media_type: media_type.into(),
            linear: true,
        });
    }
}

impl Metadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }
}

impl TocEntry {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TocEntry>) -> Self {
        self.children = children;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_builder() {
        let meta = Metadata::new("My Book")
            .with_author("Author Name")
            .with_language("en")
            .with_identifier("id-1");
        assert_eq!(meta.title, "My Book");
        assert_eq!(meta.authors, vec!["Author Name"]);
        assert_eq!(meta.language, "en");
        assert_eq!(meta.identifier, "id-1");
    }

    #[test]
    fn test_add_and_get_resource() {
        let mut book = Book::new();
        book.add_resource("style.css", b"p {}".to_vec(), "text/css");
        let res = book.get_resource("style.css").unwrap();
        assert_eq!(res.media_type, "text/css");
        assert_eq!(res.data, b"p {}");
        assert!(book.get_resource("missing.css").is_none());
    }

    #[test]
    fn test_spine_items_keep_order() {
        let mut book = Book::new();
        book.add_spine_item("a", "a.xhtml", "application/xhtml+xml");
        book.add_spine_item("b", "b.xhtml", "application/xhtml+xml");
        let ids: Vec<_> = book.spine.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(book.spine.iter().all(|s| s.linear));
    }
}
