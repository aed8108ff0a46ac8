//! # txt2epub
//!
//! Convert plain-text book manuscripts into structured EPUB files.
//!
//! Given raw text with loosely formatted chapter breaks (runs of blank
//! lines), txt2epub infers the document structure — title and author from
//! the filename, language from the text, chapters and optional sections
//! from the breaks — and packages it as a navigable EPUB with a table of
//! contents and minimal styling.
//!
//! ## Quick Start
//!
//! ```no_run
//! use txt2epub::{ConvertOptions, convert_file};
//!
//! // Infer everything from the file
//! convert_file("MyBook(Jane Doe).txt", None, &ConvertOptions::default()).unwrap();
//!
//! // Or override metadata explicitly
//! let options = ConvertOptions {
//!     title: Some("My Book".to_string()),
//!     language: Some("en".to_string()),
//!     ..Default::default()
//! };
//! convert_file("manuscript.txt", None, &options).unwrap();
//! ```
//!
//! ## Manuscript conventions
//!
//! - Chapters are separated by a run of `linebreaks` consecutive newlines
//!   (default 3). The text before the first separator is a front-matter
//!   "message" page, excluded from the table of contents.
//! - Each chapter's first line is its title; the remaining lines become
//!   paragraphs.
//! - A chapter whose title line is `===` (three or more equals signs)
//!   opens a section: the following non-blank line is the section title,
//!   and subsequent chapters nest beneath it in the table of contents.
//!
//! The intermediate [`Book`] representation can also be built directly from
//! a string with [`build_book`] and written with [`write_epub`].

pub mod book;
pub mod cover;
pub mod epub;
pub mod error;
pub mod txt;
pub(crate) mod util;

pub use book::{Book, Metadata, Resource, SpineItem, TocEntry};
pub use epub::{write_epub, write_epub_to_writer};
pub use error::{Error, Result};
pub use txt::{ConvertOptions, build_book, convert_file};
