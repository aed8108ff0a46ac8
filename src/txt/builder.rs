//! Document tree assembly.
//!
//! Consumes the segmenter output and resolved metadata and produces a
//! [`Book`]: XHTML content documents, the spine (info page, preamble,
//! navigation document, then every chapter and section page in original
//! block order), the hierarchical TOC, and the stylesheets.

use crate::book::{Book, Metadata, TocEntry};
use crate::txt::metadata::BookMeta;
use crate::txt::segment::{BlockKind, Segmented};
use crate::txt::styles;
use crate::util::escape_xml;

const XHTML_MIME: &str = "application/xhtml+xml";
const CSS_MIME: &str = "text/css";

/// Title of the navigation document.
const NAV_TITLE: &str = "目录";

/// Assemble a [`Book`] from segmented text and resolved metadata.
///
/// The segmenter has already validated the structure, so assembly cannot
/// fail. Every TOC entry points at a document that is also in the spine.
pub fn build_book(seg: &Segmented, meta: &BookMeta) -> Book {
    let mut book = Book::new();
    book.metadata = Metadata::new(meta.title.clone())
        .with_author(meta.author.clone())
        .with_language(meta.language.clone())
        .with_identifier(meta.identifier.clone());

    let lang = meta.language.as_str();

    // info page: title and author headings
    let info_body = format!(
        "<h1>{}</h1><h2>{}</h2>",
        escape_xml(&meta.title),
        escape_xml(&meta.author)
    );
    book.add_resource(
        "info.xhtml",
        xhtml_document("Info", lang, "style.css", &info_body).into_bytes(),
        XHTML_MIME,
    );
    book.add_spine_item("info", "info.xhtml", XHTML_MIME);

    // preamble page: plain paragraphs, no heading, never in the TOC
    let message_body = format!("<div>{}</div>", paragraphs(seg.preamble.split('\n')));
    book.add_resource(
        "message.xhtml",
        xhtml_document("Message", lang, "style.css", &message_body).into_bytes(),
        XHTML_MIME,
    );
    book.add_spine_item("message", "message.xhtml", XHTML_MIME);

    // navigation document is the third spine entry; its content depends on
    // the TOC, so it is generated after the chapter loop
    book.add_spine_item("nav", "nav.xhtml", XHTML_MIME);

    // chapter and section pages, with an explicit current-section
    // accumulator flushed on each section boundary and at end-of-input
    let mut toc: Vec<TocEntry> = Vec::new();
    let mut current_section: Option<TocEntry> = None;
    for block in &seg.blocks {
        let href = format!("chap_{:02}.xhtml", block.index);
        let id = format!("chap_{:02}", block.index);
        match &block.kind {
            BlockKind::SectionHeader { title } => {
                if let Some(section) = current_section.take() {
                    toc.push(section);
                }
                let body = format!("<h1>{}</h1>", escape_xml(title));
                book.add_resource(
                    href.clone(),
                    xhtml_document(title, lang, "style.css", &body).into_bytes(),
                    XHTML_MIME,
                );
                book.add_spine_item(id, href.clone(), XHTML_MIME);
                current_section = Some(TocEntry::new(*title, href));
            }
            BlockKind::Chapter { title, body } => {
                let html = format!(
                    "<h2>{}</h2><div>{}</div>",
                    escape_xml(title),
                    paragraphs(body.iter().copied())
                );
                book.add_resource(
                    href.clone(),
                    xhtml_document(title, lang, "style.css", &html).into_bytes(),
                    XHTML_MIME,
                );
                book.add_spine_item(id, href.clone(), XHTML_MIME);
                let entry = TocEntry::new(*title, href);
                match current_section.as_mut() {
                    Some(section) => section.children.push(entry),
                    None => toc.push(entry),
                }
            }
        }
    }
    if let Some(section) = current_section.take() {
        toc.push(section);
    }

    book.add_resource(
        "nav.xhtml",
        nav_document(&toc, lang).into_bytes(),
        XHTML_MIME,
    );

    book.add_resource("style.css", styles::STYLE_CSS.as_bytes().to_vec(), CSS_MIME);
    book.add_resource(
        "toc.css",
        styles::toc_css(seg.use_sections).into_bytes(),
        CSS_MIME,
    );

    book.toc = toc;
    book
}

/// Render lines as `<p>` paragraphs, each left-trimmed. Blank lines still
/// produce an empty paragraph.
fn paragraphs<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    let mut html = String::new();
    for line in lines {
        html.push_str("<p>");
        html.push_str(&escape_xml(line.trim_start()));
        html.push_str("</p>");
    }
    html
}

/// Wrap a body fragment in a complete XHTML document.
fn xhtml_document(title: &str, language: &str, stylesheet: &str, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
         <!DOCTYPE html>\n\
         <html xmlns=\"http://www.w3.org/1999/xhtml\" \
         xmlns:epub=\"http://www.idpf.org/2007/ops\" \
         lang=\"{lang}\" xml:lang=\"{lang}\">\n\
         <head>\n\
         \x20 <title>{title}</title>\n\
         \x20 <link rel=\"stylesheet\" type=\"text/css\" href=\"{stylesheet}\"/>\n\
         </head>\n\
         <body>{body}</body>\n\
         </html>\n",
        lang = escape_xml(language),
        title = escape_xml(title),
        stylesheet = stylesheet,
        body = body,
    )
}

/// Generate the EPUB 3 navigation document from the TOC tree.
fn nav_document(toc: &[TocEntry], language: &str) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        "<nav epub:type=\"toc\" id=\"toc\">\n<h2>{}</h2>\n",
        escape_xml(NAV_TITLE)
    ));
    write_nav_list(&mut body, toc);
    body.push_str("</nav>");
    xhtml_document(NAV_TITLE, language, "toc.css", &body)
}

fn write_nav_list(out: &mut String, entries: &[TocEntry]) {
    if entries.is_empty() {
        return;
    }
    out.push_str("<ol>\n");
    for entry in entries {
        out.push_str(&format!(
            "<li>\n<a href=\"{}\">{}</a>\n",
            escape_xml(&entry.href),
            escape_xml(&entry.title)
        ));
        write_nav_list(out, &entry.children);
        out.push_str("</li>\n");
    }
    out.push_str("</ol>\n");
}
