use std::collections::HashMap;
use std::io::{Seek, Write};
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::book::{Book, TocEntry};
use crate::error::Result;
use crate::util::escape_xml;

/// Href of the EPUB 3 navigation document; gets `properties="nav"` in the
/// manifest.
const NAV_HREF: &str = "nav.xhtml";

/// Write a [`Book`] to an EPUB file on disk.
///
/// Creates an EPUB 3 file with OPF package document, NCX table of contents,
/// and all resources properly packaged.
///
/// # Example
///
/// ```no_run
/// use txt2epub::{Book, Metadata, write_epub};
///
/// let mut book = Book::new();
/// book.metadata = Metadata::new("My Book").with_author("Me");
/// write_epub(&book, "output.epub")?;
/// # Ok::<(), txt2epub::Error>(())
/// ```
pub fn write_epub<P: AsRef<Path>>(book: &Book, path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_epub_to_writer(book, file)
}

/// Write a [`Book`] to any [`Write`] + [`Seek`] destination.
///
/// Useful for writing to memory buffers.
pub fn write_epub_to_writer<W: Write + Seek>(book: &Book, writer: W) -> Result<()> {
    let mut zip = ZipWriter::new(writer);

    // 1. Write mimetype (must be first, uncompressed)
    let options_stored =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let options_deflate =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("mimetype", options_stored)?;
    zip.write_all(b"application/epub+zip")?;

    // 2. Write META-INF/container.xml
    zip.start_file("META-INF/container.xml", options_deflate)?;
    zip.write_all(CONTAINER_XML.as_bytes())?;

    // 3. Write content.opf
    let opf = generate_opf(book);
    zip.start_file("OEBPS/content.opf", options_deflate)?;
    zip.write_all(opf.as_bytes())?;

    // 4. Write toc.ncx
    let ncx = generate_ncx(book);
    zip.start_file("OEBPS/toc.ncx", options_deflate)?;
    zip.write_all(ncx.as_bytes())?;

    // 5. Write all resources, sorted for deterministic output
    let mut hrefs: Vec<&String> = book.resources.keys().collect();
    hrefs.sort();
    for href in hrefs {
        let resource = &book.resources[href];
        let path = format!("OEBPS/{}", href);
        zip.start_file(&path, options_deflate)?;
        zip.write_all(&resource.data)?;
    }

    zip.finish()?;
    Ok(())
}

const CONTAINER_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

fn generate_opf(book: &Book) -> String {
    let mut opf = String::new();

    opf.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="3.0" unique-identifier="BookId">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:opf="http://www.idpf.org/2007/opf">
"#,
    );

    // Dublin Core metadata
    opf.push_str(&format!(
        "    <dc:title>{}</dc:title>\n",
        escape_xml(&book.metadata.title)
    ));

    opf.push_str(&format!(
        "    <dc:identifier id=\"BookId\">{}</dc:identifier>\n",
        escape_xml(&book.metadata.identifier)
    ));

    let language = if book.metadata.language.is_empty() {
        "en"
    } else {
        &book.metadata.language
    };
    opf.push_str(&format!("    <dc:language>{}</dc:language>\n", language));

    for author in &book.metadata.authors {
        opf.push_str(&format!(
            "    <dc:creator>{}</dc:creator>\n",
            escape_xml(author)
        ));
    }

    let modified = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    opf.push_str(&format!(
        "    <meta property=\"dcterms:modified\">{}</meta>\n",
        modified
    ));

    // Cover image meta
    if book.metadata.cover_image.is_some() {
        opf.push_str("    <meta name=\"cover\" content=\"cover-image\"/>\n");
    }

    opf.push_str("  </metadata>\n  <manifest>\n");

    // NCX item
    opf.push_str(
        "    <item id=\"ncx\" href=\"toc.ncx\" media-type=\"application/x-dtbncx+xml\"/>\n",
    );

    // Manifest ids follow the spine where a resource is a spine document
    let spine_ids: HashMap<&str, &str> = book
        .spine
        .iter()
        .map(|item| (item.href.as_str(), item.id.as_str()))
        .collect();

    // Manifest items, sorted for deterministic output
    let mut hrefs: Vec<&String> = book.resources.keys().collect();
    hrefs.sort();
    for href in hrefs {
        let resource = &book.resources[href];
        let item_id = if book.metadata.cover_image.as_deref() == Some(href) {
            "cover-image".to_string()
        } else {
            spine_ids
                .get(href.as_str())
                .map(|id| id.to_string())
                .unwrap_or_else(|| href_to_id(href))
        };
        let properties = if href == NAV_HREF {
            " properties=\"nav\""
        } else {
            ""
        };
        opf.push_str(&format!(
            "    <item id=\"{}\" href=\"{}\" media-type=\"{}\"{}/>\n",
            item_id,
            escape_xml(href),
            escape_xml(&resource.media_type),
            properties
        ));
    }

    opf.push_str("  </manifest>\n  <spine toc=\"ncx\">\n");

    // Spine items
    for item in &book.spine {
        opf.push_str(&format!("    <itemref idref=\"{}\"/>\n", item.id));
    }

    opf.push_str("  </spine>\n</package>\n");
    opf
}

fn generate_ncx(book: &Book) -> String {
    let mut ncx = String::new();

    ncx.push_str(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE ncx PUBLIC "-//NISO//DTD ncx 2005-1//EN" "http://www.daisy.org/z3986/2005/ncx-2005-1.dtd">
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head>
    <meta name="dtb:uid" content=""#,
    );

    ncx.push_str(&escape_xml(&book.metadata.identifier));
    ncx.push_str(
        r#""/>
    <meta name="dtb:depth" content="1"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle>
    <text>"#,
    );
    ncx.push_str(&escape_xml(&book.metadata.title));
    ncx.push_str(
        r#"</text>
  </docTitle>
  <navMap>
"#,
    );

    // Generate navPoints
    let mut play_order = 1;
    for entry in &book.toc {
        write_nav_point(&mut ncx, entry, &mut play_order, 2);
    }

    ncx.push_str("  </navMap>\n</ncx>\n");
    ncx
}

fn write_nav_point(ncx: &mut String, entry: &TocEntry, play_order: &mut usize, indent: usize) {
    let indent_str = "  ".repeat(indent);

    ncx.push_str(&format!(
        "{}<navPoint id=\"navpoint-{}\" playOrder=\"{}\">\n",
        indent_str, play_order, play_order
    ));
    ncx.push_str(&format!(
        "{}  <navLabel>\n{}    <text>{}</text>\n{}  </navLabel>\n",
        indent_str,
        indent_str,
        escape_xml(&entry.title),
        indent_str
    ));
    ncx.push_str(&format!(
        "{}  <content src=\"{}\"/>\n",
        indent_str,
        escape_xml(&entry.href)
    ));

    *play_order += 1;

    for child in &entry.children {
        write_nav_point(ncx, child, play_order, indent + 1);
    }

    ncx.push_str(&format!("{}</navPoint>\n", indent_str));
}

fn href_to_id(href: &str) -> String {
    href.replace(['/', '.', ' ', '-'], "_")
}
