//! Manuscript segmentation.
//!
//! Splits raw text into a preamble block and an ordered sequence of chapter
//! blocks on a run of consecutive newlines, then classifies each block as a
//! chapter or a section header. Splitting is exact non-overlapping substring
//! matching: a run of N-1 newlines never splits, and a run of N+1 newlines
//! splits once, leaving a leading newline that the per-block strip removes.

use crate::error::{Error, Result};

/// One post-preamble block, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-based position in the post-preamble block sequence, section headers
    /// included. Chapter file numbering is derived from this, so gaps appear
    /// whenever a section header occupies an index.
    pub index: usize,
    pub kind: BlockKind<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind<'a> {
    /// A block whose title line is a bare `===...` rule; `title` is the first
    /// non-blank line after the rule. The rest of the block is discarded.
    SectionHeader { title: &'a str },
    /// A regular chapter: first line is the title, the remaining lines are
    /// the body (untrimmed; paragraph trimming is a rendering concern).
    Chapter { title: &'a str, body: Vec<&'a str> },
}

/// Segmentation result. Borrows from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented<'a> {
    /// The first raw block, verbatim. Always present, possibly empty.
    pub preamble: &'a str,
    pub blocks: Vec<Block<'a>>,
    /// Whether the document uses the two-level section convention. Decided
    /// once from the first post-preamble block, for the whole document.
    pub use_sections: bool,
}

/// Split `text` on runs of `linebreaks` consecutive newlines and classify
/// the resulting blocks.
///
/// The caller guarantees `linebreaks >= 1` (checked at the options boundary).
pub fn segment(text: &str, linebreaks: usize) -> Result<Segmented<'_>> {
    let delimiter = "\n".repeat(linebreaks);
    let mut parts = text.split(delimiter.as_str());

    // split always yields at least one element
    let preamble = parts.next().unwrap_or("");

    let raw_blocks: Vec<&str> = parts.collect();
    let use_sections = raw_blocks
        .first()
        .map(|block| block.trim_start_matches('\n').starts_with("==="))
        .unwrap_or(false);

    let mut blocks = Vec::with_capacity(raw_blocks.len());
    let mut section_open = false;
    for (i, raw) in raw_blocks.iter().enumerate() {
        let index = i + 1;
        let content = raw.trim_start_matches('\n');
        let mut lines = content.split('\n');
        let title = lines.next().unwrap_or("");
        let body: Vec<&str> = lines.collect();

        if use_sections && is_section_rule(title) {
            let section_title = body.iter().copied().find(|line| !line.is_empty());
            let Some(section_title) = section_title else {
                return Err(Error::MalformedStructure(format!(
                    "section rule at block {index} has no title line"
                )));
            };
            section_open = true;
            blocks.push(Block {
                index,
                kind: BlockKind::SectionHeader {
                    title: section_title,
                },
            });
        } else {
            if use_sections && !section_open {
                return Err(Error::MalformedStructure(format!(
                    "chapter at block {index} appears before any section"
                )));
            }
            blocks.push(Block {
                index,
                kind: BlockKind::Chapter { title, body },
            });
        }
    }

    Ok(Segmented {
        preamble,
        blocks,
        use_sections,
    })
}

/// A line of three or more `=` characters and nothing else.
fn is_section_rule(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'=')
}
