//! Two-mode word/line source adapter.
//!
//! A page either carries a native text layer (pre-segmented blocks plus a
//! flat word-box list) or is image-only (an OCR token stream). The two
//! shapes are modelled as a tagged variant dispatched once per page; both
//! produce the same output: ordered `Line` records plus the flat page-wide
//! word list the table filter runs over.

use serde::{Deserialize, Serialize};

use crate::model::{Line, Word};
use crate::ocr::{LineGrouping, OcrToken, reconstruct_lines};
use crate::utils::{Rect, rect_contains};

/// A pre-segmented block from the native text layer: its own box plus the
/// raw block text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub bbox: Rect,
    pub text: String,
}

/// Per-page input, as supplied by the upstream extractor or recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSource {
    /// Native text layer: blocks plus a separately-supplied flat word-box
    /// list, both in document-space coordinates and supply order.
    Native {
        blocks: Vec<TextBlock>,
        words: Vec<Word>,
    },
    /// Image-only page: the ordered OCR token stream, in raster coordinates.
    Ocr { tokens: Vec<OcrToken> },
}

/// Produces the canonical `(lines, all_words)` pair for a page.
pub fn assemble(source: &PageSource, grouping: LineGrouping) -> (Vec<Line>, Vec<Word>) {
    match source {
        PageSource::Native { blocks, words } => assemble_native(blocks, words),
        PageSource::Ocr { tokens } => reconstruct_lines(tokens, grouping),
    }
}

/// Native path: one line per non-blank block, carrying the word boxes fully
/// contained in the block.
///
/// The line index is the block's position in the input list, so skipped
/// blank blocks leave gaps. Line text is the block's own raw text (trimmed),
/// not a re-join of word texts; the two can disagree when a word box
/// straddles the block boundary and containment misses it. The page-wide
/// word list collects each kept block's contained words in encounter order,
/// so a word inside two overlapping blocks appears twice and a word inside
/// no block (or only a blank one) not at all.
fn assemble_native(blocks: &[TextBlock], words: &[Word]) -> (Vec<Line>, Vec<Word>) {
    let mut lines = Vec::new();
    let mut all_words = Vec::new();

    for (index, block) in blocks.iter().enumerate() {
        let text = block.text.trim();
        if text.is_empty() {
            continue;
        }

        let mut contained = Vec::new();
        for w in words {
            if rect_contains(block.bbox, w.bbox) {
                let word = Word {
                    text: w.text.trim().to_string(),
                    bbox: w.bbox,
                };
                contained.push(word.clone());
                all_words.push(word);
            }
        }

        lines.push(Line {
            index: index as i64,
            text: text.to_string(),
            bbox: block.bbox,
            words: contained,
        });
    }

    (lines, all_words)
}
