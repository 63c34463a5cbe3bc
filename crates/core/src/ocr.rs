//! OCR line reconstruction from a flat tagged token stream.
//!
//! Image-based recognizers emit words in reading order with a `line_id` tag
//! that only signals "same visual line as the previous token when unchanged";
//! the ids are neither sorted nor usefully unique across the page. A single
//! forward pass folds that stream into `Line` records, carrying the open
//! line in an explicit accumulator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Line, Word, join_text};
use crate::utils::{Rect, envelope, rect_union};

/// One recognized token from the OCR stream. The bbox stays in the
/// recognizer's raster frame; OCR boxes are never normalized because every
/// box on the page shares that frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrToken {
    pub text: String,
    pub bbox: Rect,
    pub line_id: i64,
}

/// Strategy for turning line-id runs into `Line` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineGrouping {
    /// Flush on every id change. A `line_id` recurring after the stream
    /// switched away yields a second line with the same index. This is the
    /// compatible behavior.
    #[default]
    Adjacent,
    /// Merge non-adjacent runs with equal ids into a single line. The merged
    /// line keeps the output position of the id's first run; its bbox is the
    /// union envelope and its words stay in encounter order.
    ById,
}

/// The open line carried through the fold.
struct LineAccumulator {
    line_id: i64,
    words: Vec<Word>,
}

impl LineAccumulator {
    fn start(line_id: i64, word: Word) -> Self {
        Self {
            line_id,
            words: vec![word],
        }
    }

    fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    fn finish(self) -> Line {
        Line {
            index: self.line_id,
            text: join_text(&self.words),
            bbox: envelope(self.words.iter().map(|w| w.bbox)),
            words: self.words,
        }
    }
}

/// Folds the token stream into lines plus the flat page-wide word list.
///
/// Blank tokens are skipped entirely and never act as a line boundary: a run
/// of blanks with a different id does not close the open line.
pub fn reconstruct_lines(tokens: &[OcrToken], grouping: LineGrouping) -> (Vec<Line>, Vec<Word>) {
    let mut lines: Vec<Line> = Vec::new();
    // Only the merging strategy tracks ids; Adjacent never reads the map.
    let mut by_id: Option<HashMap<i64, usize>> = match grouping {
        LineGrouping::Adjacent => None,
        LineGrouping::ById => Some(HashMap::new()),
    };
    let mut all_words: Vec<Word> = Vec::new();
    let mut current: Option<LineAccumulator> = None;

    for token in tokens {
        let trimmed = token.text.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word {
            text: trimmed.to_string(),
            bbox: token.bbox,
        };
        all_words.push(word.clone());

        current = Some(match current.take() {
            None => LineAccumulator::start(token.line_id, word),
            Some(mut acc) if acc.line_id == token.line_id => {
                acc.push(word);
                acc
            }
            Some(acc) => {
                emit(&mut lines, &mut by_id, acc.finish());
                LineAccumulator::start(token.line_id, word)
            }
        });
    }

    if let Some(acc) = current {
        emit(&mut lines, &mut by_id, acc.finish());
    }

    (lines, all_words)
}

fn emit(lines: &mut Vec<Line>, by_id: &mut Option<HashMap<i64, usize>>, line: Line) {
    if let Some(by_id) = by_id {
        if let Some(&at) = by_id.get(&line.index) {
            let existing = &mut lines[at];
            existing.bbox = rect_union(existing.bbox, line.bbox);
            existing.words.extend(line.words);
            existing.text = join_text(&existing.words);
            return;
        }
        by_id.insert(line.index, lines.len());
    }
    lines.push(line);
}
