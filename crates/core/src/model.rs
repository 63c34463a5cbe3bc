//! The reconstructed layout hierarchy: words, lines, cells, tables, pages.
//!
//! All entities are plain value objects built fresh per page call; the core
//! holds no state across calls. The `Page` tree is the crate's external
//! surface, consumed as-is by persistence or presentation layers.

use serde::{Deserialize, Serialize};

use crate::utils::{HasBBox, Rect};

/// Atomic text unit with its bounding box. Never subdivided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub bbox: Rect,
}

/// A visual line of words.
///
/// For the OCR path, `index` is the recognizer-supplied line id and `text`
/// the space-joined member word texts; for the native path, `index` is the
/// block's position in the input list and `text` the block's own raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub index: i64,
    pub text: String,
    pub bbox: Rect,
    pub words: Vec<Word>,
}

/// An axis-aligned table box proposed by the detector, in detector (pixel)
/// space, prior to normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedTable {
    pub bbox: Rect,
}

/// A merged table cell. `col` restarts at 0 on each row; `is_header` marks
/// every cell of the first row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub text: String,
    pub bbox: Rect,
    pub is_header: bool,
}

/// A detected table with its clustered cells, in document space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconstructedTable {
    pub bbox: Rect,
    pub cells: Vec<Cell>,
}

/// One reconstructed page. `number` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub number: u32,
    pub width: f64,
    pub height: f64,
    pub lines: Vec<Line>,
    pub tables: Vec<ReconstructedTable>,
}

/// Space-joins word texts in slice order.
pub(crate) fn join_text(words: &[Word]) -> String {
    words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! impl_has_bbox {
    ($ty:ty) => {
        impl HasBBox for $ty {
            fn x0(&self) -> f64 {
                self.bbox.0
            }
            fn y0(&self) -> f64 {
                self.bbox.1
            }
            fn x1(&self) -> f64 {
                self.bbox.2
            }
            fn y1(&self) -> f64 {
                self.bbox.3
            }
        }
    };
}

impl_has_bbox!(Word);
impl_has_bbox!(Line);
impl_has_bbox!(DetectedTable);
impl_has_bbox!(Cell);
impl_has_bbox!(ReconstructedTable);
