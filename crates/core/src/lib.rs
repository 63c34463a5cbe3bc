//! tesela - reconstruction of structured document layout from recognizer
//! output.
//!
//! Takes the low-level geometric primitives produced by upstream recognizers
//! (a native text layer's blocks and word boxes, or an OCR token stream,
//! plus detected table boxes) and rebuilds the page hierarchy: lines, words,
//! tables and cells, each with bounding-box provenance. Purely geometric and
//! textual; no recognition, no I/O.

pub mod api;
pub mod error;
pub mod model;
pub mod ocr;
pub mod scale;
pub mod source;
pub mod table;
pub mod utils;

// Re-export high_level as the main entry point
pub use api::high_level;

pub use api::high_level::{
    PageInput, ReconstructOptions, is_scanned_text, reconstruct_page, reconstruct_pages,
    try_reconstruct_page,
};
pub use error::{LayoutError, Result};
pub use model::{Cell, DetectedTable, Line, Page, ReconstructedTable, Word};
pub use ocr::{LineGrouping, OcrToken};
pub use source::{PageSource, TextBlock};
pub use table::{AnchorMode, TableSettings};
