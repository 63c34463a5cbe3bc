//! Word-to-table membership filtering.

use crate::model::Word;
use crate::utils::{HasBBox, Rect, rect_center};

/// Returns the subset of `words` whose center falls inside `table_bbox`
/// expanded by `margin` on all sides (bounds inclusive).
///
/// The subset keeps the page's encounter order; it is not re-sorted here.
/// An empty result means a table with zero cells, not an error.
pub fn words_in_table(words: &[Word], table_bbox: Rect, margin: f64) -> Vec<Word> {
    let (x0, y0, x1, y1) = table_bbox;
    words
        .iter()
        .filter(|w| {
            let (cx, cy) = rect_center(w.bbox());
            (x0 - margin) <= cx && cx <= (x1 + margin) && (y0 - margin) <= cy && cy <= (y1 + margin)
        })
        .cloned()
        .collect()
}
