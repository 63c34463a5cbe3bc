//! Row grouping and cell merging over the in-table word subset.
//!
//! Two-phase: a forward pass groups the words into rows by vertical
//! proximity, then each row is walked left to right merging horizontally
//! close words into cells.

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::model::{Cell, ReconstructedTable, Word, join_text};
use crate::table::membership::words_in_table;
use crate::table::types::{AnchorMode, TableSettings};
use crate::utils::{HasBBox, Rect};

/// Groups the member words into rows.
///
/// The sort by `(round(y0 / quantum) * quantum, x0)` only fixes the scan
/// order; row membership is decided by the forward pass against the anchor.
/// With `AnchorMode::Drifting` the anchor follows the last appended word, so
/// consecutive small steps in y0 keep extending the same row.
pub fn cluster_rows(words: &[Word], settings: &TableSettings) -> Vec<Vec<Word>> {
    let quantum = settings.row_quantum;
    let scan = words.iter().sorted_by_key(|w| {
        (
            OrderedFloat((w.y0() / quantum).round() * quantum),
            OrderedFloat(w.x0()),
        )
    });

    let mut rows: Vec<Vec<Word>> = Vec::new();
    let mut row: Vec<Word> = Vec::new();
    let mut anchor_y: Option<f64> = None;

    for w in scan {
        let y = w.y0();
        let joins = anchor_y.is_none_or(|a| (y - a).abs() <= settings.row_tolerance);
        if joins {
            row.push(w.clone());
            match settings.anchor {
                AnchorMode::Drifting => anchor_y = Some(y),
                AnchorMode::FirstWord => {
                    if anchor_y.is_none() {
                        anchor_y = Some(y);
                    }
                }
            }
        } else {
            rows.push(std::mem::take(&mut row));
            row.push(w.clone());
            anchor_y = Some(y);
        }
    }
    if !row.is_empty() {
        rows.push(row);
    }

    rows
}

/// Merges one row's words into cells, left to right.
///
/// A word is absorbed into the open cell while its x0 is closer than
/// `cell_gap` to the cell's running max x1. The cell box keeps the first
/// word's x0/y0 and extends x1/y1 via max; cell text is the space-join in
/// x order.
pub fn merge_row_cells(row_words: &[Word], row: usize, settings: &TableSettings) -> Vec<Cell> {
    let ordered = row_words
        .iter()
        .sorted_by_key(|w| OrderedFloat(w.x0()));

    let mut cells: Vec<Cell> = Vec::new();
    let mut current: Vec<Word> = Vec::new();
    let mut bbox: Rect = (0.0, 0.0, 0.0, 0.0);

    for w in ordered {
        if current.is_empty() {
            bbox = w.bbox();
        } else if w.x0() - bbox.2 < settings.cell_gap {
            bbox.2 = bbox.2.max(w.x1());
            bbox.3 = bbox.3.max(w.y1());
        } else {
            cells.push(close_cell(&current, bbox, row, cells.len()));
            current.clear();
            bbox = w.bbox();
        }
        current.push(w.clone());
    }
    if !current.is_empty() {
        cells.push(close_cell(&current, bbox, row, cells.len()));
    }

    cells
}

fn close_cell(words: &[Word], bbox: Rect, row: usize, col: usize) -> Cell {
    Cell {
        row,
        col,
        text: join_text(words),
        bbox,
        is_header: row == 0,
    }
}

/// Filters the page words against a normalized table box and clusters the
/// members into rows of merged cells.
pub fn reconstruct_table(
    bbox: Rect,
    page_words: &[Word],
    settings: &TableSettings,
) -> ReconstructedTable {
    let members = words_in_table(page_words, bbox, settings.membership_margin);
    let rows = cluster_rows(&members, settings);

    let mut cells = Vec::new();
    for (row_idx, row_words) in rows.iter().enumerate() {
        cells.extend(merge_row_cells(row_words, row_idx, settings));
    }

    ReconstructedTable { bbox, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, bbox: Rect) -> Word {
        Word {
            text: text.to_string(),
            bbox,
        }
    }

    #[test]
    fn anchor_drift_extends_row() {
        // 8 joins the row at anchor 0 and drags the anchor to 8; 19 compares
        // against 8 (gap 11) and opens a new row.
        let words = vec![
            word("a", (0.0, 0.0, 10.0, 5.0)),
            word("b", (12.0, 8.0, 22.0, 13.0)),
            word("c", (0.0, 19.0, 10.0, 24.0)),
        ];
        let settings = TableSettings::default();

        let rows = cluster_rows(&words, &settings);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn first_word_anchor_splits_drift_chain() {
        // Same chain as above plus a further step; a fixed anchor compares
        // 19 against 0 and splits earlier.
        let words = vec![
            word("a", (0.0, 0.0, 10.0, 5.0)),
            word("b", (12.0, 8.0, 22.0, 13.0)),
            word("c", (24.0, 16.0, 34.0, 21.0)),
        ];
        let drifting = TableSettings::default();
        let fixed = TableSettings {
            anchor: AnchorMode::FirstWord,
            ..TableSettings::default()
        };

        assert_eq!(cluster_rows(&words, &drifting).len(), 1);
        let rows = cluster_rows(&words, &fixed);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn cell_gap_threshold_is_strict() {
        let settings = TableSettings::default();
        // Gap 14 merges, gap 15 does not.
        let merged = merge_row_cells(
            &[
                word("a", (0.0, 0.0, 100.0, 10.0)),
                word("b", (114.0, 0.0, 130.0, 10.0)),
            ],
            0,
            &settings,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "a b");
        assert_eq!(merged[0].bbox, (0.0, 0.0, 130.0, 10.0));

        let split = merge_row_cells(
            &[
                word("a", (0.0, 0.0, 100.0, 10.0)),
                word("b", (115.0, 0.0, 130.0, 10.0)),
            ],
            0,
            &settings,
        );
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].col, 0);
        assert_eq!(split[1].col, 1);
    }

    #[test]
    fn gap_measured_against_running_max_x1() {
        let settings = TableSettings::default();
        // The second word ends past the third word's start; the running max
        // x1 keeps the third word mergeable even though the sorted
        // predecessor's x1 alone would not.
        let cells = merge_row_cells(
            &[
                word("a", (0.0, 0.0, 50.0, 10.0)),
                word("b", (40.0, 0.0, 120.0, 10.0)),
                word("c", (130.0, 0.0, 150.0, 10.0)),
            ],
            0,
            &settings,
        );
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].text, "a b c");
    }

    #[test]
    fn cell_bbox_keeps_first_word_origin() {
        let settings = TableSettings::default();
        let cells = merge_row_cells(
            &[
                word("a", (0.0, 2.0, 50.0, 10.0)),
                word("b", (55.0, 0.0, 90.0, 12.0)),
            ],
            0,
            &settings,
        );
        // y0 stays at the first word's 2.0; only x1/y1 extend.
        assert_eq!(cells[0].bbox, (0.0, 2.0, 90.0, 12.0));
    }

    #[test]
    fn header_tagging_on_first_row_only() {
        let words = vec![
            word("h1", (0.0, 0.0, 20.0, 10.0)),
            word("h2", (100.0, 0.0, 120.0, 10.0)),
            word("v1", (0.0, 30.0, 20.0, 40.0)),
            word("v2", (100.0, 30.0, 120.0, 40.0)),
        ];
        let table = reconstruct_table((0.0, 0.0, 200.0, 50.0), &words, &TableSettings::default());

        assert_eq!(table.cells.len(), 4);
        for cell in &table.cells {
            assert_eq!(cell.is_header, cell.row == 0);
        }
    }

    #[test]
    fn empty_table_has_no_cells() {
        let words = vec![word("far", (900.0, 900.0, 910.0, 910.0))];
        let table = reconstruct_table((0.0, 0.0, 100.0, 100.0), &words, &TableSettings::default());
        assert!(table.cells.is_empty());
        assert_eq!(table.bbox, (0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn col_resets_per_row() {
        let words = vec![
            word("a", (0.0, 0.0, 20.0, 10.0)),
            word("b", (100.0, 0.0, 120.0, 10.0)),
            word("c", (0.0, 30.0, 20.0, 40.0)),
        ];
        let table = reconstruct_table((0.0, 0.0, 200.0, 50.0), &words, &TableSettings::default());
        let coords: Vec<(usize, usize)> = table.cells.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0)]);
    }
}
