//! High-level page reconstruction API.
//!
//! Composes the fixed per-page pipeline: source adapter → per-table
//! normalize/filter/cluster → `Page`. Pages share no state, so the batch
//! entry point maps them in parallel on the rayon pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::model::{DetectedTable, Page, ReconstructedTable, Word};
use crate::ocr::LineGrouping;
use crate::scale::{scale_factors, to_document_space};
use crate::source::{PageSource, assemble};
use crate::table::{TableSettings, reconstruct_table};

/// Everything the upstream collaborators supply for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    /// 1-based page number.
    pub number: u32,
    /// Document-space page width, in points.
    pub width: f64,
    /// Document-space page height, in points.
    pub height: f64,
    pub source: PageSource,
    /// Table boxes from the detector, in raster pixels.
    #[serde(default)]
    pub tables: Vec<DetectedTable>,
    /// Pixel dimensions of the raster the detector ran on. Required whenever
    /// `tables` is non-empty.
    #[serde(default)]
    pub raster: Option<(f64, f64)>,
}

/// Knobs for the reconstruction pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReconstructOptions {
    pub table: TableSettings,
    pub line_grouping: LineGrouping,
}

/// Heuristic used by callers to route a page to the OCR path: a native text
/// layer shorter than 10 characters (trimmed) means the page is effectively
/// scanned.
pub fn is_scanned_text(text: &str) -> bool {
    text.trim().chars().count() < 10
}

/// Normalizes each detected table box into document space and clusters the
/// page words into its cells.
///
/// Fails only when the scale factors are degenerate; the failure covers the
/// whole table set of the page, never other pages.
pub fn reconstruct_tables(
    detected: &[DetectedTable],
    raster: (f64, f64),
    document: (f64, f64),
    words: &[Word],
    settings: &TableSettings,
) -> Result<Vec<ReconstructedTable>> {
    let scales = scale_factors(raster, document)?;
    Ok(detected
        .iter()
        .map(|t| reconstruct_table(to_document_space(t.bbox, scales), words, settings))
        .collect())
}

/// Reconstructs one page, keeping lines and words when table normalization
/// fails. The dropped-table error, if any, is returned alongside the page.
pub fn reconstruct_page_lossy(
    input: &PageInput,
    options: &ReconstructOptions,
) -> (Page, Option<LayoutError>) {
    let (lines, words) = assemble(&input.source, options.line_grouping);

    let (tables, dropped) = if input.tables.is_empty() {
        (Vec::new(), None)
    } else {
        let raster = input.raster.unwrap_or((0.0, 0.0));
        match reconstruct_tables(
            &input.tables,
            raster,
            (input.width, input.height),
            &words,
            &options.table,
        ) {
            Ok(tables) => (tables, None),
            Err(e) => (Vec::new(), Some(e)),
        }
    };

    let page = Page {
        number: input.number,
        width: input.width,
        height: input.height,
        lines,
        tables,
    };
    (page, dropped)
}

/// Reconstructs one page, silently dropping tables whose normalization
/// failed (lines and words always survive).
pub fn reconstruct_page(input: &PageInput, options: &ReconstructOptions) -> Page {
    reconstruct_page_lossy(input, options).0
}

/// Strict variant: any table-normalization failure fails the page.
pub fn try_reconstruct_page(input: &PageInput, options: &ReconstructOptions) -> Result<Page> {
    match reconstruct_page_lossy(input, options) {
        (page, None) => Ok(page),
        (_, Some(e)) => Err(e),
    }
}

/// Reconstructs a batch of pages in parallel. Output order matches input
/// order; one page's table failure never aborts the others.
pub fn reconstruct_pages(inputs: &[PageInput], options: &ReconstructOptions) -> Vec<Page> {
    inputs
        .par_iter()
        .map(|input| reconstruct_page(input, options))
        .collect()
}
