//! Table cell reconstruction.
//!
//! Takes a normalized table box plus the page's word list and produces
//! ordered rows of merged cells with header tagging:
//! membership filtering, row grouping, then per-row cell merging.

mod clustering;
mod membership;
mod types;

pub use clustering::{cluster_rows, merge_row_cells, reconstruct_table};
pub use membership::words_in_table;
pub use types::{AnchorMode, TableSettings};
