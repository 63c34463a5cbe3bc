//! Table reconstruction settings.

// Default constants, in document-space units
pub(crate) const DEFAULT_MEMBERSHIP_MARGIN: f64 = 10.0;
pub(crate) const DEFAULT_ROW_QUANTUM: f64 = 10.0;
pub(crate) const DEFAULT_ROW_TOLERANCE: f64 = 10.0;
pub(crate) const DEFAULT_CELL_GAP: f64 = 15.0;

/// How the row-clustering pass tracks its reference y-coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorMode {
    /// The anchor drifts to the most recently appended word's y0, so a row
    /// can accumulate a cumulative vertical tolerance greater than
    /// `row_tolerance` across many words. This is the compatible behavior.
    #[default]
    Drifting,
    /// The anchor stays fixed at the row's first word.
    FirstWord,
}

/// Settings for table membership filtering and row/cell clustering.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSettings {
    /// Margin added around the table box when testing word-center membership.
    pub membership_margin: f64,
    /// Quantization step for the y component of the row scan-order key.
    pub row_quantum: f64,
    /// Maximum |y0 - anchor| for a word to join the current row.
    pub row_tolerance: f64,
    /// Horizontal gaps below this merge adjacent words into one cell.
    pub cell_gap: f64,
    /// Row anchor strategy.
    pub anchor: AnchorMode,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            membership_margin: DEFAULT_MEMBERSHIP_MARGIN,
            row_quantum: DEFAULT_ROW_QUANTUM,
            row_tolerance: DEFAULT_ROW_TOLERANCE,
            cell_gap: DEFAULT_CELL_GAP,
            anchor: AnchorMode::Drifting,
        }
    }
}
