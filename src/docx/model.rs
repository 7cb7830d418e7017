// src/docx/model.rs

/// How a cell takes part in a vertical merge (`w:vMerge`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VMerge {
    #[default]
    None,
    /// First cell of a vertically merged region; carries the text.
    Restart,
    /// Covered by the cell above; its own content is ignored.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCell {
    pub text: String,
    pub grid_span: usize, // Always >= 1
    pub v_merge: VMerge,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub grid_before: usize, // Grid columns skipped before the first cell
    pub cells: Vec<RawCell>,
}

impl RawRow {
    /// Number of grid columns this row occupies.
    pub fn grid_width(&self) -> usize {
        self.grid_before + self.cells.iter().map(|c| c.grid_span).sum::<usize>()
    }
}

/// A body table exactly as it appears in the document, before it is
/// flattened into a text grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub grid_cols: usize, // Count of w:gridCol, 0 when the table declares no grid
    pub rows: Vec<RawRow>,
}

/// A loaded change-request document. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Document {
    tables: Vec<RawTable>,
}

impl Document {
    pub fn new(tables: Vec<RawTable>) -> Self {
        Self { tables }
    }

    /// Top-level body tables in document order.
    pub fn tables(&self) -> &[RawTable] {
        &self.tables
    }
}
