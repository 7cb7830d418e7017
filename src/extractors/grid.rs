// src/extractors/grid.rs
use crate::docx::model::{RawTable, VMerge};
use crate::docx::Document;
use serde::Serialize;

/// A table flattened into plain cell text, one string per grid position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableGrid {
    columns: usize,
    rows: Vec<Vec<String>>,
}

impl TableGrid {
    /// Builds a grid from rows of text. Rows are padded to the widest one.
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(columns, String::new());
                r
            })
            .collect();
        Self { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Converts every body table of the document into a text grid.
///
/// Recomputed on each call; callers that read several fields should keep
/// the returned vector rather than calling this again.
pub fn tables_to_grids(document: &Document) -> Vec<TableGrid> {
    document.tables().iter().map(grid_from_raw).collect()
}

/// Flattens one table. Horizontally merged cells repeat their text across
/// every grid column they span; vertically continued cells copy the text of
/// the cell above.
fn grid_from_raw(table: &RawTable) -> TableGrid {
    let columns = if table.grid_cols > 0 {
        table.grid_cols
    } else {
        table.rows.iter().map(|r| r.grid_width()).max().unwrap_or(0)
    };

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.rows.len());
    for (row_index, raw_row) in table.rows.iter().enumerate() {
        let mut row = vec![String::new(); columns];
        let mut column = raw_row.grid_before;
        let mut dropped = 0;

        for cell in &raw_row.cells {
            let text = match cell.v_merge {
                VMerge::Continue => rows
                    .last()
                    .and_then(|above| above.get(column))
                    .cloned()
                    .unwrap_or_default(),
                VMerge::None | VMerge::Restart => cell.text.clone(),
            };

            for _ in 0..cell.grid_span {
                match row.get_mut(column) {
                    Some(slot) => *slot = text.clone(),
                    None => dropped += 1,
                }
                column += 1;
            }
        }

        if dropped > 0 {
            tracing::warn!(
                "Row {} has {} cell position(s) beyond the {}-column grid; ignoring them",
                row_index,
                dropped,
                columns
            );
        }
        rows.push(row);
    }

    TableGrid { columns, rows }
}
