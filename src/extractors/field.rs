// src/extractors/field.rs
use crate::extractors::grid::TableGrid;
use crate::utils::error::ExtractError;

/// Joins the cells `[col_start, col_end)` of one table row, with no
/// separator and no trimming.
///
/// Table and row indices must exist. Column bounds behave like a slice that
/// clamps to the row width, so an empty, inverted, or out-of-row range gives
/// an empty string.
pub fn extract_field(
    tables: &[TableGrid],
    table_index: usize,
    row_index: usize,
    col_start: usize,
    col_end: usize,
) -> Result<String, ExtractError> {
    let table = tables.get(table_index).ok_or(ExtractError::TableOutOfRange {
        index: table_index,
        count: tables.len(),
    })?;

    let row = table.row(row_index).ok_or(ExtractError::RowOutOfRange {
        table: table_index,
        row: row_index,
        count: table.row_count(),
    })?;

    let end = col_end.min(row.len());
    let start = col_start.min(end);
    let value = row[start..end].concat();

    tracing::trace!(
        "Field t{} r{} c{}..{} = {:?}",
        table_index,
        row_index,
        col_start,
        col_end,
        value
    );
    Ok(value)
}
