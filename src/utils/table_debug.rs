// src/utils/table_debug.rs
use crate::extractors::{TableGrid, TableRole};
use std::io::{self, Write};

/// Writes every table grid with row/column coordinates, so a new form
/// template can be checked against the field locations.
pub fn dump_tables<W: Write>(out: &mut W, tables: &[TableGrid]) -> io::Result<()> {
    for (index, table) in tables.iter().enumerate() {
        let role = TableRole::ALL
            .get(index)
            .map(|r| r.name())
            .unwrap_or("unexpected");
        writeln!(
            out,
            "=== Table {} ({}): {} rows x {} columns",
            index,
            role,
            table.row_count(),
            table.column_count()
        )?;

        for (row_index, row) in table.rows().enumerate() {
            for (col_index, text) in row.iter().enumerate() {
                // Debug formatting shows whitespace that would otherwise vanish
                if !text.is_empty() {
                    writeln!(out, "  [{},{}] {:?}", row_index, col_index, text)?;
                }
            }
        }
    }
    writeln!(out)?;

    tracing::debug!("Dumped {} tables", tables.len());
    Ok(())
}
