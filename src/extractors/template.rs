// src/extractors/template.rs
//! Positional layout of the change-request approval form.
//!
//! Every field lives at a fixed table, row and column range. If the form
//! template changes these coordinates silently read the wrong cells;
//! [`validate_layout`] catches the cases where a table or row is missing
//! outright.

use crate::extractors::field::extract_field;
use crate::extractors::grid::TableGrid;
use crate::utils::error::ExtractError;
use serde::Serialize;
use std::ops::Range;

/// The six tables of the form, by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    Request = 0,       // Request By, Load Before, Project ID
    Signatures = 1,    // Snr sig, Co-ord sig, ADD, UPDATE, DELETE
    Software = 2,      // Software Version, Char count, status
    DbNotes = 3,       // DB Notes
    Certification = 4, // Certification Use, Reason for deletion, No term active
    Operations = 5,    // OPs use, et al
}

impl TableRole {
    pub const ALL: [TableRole; 6] = [
        TableRole::Request,
        TableRole::Signatures,
        TableRole::Software,
        TableRole::DbNotes,
        TableRole::Certification,
        TableRole::Operations,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            TableRole::Request => "request info",
            TableRole::Signatures => "signatures",
            TableRole::Software => "software version/status",
            TableRole::DbNotes => "DB notes",
            TableRole::Certification => "certification",
            TableRole::Operations => "operational use",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLocation {
    pub table: TableRole,
    pub row: usize,
    pub columns: Range<usize>,
}

/// Named fields read from the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SoftwareVersion,
    Status,
    RequestBy,
    LoadBefore,
    ProjectId,
    Reason,
    Confirm,
}

impl Field {
    /// Report order.
    pub const ALL: [Field; 7] = [
        Field::SoftwareVersion,
        Field::RequestBy,
        Field::LoadBefore,
        Field::ProjectId,
        Field::Status,
        Field::Reason,
        Field::Confirm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::SoftwareVersion => "Software Version",
            Field::Status => "Status",
            Field::RequestBy => "Request By",
            Field::LoadBefore => "Load Before",
            Field::ProjectId => "Project ID",
            Field::Reason => "Reason",
            Field::Confirm => "Confirmation",
        }
    }

    pub fn location(self) -> FieldLocation {
        let (table, row, columns) = match self {
            Field::SoftwareVersion => (TableRole::Software, 0, 2..18),
            Field::Status => (TableRole::Software, 0, 21..23),
            Field::RequestBy => (TableRole::Request, 0, 1..2),
            Field::LoadBefore => (TableRole::Request, 0, 3..4),
            Field::ProjectId => (TableRole::Request, 0, 5..6),
            Field::Reason => (TableRole::Certification, 1, 1..2),
            Field::Confirm => (TableRole::Certification, 2, 2..3),
        };
        FieldLocation { table, row, columns }
    }

    /// Reads this field from the table grids.
    pub fn extract(self, tables: &[TableGrid]) -> Result<String, ExtractError> {
        let loc = self.location();
        extract_field(tables, loc.table.index(), loc.row, loc.columns.start, loc.columns.end)
    }
}

// --- Field accessors ---

pub fn software_version(tables: &[TableGrid]) -> Result<String, ExtractError> {
    Field::SoftwareVersion.extract(tables)
}

pub fn status(tables: &[TableGrid]) -> Result<String, ExtractError> {
    Field::Status.extract(tables)
}

pub fn request_by(tables: &[TableGrid]) -> Result<String, ExtractError> {
    Field::RequestBy.extract(tables)
}

pub fn load_before(tables: &[TableGrid]) -> Result<String, ExtractError> {
    Field::LoadBefore.extract(tables)
}

pub fn project_id(tables: &[TableGrid]) -> Result<String, ExtractError> {
    Field::ProjectId.extract(tables)
}

pub fn reason(tables: &[TableGrid]) -> Result<String, ExtractError> {
    Field::Reason.extract(tables)
}

pub fn confirm(tables: &[TableGrid]) -> Result<String, ExtractError> {
    Field::Confirm.extract(tables)
}

/// All named fields of one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeRequestForm {
    pub software_version: String,
    pub status: String,
    pub request_by: String,
    pub load_before: String,
    pub project_id: String,
    pub reason: String,
    pub confirm: String,
}

impl ChangeRequestForm {
    pub fn from_tables(tables: &[TableGrid]) -> Result<Self, ExtractError> {
        Ok(Self {
            software_version: software_version(tables)?,
            status: status(tables)?,
            request_by: request_by(tables)?,
            load_before: load_before(tables)?,
            project_id: project_id(tables)?,
            reason: reason(tables)?,
            confirm: confirm(tables)?,
        })
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SoftwareVersion => &self.software_version,
            Field::Status => &self.status,
            Field::RequestBy => &self.request_by,
            Field::LoadBefore => &self.load_before,
            Field::ProjectId => &self.project_id,
            Field::Reason => &self.reason,
            Field::Confirm => &self.confirm,
        }
    }
}

/// Checks that every table and row the named fields address exists.
pub fn validate_layout(tables: &[TableGrid]) -> Result<(), ExtractError> {
    if tables.len() < TableRole::ALL.len() {
        let missing = &TableRole::ALL[tables.len()..];
        return Err(ExtractError::SchemaMismatch(format!(
            "expected {} tables, found {} (missing: {})",
            TableRole::ALL.len(),
            tables.len(),
            missing.iter().map(|r| r.name()).collect::<Vec<_>>().join(", ")
        )));
    }

    for field in Field::ALL {
        let loc = field.location();
        let table = &tables[loc.table.index()];
        if loc.row >= table.row_count() {
            return Err(ExtractError::SchemaMismatch(format!(
                "{} expects row {} in the {} table, which has {} rows",
                field.label(),
                loc.row,
                loc.table.name(),
                table.row_count()
            )));
        }
        if loc.columns.end > table.column_count() {
            tracing::warn!(
                "{} reads columns {}..{} but the {} table has {} columns",
                field.label(),
                loc.columns.start,
                loc.columns.end,
                loc.table.name(),
                table.column_count()
            );
        }
    }

    tracing::debug!("Document layout matches the form template");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::fixture::{change_request_tables, FormValues};

    fn form_grids(version: &str) -> Vec<TableGrid> {
        let values = FormValues { software_version: version.to_string(), ..FormValues::default() };
        change_request_tables(&values)
            .into_iter()
            .map(TableGrid::from_rows)
            .collect()
    }

    #[test]
    fn reads_every_named_field() {
        let form = ChangeRequestForm::from_tables(&form_grids("S92031MODPMK2102")).unwrap();

        assert_eq!(form.software_version, "S92031MODPMK2102");
        assert_eq!(form.status, "00");
        assert_eq!(form.request_by, "J. Smith");
        assert_eq!(form.load_before, "31-12-2099");
        assert_eq!(form.project_id, "PRJ-0042");
        assert_eq!(form.reason, "SVT has passed Sunset and has no active users ");
        assert_eq!(form.confirm, "Yes");
    }

    #[test]
    fn version_from_saved_form_matches_its_file_name() {
        use crate::checks::{expected_software_version, DEFAULT_VERSION_PREFIX};
        use crate::docx::fixture::write_form;
        use crate::extractors::tables_to_grids;

        let dir = tempfile::tempdir().unwrap();
        let path = write_form(dir.path(), &FormValues::default());

        let document = crate::docx::load(&path).unwrap();
        let grids = tables_to_grids(&document);

        assert_eq!(grids.len(), 6);
        assert_eq!(
            software_version(&grids).unwrap(),
            expected_software_version(&path, DEFAULT_VERSION_PREFIX).unwrap()
        );
        // Grids are rebuilt on every call and stay identical
        assert_eq!(tables_to_grids(&document), grids);
    }

    #[test]
    fn short_version_leaves_trailing_cells_blank() {
        let grids = form_grids("ABC");
        assert_eq!(software_version(&grids).unwrap(), "ABC");
    }

    #[test]
    fn get_matches_accessors() {
        let grids = form_grids("S92031MODPMK2102");
        let form = ChangeRequestForm::from_tables(&grids).unwrap();
        for field in Field::ALL {
            assert_eq!(form.get(field), field.extract(&grids).unwrap());
        }
    }

    #[test]
    fn layout_accepts_template() {
        assert!(validate_layout(&form_grids("X")).is_ok());
    }

    #[test]
    fn layout_reports_missing_tables() {
        let mut grids = form_grids("X");
        grids.truncate(4);
        let err = validate_layout(&grids).unwrap_err();

        match err {
            ExtractError::SchemaMismatch(msg) => {
                assert!(msg.contains("found 4"), "{msg}");
                assert!(msg.contains("certification"), "{msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            reason(&grids),
            Err(ExtractError::TableOutOfRange { index: 4, count: 4 })
        ));
    }

    #[test]
    fn layout_reports_missing_rows() {
        let mut grids = form_grids("X");
        grids[TableRole::Certification.index()] =
            TableGrid::from_rows(vec![vec!["Certification Use".into(), "No".into()]]);

        assert!(matches!(validate_layout(&grids), Err(ExtractError::SchemaMismatch(_))));
    }
}
