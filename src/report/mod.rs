// src/report/mod.rs
use crate::checks::{Outcome, VerificationReport};
use crate::extractors::{ChangeRequestForm, Field};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// One printed field entry: a "Getting" banner and an indented value line.
pub fn field_line(label: &str, value: &str) -> String {
    format!("{}> Getting {}...\n \t{}: {}", "-".repeat(5), label, label, value)
}

/// Prints the extracted fields as key/value lines.
pub fn write_fields<W: Write>(out: &mut W, form: &ChangeRequestForm) -> io::Result<()> {
    writeln!(out, "Loading docx Attributes...\n")?;
    for field in Field::ALL {
        writeln!(out, "{}", field_line(field.label(), form.get(field)))?;
    }
    Ok(())
}

/// Prints one PASS/FAIL line per check and a summary.
pub fn write_checks<W: Write>(out: &mut W, report: &VerificationReport) -> io::Result<()> {
    writeln!(out, "\nChecking Document...")?;
    for result in &report.results {
        match &result.outcome {
            Outcome::Pass => writeln!(out, "PASS  {} ... {}", result.name, result.description)?,
            Outcome::Fail { reason } => {
                writeln!(out, "FAIL  {} ... {}: {}", result.name, result.description, reason)?
            }
        }
    }
    writeln!(
        out,
        "\nRan {} checks: {} passed, {} failed",
        report.results.len(),
        report.passed(),
        report.failed()
    )?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    document: String,
    checked_at: String,
    today: NaiveDate,
    fields: &'a ChangeRequestForm,
    checks: &'a VerificationReport,
    passed: usize,
    failed: usize,
}

/// Writes the whole run as a single JSON object.
pub fn write_json<W: Write>(
    out: &mut W,
    document: &Path,
    today: NaiveDate,
    form: &ChangeRequestForm,
    report: &VerificationReport,
) -> Result<(), serde_json::Error> {
    let json = JsonReport {
        document: document.display().to_string(),
        checked_at: chrono::Utc::now().to_rfc3339(),
        today,
        fields: form,
        checks: report,
        passed: report.passed(),
        failed: report.failed(),
    };
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out).map_err(serde_json::Error::io)?;
    Ok(())
}
