// src/checks/mod.rs
//! Sanity checks run against the fields of one change-request form.
//!
//! Each check is independent: a failure is recorded and the remaining checks
//! still run.

pub mod dates;

use crate::extractors::ChangeRequestForm;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

// --- Expected Values ---
pub const DEFAULT_VERSION_PREFIX: &str = "DELETE - ";
pub const PLACEHOLDER_VERSION: &str = "Incorrect Software";
pub const EXPECTED_REASON: &str = "SVT has passed Sunset and has no active users ";
pub const EXPECTED_CONFIRMATION: &str = "Yes";
pub const EXPECTED_STATUS: &str = "00";

/// Inputs the checks need besides the form itself.
#[derive(Debug, Clone)]
pub struct CheckContext<'a> {
    pub document_path: &'a Path,
    pub version_prefix: &'a str,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail { reason: String },
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    fn fail(reason: impl Into<String>) -> Self {
        Outcome::Fail { reason: reason.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    pub results: Vec<CheckResult>,
}

impl VerificationReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.name == name)
    }
}

type CheckFn = fn(&ChangeRequestForm, &CheckContext) -> Outcome;

const CHECKS: &[(&str, &str, CheckFn)] = &[
    (
        "software_version_matches_filename",
        "Software version equals the version in the file name",
        check_version_matches_filename,
    ),
    (
        "software_version_is_not_placeholder",
        "Software version is not the placeholder value",
        check_version_not_placeholder,
    ),
    ("request_by_not_empty", "Request By is filled in", check_request_by),
    ("load_before_not_expired", "Load Before date has not passed", check_load_before),
    ("project_id_not_empty", "Project ID is filled in", check_project_id),
    ("reason_for_deletion", "Reason for deletion is the sunset statement", check_reason),
    ("confirmation_is_yes", "No-term-active confirmation is Yes", check_confirmation),
    ("status_is_00", "Project status is 00", check_status),
];

/// Runs every check in order and collects the outcomes.
pub fn run_checks(form: &ChangeRequestForm, ctx: &CheckContext) -> VerificationReport {
    let results = CHECKS
        .iter()
        .map(|&(name, description, check)| {
            let outcome = check(form, ctx);
            match &outcome {
                Outcome::Pass => tracing::debug!("Check {} passed", name),
                Outcome::Fail { reason } => tracing::warn!("Check {} failed: {}", name, reason),
            }
            CheckResult { name, description, outcome }
        })
        .collect();

    VerificationReport { results }
}

/// The software version encoded in the document's file name: the stem with
/// the form prefix removed.
pub fn expected_software_version(path: &Path, prefix: &str) -> Result<String, String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("file name of {} is not valid text", path.display()))?;

    stem.strip_prefix(prefix)
        .map(str::to_string)
        .ok_or_else(|| format!("file name {:?} does not start with {:?}", stem, prefix))
}

// --- Predicates ---

fn equals(actual: &str, expected: &str) -> Outcome {
    if actual == expected {
        Outcome::Pass
    } else {
        Outcome::fail(format!("expected {:?}, found {:?}", expected, actual))
    }
}

fn not_blank(value: &str) -> Outcome {
    if value.trim().is_empty() {
        Outcome::fail("value is empty")
    } else {
        Outcome::Pass
    }
}

fn check_version_matches_filename(form: &ChangeRequestForm, ctx: &CheckContext) -> Outcome {
    match expected_software_version(ctx.document_path, ctx.version_prefix) {
        Ok(expected) => equals(&form.software_version, &expected),
        Err(reason) => Outcome::fail(reason),
    }
}

fn check_version_not_placeholder(form: &ChangeRequestForm, _ctx: &CheckContext) -> Outcome {
    if form.software_version == PLACEHOLDER_VERSION {
        Outcome::fail(format!("software version is {:?}", PLACEHOLDER_VERSION))
    } else {
        Outcome::Pass
    }
}

fn check_request_by(form: &ChangeRequestForm, _ctx: &CheckContext) -> Outcome {
    not_blank(&form.request_by)
}

fn check_load_before(form: &ChangeRequestForm, ctx: &CheckContext) -> Outcome {
    match dates::parse_form_date(&form.load_before) {
        Some(date) if date >= ctx.today => Outcome::Pass,
        Some(date) => Outcome::fail(format!("load-before date {} is earlier than {}", date, ctx.today)),
        None => Outcome::fail(format!("{:?} is not a recognised date", form.load_before)),
    }
}

fn check_project_id(form: &ChangeRequestForm, _ctx: &CheckContext) -> Outcome {
    not_blank(&form.project_id)
}

fn check_reason(form: &ChangeRequestForm, _ctx: &CheckContext) -> Outcome {
    equals(&form.reason, EXPECTED_REASON)
}

fn check_confirmation(form: &ChangeRequestForm, _ctx: &CheckContext) -> Outcome {
    equals(&form.confirm, EXPECTED_CONFIRMATION)
}

fn check_status(form: &ChangeRequestForm, _ctx: &CheckContext) -> Outcome {
    equals(&form.status, EXPECTED_STATUS)
}
