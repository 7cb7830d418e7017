// src/checks/dates.rs
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns for Date Tokens (Lazy Static) ---

// ISO order, e.g. 2026-05-12
static ISO_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").expect("Failed to compile ISO_DATE_RE")
});

// Day first with numeric month, e.g. 12-05-2026, 12/5/26, 12.05.2026
static NUMERIC_DMY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})[-/.](\d{1,2})[-/.](\d{4}|\d{2})\b")
        .expect("Failed to compile NUMERIC_DMY_RE")
});

// Day first with month name, e.g. 12 May 2026, 12-May-2026, 1st June 2026
static TEXT_MONTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?[\s\-]+([a-z]{3,9})[\s\-,]+(\d{4})\b")
        .expect("Failed to compile TEXT_MONTH_RE")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DateForm {
    Iso,
    NumericDmy,
    TextMonth,
}

/// Finds the first date in a form cell and parses it, day first.
///
/// Candidates from every pattern are tried in the order they appear in the
/// text; a token that looks like a date but is not a real one is skipped.
pub fn parse_form_date(text: &str) -> Option<NaiveDate> {
    let mut candidates: Vec<(usize, DateForm, regex::Captures)> = Vec::new();
    for (form, re) in [
        (DateForm::Iso, &*ISO_DATE_RE),
        (DateForm::NumericDmy, &*NUMERIC_DMY_RE),
        (DateForm::TextMonth, &*TEXT_MONTH_RE),
    ] {
        for caps in re.captures_iter(text) {
            let start = caps.get(0).map(|m| m.start()).unwrap_or(0);
            candidates.push((start, form, caps));
        }
    }
    candidates.sort_by_key(|(start, form, _)| (*start, *form));

    let date = candidates
        .iter()
        .find_map(|(_, form, caps)| date_from_captures(*form, caps));

    if date.is_none() {
        tracing::debug!("No date found in {:?}", text);
    }
    date
}

fn date_from_captures(form: DateForm, caps: &regex::Captures) -> Option<NaiveDate> {
    match form {
        DateForm::Iso => ymd(&caps[1], &caps[2], &caps[3]),
        DateForm::NumericDmy => {
            let year = if caps[3].len() == 2 {
                format!("20{}", &caps[3])
            } else {
                caps[3].to_string()
            };
            ymd(&year, &caps[2], &caps[1])
        }
        DateForm::TextMonth => {
            let month = month_from_name(&caps[2])?;
            ymd(&caps[3], &month.to_string(), &caps[1])
        }
    }
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn month_from_name(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}
