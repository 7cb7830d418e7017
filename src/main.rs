// src/main.rs
mod checks;
mod docx;
mod extractors;
mod report;
mod utils;

use checks::{CheckContext, DEFAULT_VERSION_PREFIX};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use extractors::ChangeRequestForm;
use std::io::{self, Write};
use std::path::PathBuf;
use utils::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Command Line Interface for the change-request form checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the change-request form (.docx)
    document: PathBuf,

    /// File name prefix that precedes the software version
    #[arg(long, default_value = DEFAULT_VERSION_PREFIX)]
    prefix: String,

    /// Date to check the load-before field against, as YYYY-MM-DD (default: today)
    #[arg(long)]
    today: Option<String>,

    /// Output format for fields and check results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print every table grid with cell coordinates before the fields
    #[arg(short, long)]
    dump_tables: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    let today = match &args.today {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
            AppError::Config(format!("Invalid --today value '{}': {}", value, e))
        })?,
        None => chrono::Local::now().date_naive(),
    };
    tracing::debug!("Checking load-before dates against {}", today);

    // 3. Load the document and flatten its tables once
    let document = docx::load(&args.document)?;
    let tables = extractors::tables_to_grids(&document);

    if args.dump_tables {
        match args.format {
            OutputFormat::Text => utils::table_debug::dump_tables(&mut io::stdout().lock(), &tables)?,
            // Keep stdout valid JSON
            OutputFormat::Json => utils::table_debug::dump_tables(&mut io::stderr().lock(), &tables)?,
        }
    }

    // 4. Extract the named fields
    extractors::validate_layout(&tables)?;
    let form = ChangeRequestForm::from_tables(&tables)?;
    tracing::info!("Extracted fields for software version {:?}", form.software_version);

    // 5. Run the checks
    let ctx = CheckContext {
        document_path: &args.document,
        version_prefix: &args.prefix,
        today,
    };
    let verification = checks::run_checks(&form, &ctx);

    // 6. Report
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => {
            report::write_fields(&mut out, &form)?;
            report::write_checks(&mut out, &verification)?;
        }
        OutputFormat::Json => {
            report::write_json(&mut out, &args.document, today, &form, &verification)?;
        }
    }
    out.flush()?;

    tracing::info!(
        "Processing finished. Passed: {}, Failed: {}",
        verification.passed(),
        verification.failed()
    );

    if !verification.all_passed() {
        return Err(AppError::ChecksFailed(verification.failed()));
    }

    Ok(())
}
