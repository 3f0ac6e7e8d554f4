//! Output formatting - plaintext and JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::check::Finding;
use crate::scan::ListingSource;

/// Complete result of one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Definitions module, relative to the root
    pub definitions_path: String,
    pub definition_count: usize,
    /// Upper-cased content extension, e.g. `MDX`
    pub content_kind: String,
    pub files_scanned: usize,
    pub files_using_tooltips: usize,
    pub listing_source: ListingSource,
    /// Specifier shown in the remediation hint
    pub import_specifier: String,
    pub warnings: Vec<Finding>,
    pub errors: Vec<Finding>,
}

impl CheckReport {
    /// No error findings. Warnings alone still count as clean.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// `0` when clean, `1` when any error finding exists.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }
}

/// Writes the human-readable report.
pub fn write_plain<W: Write>(report: &CheckReport, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Found {} tooltip definitions in {}",
        report.definition_count, report.definitions_path
    )?;
    writeln!(
        out,
        "Scanning {} {} files...\n",
        report.files_scanned, report.content_kind
    )?;
    writeln!(out, "Files using tooltips: {}\n", report.files_using_tooltips)?;

    if !report.warnings.is_empty() {
        writeln!(out, "⚠️  Warnings (unused imports):")?;
        for warning in &report.warnings {
            writeln!(out, "   {}: {}", warning.file, warning.message)?;
        }
        writeln!(out)?;
    }

    if !report.errors.is_empty() {
        writeln!(out, "❌ Errors:")?;
        for error in &report.errors {
            writeln!(out, "   {}: {}", error.file, error.message)?;
        }
        writeln!(out, "\n{} error(s) found.", report.errors.len())?;
        writeln!(out, "\nTo fix missing imports, add the tooltip to the import statement:")?;
        writeln!(
            out,
            "  import {{ ExistingTooltip, MissingTooltip }} from \"{}\";",
            report.import_specifier
        )?;
        return Ok(());
    }

    writeln!(out, "✅ All tooltips are properly imported!")
}

/// Renders the human-readable report to a string.
pub fn render_plain(report: &CheckReport) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_plain(report, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Prints the report in plain text format.
pub fn print_plain(report: &CheckReport) {
    print!("{}", render_plain(report));
}

/// Prints the report in JSON format.
///
/// Falls back to a minimal summary if serialization fails.
pub fn print_json(report: &CheckReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::warn!(error = %e, "JSON serialization failed");
            println!(
                "{{\"warnings\": {}, \"errors\": {}}}",
                report.warnings.len(),
                report.errors.len()
            );
        }
    }
}
