//! Report formatting and printing.
//!
//! Kept separate from the overlay itself so docloc can be used as a library
//! without any terminal output.

use std::io::{self, Write};

use colored::Colorize;

use super::{
    commands::{ApplySummary, CommandResult},
    exit_status::ExitStatus,
};
use crate::config::CONFIG_FILE_NAME;
use crate::overlay::{AppliedOverlay, OverlayReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a command result to stdout/stderr and pick the exit status.
pub fn print(result: &CommandResult, verbose: bool) -> ExitStatus {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> ExitStatus {
    match result {
        CommandResult::Apply(summary) => {
            print_apply(summary, verbose, out, err);
            ExitStatus::Success
        }
        CommandResult::Init { created: true } => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
            ExitStatus::Success
        }
        CommandResult::Init { created: false } => {
            let _ = writeln!(err, "Error: {} already exists", CONFIG_FILE_NAME);
            ExitStatus::Failure
        }
    }
}

fn print_apply<O: Write, E: Write>(
    summary: &ApplySummary,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    let report = &summary.report;

    if !report.enabled {
        let _ = writeln!(
            err,
            "{} no localization root configured (use {} or \"localizeRoot\" in {})",
            "note:".bold(),
            "--localize".cyan(),
            CONFIG_FILE_NAME
        );
        if let Some(output) = &summary.output {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                "Wrote model without localization".green()
            );
            let _ = writeln!(out, "  {} {}", "-->".blue(), output.display());
        }
        return;
    }

    if verbose {
        for applied in &report.applied {
            print_applied(applied, out);
        }
        for document in report.documents.iter().filter(|d| !d.found) {
            let _ = writeln!(
                out,
                "  {} {}",
                "missing:".dimmed(),
                document.path.display()
            );
        }
    }

    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        summary_line(report).green()
    );
    if let Some(output) = &summary.output {
        let _ = writeln!(out, "  {} {}", "-->".blue(), output.display());
    }

    print_warnings(report, verbose, err);
}

fn summary_line(report: &OverlayReport) -> String {
    let fields = report.replaced_count();
    let reflections = report.applied.len();
    format!(
        "Localized {} comment {} on {} {} ({} of {} localization {} found)",
        fields,
        plural(fields, "field", "fields"),
        reflections,
        plural(reflections, "reflection", "reflections"),
        report.documents_found(),
        report.documents.len(),
        plural(report.documents.len(), "file", "files"),
    )
}

fn print_applied<O: Write>(applied: &AppliedOverlay, out: &mut O) {
    let mut fields = Vec::new();
    if applied.fields.short_text {
        fields.push("shortText");
    }
    if applied.fields.text {
        fields.push("text");
    }
    let _ = writeln!(
        out,
        "  {} {} {}: {}",
        "localized:".cyan(),
        applied.kind,
        applied.name.bold(),
        fields.join(", ")
    );
}

fn print_warnings<E: Write>(report: &OverlayReport, verbose: bool, err: &mut E) {
    if report.warnings.is_empty() {
        return;
    }
    if verbose {
        for warning in &report.warnings {
            let _ = writeln!(
                err,
                "{} could not read {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            err,
            "{} {} localization file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            report.warnings.len(),
            "-v".cyan()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
