//! Reporting for strip results.
//!
//! The terminal format prints the classic three-line count summary;
//! the JSON format serializes the same numbers for tooling.

use crate::strip::StripOutcome;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output format for the run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable terminal output
    #[default]
    Terminal,
    /// JSON machine-readable format
    Json,
}

/// The numbers a strip run reports.
#[derive(Debug, Clone, Serialize)]
pub struct StripSummary {
    /// File the run targeted.
    pub path: PathBuf,
    /// Line count before the pass.
    pub original_lines: usize,
    /// Line count after the pass.
    pub clean_lines: usize,
    /// Lines dropped by the pass.
    pub removed_lines: usize,
    /// Whether the file was left untouched.
    pub dry_run: bool,
}

impl StripSummary {
    pub fn new(path: &Path, outcome: &StripOutcome, dry_run: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            original_lines: outcome.original_lines,
            clean_lines: outcome.kept_lines,
            removed_lines: outcome.removed_lines(),
            dry_run,
        }
    }
}

/// Reporter for outputting the run summary
pub struct Reporter {
    format: ReportFormat,
    output_path: Option<PathBuf>,
}

impl Reporter {
    pub fn new(format: ReportFormat, output_path: Option<PathBuf>) -> Self {
        Self {
            format,
            output_path,
        }
    }

    /// Report the summary in the configured format.
    pub fn report(&self, summary: &StripSummary) -> Result<()> {
        match self.format {
            ReportFormat::Terminal => {
                self.print_terminal(summary);
                Ok(())
            }
            ReportFormat::Json => self.write_json(summary),
        }
    }

    fn print_terminal(&self, summary: &StripSummary) {
        println!();
        if summary.dry_run {
            println!(
                "{}",
                "🔍 Dry run complete - no changes written".yellow().bold()
            );
        } else {
            println!("{}", "✅ Dead code removal complete!".green().bold());
        }
        self.print_count("📊 Original lines:", summary.original_lines);
        self.print_count("📊 Clean lines:", summary.clean_lines);
        self.print_count("📊 Lines removed:", summary.removed_lines);
    }

    fn print_count(&self, label: &str, count: usize) {
        println!("{} {}", label.dimmed(), count.to_string().cyan().bold());
    }

    fn write_json(&self, summary: &StripSummary) -> Result<()> {
        let json = serde_json::to_string_pretty(summary).into_diagnostic()?;
        match &self.output_path {
            Some(path) => std::fs::write(path, json).into_diagnostic()?,
            None => println!("{json}"),
        }
        Ok(())
    }
}
