//! Formatters for check reports in different output modes
//!
//! This module provides a trait-based approach to rendering a check
//! report, supporting human-readable and JSON output.

use console::Style;

use crate::checks::{Diagnostic, Report, Severity};

/// Formatter trait for rendering a check report
///
/// This trait allows different display strategies (text, JSON) behind
/// the same interface.
pub trait ReportFormatter {
    fn format(&self, report: &Report) -> crate::error::Result<()>;
}

/// Human-readable formatter, diagnostics grouped by skill
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> crate::error::Result<()> {
        let mut current_skill: Option<&str> = None;

        for diag in &report.diagnostics {
            let skill = diag.skill.as_deref().unwrap_or("(corpus)");
            if current_skill != Some(skill) {
                if current_skill.is_some() {
                    println!();
                }
                println!("  {}", Style::new().bold().yellow().apply_to(skill));
                current_skill = Some(skill);
            }
            print_diagnostic(diag);
        }

        if !report.diagnostics.is_empty() {
            println!();
        }
        print_summary(report);
        Ok(())
    }
}

fn print_diagnostic(diag: &Diagnostic) {
    let severity = match diag.severity {
        Severity::Error => Style::new().bold().red().apply_to(diag.severity.label()),
        Severity::Warning => Style::new().bold().yellow().apply_to(diag.severity.label()),
    };

    let location = match diag.line {
        Some(line) => format!("{}:{}", diag.path, line),
        None => diag.path.clone(),
    };

    println!(
        "    {}: {}  {}",
        severity,
        diag.message,
        Style::new().dim().apply_to(format!("[{}] {}", diag.code, location))
    );
}

fn print_summary(report: &Report) {
    let scope = format!(
        "Checked {} skill(s), {} resource doc(s)",
        report.skills_checked, report.resources_checked
    );

    if report.is_clean() {
        println!(
            "{} {}",
            Style::new().bold().green().apply_to("OK"),
            format!("{}: no problems found", scope)
        );
        return;
    }

    let errors = report.error_count();
    let warnings = report.warning_count();
    let tally = Style::new().bold().apply_to(format!(
        "{} error(s), {} warning(s)",
        errors, warnings
    ));
    println!("{}: {}", scope, tally);
}

/// JSON formatter for programmatic output
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> crate::error::Result<()> {
        let output = serde_json::json!({
            "skills_checked": report.skills_checked,
            "resources_checked": report.resources_checked,
            "errors": report.error_count(),
            "warnings": report.warning_count(),
            "diagnostics": report.diagnostics,
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
