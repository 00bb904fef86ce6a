//! Renders scores for the terminal or as JSON.

use std::fmt::{self, Write};

use crate::config::OutputFormat;
use crate::domain::models::{PageSeoReport, SeoScore};
use crate::error::Result;

pub fn render_score(score: &SeoScore, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(score)?),
        OutputFormat::Text => {
            let mut out = String::new();
            score_text(&mut out, score).map_err(anyhow::Error::from)?;
            Ok(out)
        }
    }
}

pub fn render_page(report: &PageSeoReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = String::new();
            page_text(&mut out, report).map_err(anyhow::Error::from)?;
            Ok(out)
        }
    }
}

fn score_text(out: &mut impl Write, score: &SeoScore) -> fmt::Result {
    writeln!(
        out,
        "SEO score: {}% ({}/{} checks passed)",
        score.total,
        score.passed_count(),
        score.checks.len()
    )?;
    for check in &score.checks {
        let mark = if check.pass { "ok" } else { "!!" };
        writeln!(
            out,
            "  [{}] {:<34} {:>10} {:>4}  {}",
            mark,
            check.label,
            check.value.to_string(),
            check.score,
            check.recommendation
        )?;
    }
    Ok(())
}

fn page_text(out: &mut impl Write, report: &PageSeoReport) -> fmt::Result {
    writeln!(out, "Overall SEO score: {}%", report.overall)?;
    let with_empty = report.configured_overall();
    if with_empty != report.overall {
        writeln!(out, "  ({}% counting configured sections that scored 0)", with_empty)?;
    }
    for section in &report.sections {
        if section.configured {
            writeln!(out, "  {:<24} {:>3}%", section.name, section.score.total)?;
        } else {
            writeln!(out, "  {:<24} not configured", section.name)?;
        }
    }
    if !report.issues.is_empty() {
        writeln!(
            out,
            "\nIssues ({} critical, {} warning):",
            report.critical_count(),
            report.warning_count()
        )?;
        for issue in &report.issues {
            writeln!(
                out,
                "  {:<8} {} / {}: {}",
                issue.severity.as_str(),
                issue.section,
                issue.check,
                issue.recommendation
            )?;
        }
    }
    Ok(())
}
