//! Filter mode command handler.
//!
//! Scores a query against a single label and reports a binary match verdict
//! at the configured threshold. The exit code carries the verdict, so this
//! slots into shell pipelines.

use anyhow::{bail, Result};
use serde::Serialize;

use super::{build_scorer, ensure_valid, OutputFormat};
use crate::config::SearchConfig;

/// Result of a single filter check.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CheckReport {
    pub query: String,
    pub label: String,
    pub strategy: String,
    pub score: f64,
    pub threshold: u8,
    pub matched: bool,
}

/// Run the check command. Exits with code 1 when the label does not match.
pub fn run_check(
    query: &str,
    label: &str,
    config: &SearchConfig,
    format: OutputFormat,
) -> Result<()> {
    if !config.filter_enabled {
        bail!("filter mode is disabled in this configuration");
    }
    ensure_valid(config)?;

    // Filter context: raw label tokens count as variants too, so a query
    // naming any word of the label can clear the threshold.
    let scorer = build_scorer(config, true)?;

    let score = scorer.score(query, label);
    tracing::debug!(
        "Scored {:?} against {:?} with {}: {:.2}",
        query,
        label,
        config.strategy,
        score
    );
    let report = CheckReport {
        query: query.to_string(),
        label: label.to_string(),
        strategy: config.strategy.clone(),
        score,
        threshold: config.filter_threshold,
        matched: score >= f64::from(config.filter_threshold),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", format_report(&report)),
    }

    if !report.matched {
        std::process::exit(1);
    }

    Ok(())
}

fn format_report(report: &CheckReport) -> String {
    format!(
        "query:     {}\n\
         label:     {}\n\
         strategy:  {}\n\
         score:     {:.2}\n\
         threshold: {}\n\
         verdict:   {}\n",
        report.query,
        report.label,
        report.strategy,
        report.score,
        report.threshold,
        if report.matched { "match" } else { "no match" },
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_report_match() {
        let report = CheckReport {
            query: "rune scimmy".to_string(),
            label: "Rune Scimitar".to_string(),
            strategy: "bigram-cosine".to_string(),
            score: 100.0,
            threshold: 70,
            matched: true,
        };
        let text = format_report(&report);
        assert!(text.contains("score:     100.00"));
        assert!(text.contains("verdict:   match"));
    }

    #[test]
    fn test_format_report_no_match() {
        let report = CheckReport {
            query: "shark".to_string(),
            label: "Rune Scimitar".to_string(),
            strategy: "bigram-cosine".to_string(),
            score: 0.0,
            threshold: 70,
            matched: false,
        };
        assert!(format_report(&report).contains("verdict:   no match"));
    }

    #[test]
    fn test_report_serializes_verdict() {
        let report = CheckReport {
            query: "q".to_string(),
            label: "l".to_string(),
            strategy: "jaccard".to_string(),
            score: 50.0,
            threshold: 70,
            matched: false,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"matched\":false"));
        assert!(json.contains("\"threshold\":70"));
    }
}
