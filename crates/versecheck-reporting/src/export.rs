use std::fmt::{self, Write};

use versecheck_text::{highlight_token, normalize_word};

use crate::types::{CheckReport, ExportFormat, FrequencyReport, KnownWord};
use crate::ReportError;

/// Render a check report in the requested format.
pub fn export_check(report: &CheckReport, format: ExportFormat) -> Result<String, ReportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ExportFormat::Markdown => Ok(check_markdown(report)?),
        ExportFormat::Text => Ok(check_text(report)?),
    }
}

/// Render a frequency listing in the requested format.
pub fn export_frequency(
    report: &FrequencyReport,
    format: ExportFormat,
) -> Result<String, ReportError> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ExportFormat::Markdown => Ok(frequency_markdown(report)?),
        ExportFormat::Text => Ok(frequency_text(report)?),
    }
}

/// `"word" appears in N passage(s)`, shared by every human-readable format.
pub fn describe_known(word: &KnownWord) -> String {
    let noun = if word.passage_count == 1 {
        "passage"
    } else {
        "passages"
    };
    format!("\"{}\" appears in {} {}", word.word, word.passage_count, noun)
}

/// Coverage as shown to people: at most two decimals, no trailing zeros.
pub fn format_coverage(coverage: f64) -> String {
    let s = format!("{coverage:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}%")
}

fn check_text(report: &CheckReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Known words ({}):", report.edition_name)?;
    if report.known.is_empty() {
        writeln!(out, "    (none)")?;
    }
    for word in &report.known {
        writeln!(out, "    {}", describe_known(word))?;
        for passage in &word.passages {
            writeln!(out, "        {}\t{}", passage.reference, passage.text)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Unknown words:")?;
    if report.unknown.is_empty() {
        writeln!(out, "    (none)")?;
    }
    for word in &report.unknown {
        writeln!(out, "    {word}")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Coverage: {} of {} distinct words",
        format_coverage(report.coverage),
        report.distinct_words
    )?;
    Ok(out)
}

fn check_markdown(report: &CheckReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# Word check: {}", report.edition_name)?;
    writeln!(out)?;
    writeln!(
        out,
        "**Coverage:** {} of {} distinct words",
        format_coverage(report.coverage),
        report.distinct_words
    )?;
    writeln!(out)?;

    writeln!(out, "## Known words ({})", report.known.len())?;
    writeln!(out)?;
    for word in &report.known {
        writeln!(out, "- {}", describe_known(word))?;
        let token = normalize_word(&word.word);
        for passage in &word.passages {
            let text = match &token {
                Some(token) => highlight_token(&passage.text, token, |w| format!("**{w}**")),
                None => passage.text.clone(),
            };
            writeln!(out, "  - *{}* {}", passage.reference, text)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "## Unknown words ({})", report.unknown.len())?;
    writeln!(out)?;
    for word in &report.unknown {
        writeln!(out, "- {word}")?;
    }
    Ok(out)
}

fn frequency_text(report: &FrequencyReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{}: {} distinct words, {} occurrences",
        report.edition_name, report.total_words, report.total_occurrences
    )?;
    for entry in &report.entries {
        writeln!(
            out,
            "    {:<20} {:>8} {:>8}",
            entry.word, entry.occurrences, entry.passage_count
        )?;
    }
    Ok(out)
}

fn frequency_markdown(report: &FrequencyReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "# Vocabulary: {}", report.edition_name)?;
    writeln!(out)?;
    writeln!(
        out,
        "{} distinct words, {} occurrences",
        report.total_words, report.total_occurrences
    )?;
    writeln!(out)?;
    writeln!(out, "| Word | Occurrences | Passages |")?;
    writeln!(out, "|------|------------:|---------:|")?;
    for entry in &report.entries {
        writeln!(
            out,
            "| {} | {} | {} |",
            entry.word, entry.occurrences, entry.passage_count
        )?;
    }
    Ok(out)
}
