use std::io::Write;

use owo_colors::{OwoColorize, Style};
use versecheck_corpus::{CorpusLibrary, Edition};
use versecheck_reporting::{CheckReport, FrequencyReport, describe_known, format_coverage};
use versecheck_text::{highlight_token, normalize_word};

/// Whether console output is colored.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(self) -> bool {
        self.0
    }

    fn paint(self, text: &str, style: Style) -> String {
        if self.0 {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn print_check(w: &mut dyn Write, report: &CheckReport, color: ColorMode) -> std::io::Result<()> {
    let heading = Style::new().bold();

    writeln!(
        w,
        "{}",
        color.paint(&format!("Known words ({}):", report.edition_name), heading)
    )?;
    if report.known.is_empty() {
        writeln!(w, "    (none)")?;
    }
    for word in &report.known {
        writeln!(w, "    {}", color.paint(&describe_known(word), Style::new().green()))?;

        let token = normalize_word(&word.word);
        for passage in &word.passages {
            let text = match &token {
                Some(token) if color.enabled() => highlight_token(&passage.text, token, |m| {
                    m.style(Style::new().yellow().bold()).to_string()
                }),
                _ => passage.text.clone(),
            };
            writeln!(
                w,
                "        {}  {}",
                color.paint(&passage.reference, Style::new().dimmed().italic()),
                text
            )?;
        }
    }

    writeln!(w)?;
    writeln!(w, "{}", color.paint("Unknown words:", heading))?;
    if report.unknown.is_empty() {
        writeln!(w, "    (none)")?;
    }
    for word in &report.unknown {
        writeln!(w, "    {}", color.paint(word, Style::new().red()))?;
    }

    writeln!(w)?;
    let coverage_style = if report.unknown.is_empty() {
        Style::new().green().bold()
    } else if report.known.is_empty() {
        Style::new().red().bold()
    } else {
        Style::new().yellow().bold()
    };
    writeln!(
        w,
        "Coverage: {} of {} distinct words",
        color.paint(&format_coverage(report.coverage), coverage_style),
        report.distinct_words
    )?;
    Ok(())
}

pub fn print_frequency(
    w: &mut dyn Write,
    report: &FrequencyReport,
    color: ColorMode,
) -> std::io::Result<()> {
    writeln!(
        w,
        "{}",
        color.paint(
            &format!(
                "{}: {} distinct words, {} occurrences",
                report.edition_name, report.total_words, report.total_occurrences
            ),
            Style::new().bold(),
        )
    )?;
    writeln!(
        w,
        "    {}",
        color.paint(
            &format!("{:<20} {:>8} {:>8}", "word", "count", "passages"),
            Style::new().dimmed(),
        )
    )?;
    for entry in &report.entries {
        writeln!(
            w,
            "    {:<20} {:>8} {:>8}",
            entry.word, entry.occurrences, entry.passage_count
        )?;
    }
    Ok(())
}

pub fn print_editions(
    w: &mut dyn Write,
    library: &CorpusLibrary,
    selected: Edition,
    color: ColorMode,
) -> std::io::Result<()> {
    let available = library.available();
    for &edition in Edition::all() {
        let marker = if edition == selected { "*" } else { " " };
        let status = if available.contains(&edition) {
            color.paint("available", Style::new().green())
        } else {
            color.paint("missing", Style::new().red())
        };
        writeln!(
            w,
            "{} {:<4} {:<26} {} ({})",
            marker,
            edition.code(),
            edition.display_name(),
            library.path_for(edition).display(),
            status
        )?;
    }
    Ok(())
}
