use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use versecheck_corpus::{CorpusError, CorpusIndex, CorpusLibrary, Edition};
use versecheck_reporting::{
    CheckReport, ExportFormat, FrequencyReport, ReportOptions, export_check, export_frequency,
};

mod config;
mod output;

use output::ColorMode;

/// Number of words listed by `words` when no selection is given.
const DEFAULT_TOP: usize = 50;

/// Scripture word checker - report which words of a text appear in a Bible edition
#[derive(Parser, Debug)]
#[command(name = "versecheck", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Edition to check against (erv, kjv)
    #[arg(long, global = true)]
    edition: Option<String>,

    /// Directory containing the <edition>.txt corpus files
    #[arg(long, global = true)]
    corpus_dir: Option<PathBuf>,

    /// Path to a config file (default: <config dir>/versecheck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to output file (disables color)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log corpus loading and checks to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check which words of a text appear in the corpus
    Check {
        /// Text to check (reads stdin when neither TEXT nor --file is given)
        text: Vec<String>,

        /// Read the text to check from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Show up to N passages for every known word
        #[arg(long)]
        passages: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,
    },
    /// List the corpus vocabulary by frequency
    Words {
        /// Most common N words
        #[arg(long, conflicts_with_all = ["least", "min", "max"])]
        top: Option<usize>,

        /// Least common N words
        #[arg(long, conflicts_with_all = ["min", "max"])]
        least: Option<usize>,

        /// Words occurring at least this many times
        #[arg(long, requires = "max")]
        min: Option<u64>,

        /// Words occurring at most this many times
        #[arg(long, requires = "min")]
        max: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
        format: OutputFormat,
    },
    /// List known editions and whether their corpus file is present
    Editions,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Console,
    Json,
    Markdown,
    Text,
}

impl Command {
    /// `editions` only has console output.
    fn format(&self) -> OutputFormat {
        match self {
            Self::Check { format, .. } | Self::Words { format, .. } => *format,
            Self::Editions => OutputFormat::Console,
        }
    }
}

impl OutputFormat {
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            Self::Console => None,
            Self::Json => Some(ExportFormat::Json),
            Self::Markdown => Some(ExportFormat::Markdown),
            Self::Text => Some(ExportFormat::Text),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.verbose);

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let file_config = match args.config {
        Some(ref path) => config::FileConfig::load(path)?,
        None => config::FileConfig::load_default()?,
    };
    let passages_flag = match &args.command {
        Command::Check { passages, .. } => *passages,
        _ => None,
    };
    let config = config::resolve(
        config::Overrides {
            corpus_dir: args.corpus_dir.clone(),
            edition: args.edition.clone(),
            passages_per_word: passages_flag,
        },
        |key| std::env::var(key).ok(),
        file_config,
    )?;
    tracing::debug!(?config, "resolved configuration");

    let library = CorpusLibrary::new(&config.corpus_dir);

    let format = args.command.format();
    let use_color = !args.no_color && args.output.is_none() && format == OutputFormat::Console;
    let color = ColorMode(use_color);

    let mut writer: Box<dyn Write> = if let Some(ref output_path) = args.output {
        Box::new(
            std::fs::File::create(output_path)
                .with_context(|| format!("Failed to create {}", output_path.display()))?,
        )
    } else {
        Box::new(std::io::stdout())
    };

    match args.command {
        Command::Editions => {
            output::print_editions(&mut writer, &library, config.edition, color)?;
        }
        Command::Check { text, file, .. } => {
            let input = read_input(text, file)?;
            let index = load_index(&library, config.edition)?;

            let result = match index.check(&input) {
                Err(CorpusError::EmptyQuery) => {
                    anyhow::bail!("Nothing to check: the input contains no words.")
                }
                other => other?,
            };
            let report = CheckReport::new(
                &result,
                &index,
                ReportOptions {
                    passages_per_word: config.passages_per_word,
                },
            );

            match format.export_format() {
                None => output::print_check(&mut writer, &report, color)?,
                Some(format) => writer.write_all(export_check(&report, format)?.as_bytes())?,
            }
        }
        Command::Words {
            top,
            least,
            min,
            max,
            ..
        } => {
            let index = load_index(&library, config.edition)?;
            let entries = match (least, min, max) {
                (Some(n), _, _) => index.least_common(n),
                (None, Some(min), Some(max)) => {
                    if min > max {
                        anyhow::bail!("--min ({min}) must not exceed --max ({max})");
                    }
                    index.with_count_between(min, max)
                }
                _ => index.most_common(Some(top.unwrap_or(DEFAULT_TOP))),
            };
            let report = FrequencyReport::new(&index, &entries);

            match format.export_format() {
                None => output::print_frequency(&mut writer, &report, color)?,
                Some(format) => {
                    writer.write_all(export_frequency(&report, format)?.as_bytes())?
                }
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Text from `--file`, the positional words, or stdin, in that order.
fn read_input(words: Vec<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read text from stdin")?;
    Ok(input)
}

fn load_index(library: &CorpusLibrary, edition: Edition) -> anyhow::Result<CorpusIndex> {
    let path = library.path_for(edition);
    if !path.exists() {
        anyhow::bail!(
            "Corpus file for the {} not found at {}. Use --corpus-dir or {} to point at the directory holding {}.",
            edition.display_name(),
            path.display(),
            config::CORPUS_DIR_VAR,
            edition.file_name()
        );
    }
    library
        .load(edition)
        .with_context(|| format!("Failed to load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_belongs_to_reporting_commands() {
        let args = Args::try_parse_from(["versecheck", "check", "--format", "json", "light"]).unwrap();
        assert_eq!(args.command.format(), OutputFormat::Json);

        let args = Args::try_parse_from(["versecheck", "words", "--top", "5", "--format", "markdown"])
            .unwrap();
        assert_eq!(args.command.format(), OutputFormat::Markdown);

        let args = Args::try_parse_from(["versecheck", "editions"]).unwrap();
        assert_eq!(args.command.format(), OutputFormat::Console);
    }

    #[test]
    fn test_editions_rejects_format() {
        assert!(Args::try_parse_from(["versecheck", "editions", "--format", "json"]).is_err());
    }

    #[test]
    fn test_global_options_follow_subcommand() {
        let args =
            Args::try_parse_from(["versecheck", "words", "--edition", "erv", "--no-color"]).unwrap();
        assert_eq!(args.edition.as_deref(), Some("erv"));
        assert!(args.no_color);
    }
}
