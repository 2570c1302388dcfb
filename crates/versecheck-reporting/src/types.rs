use serde::Serialize;
use versecheck_corpus::{CheckResult, CorpusIndex, Edition, TokenEntry};

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Text,
}

impl ExportFormat {
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Json, ExportFormat::Markdown, ExportFormat::Text]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
            Self::Text => "Plain Text",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Text => "txt",
        }
    }

    /// Key accepted by [`FromStr`](std::str::FromStr).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Text => "text",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = crate::ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(crate::ReportError::UnknownFormat(s.to_string())),
        }
    }
}

/// How much provenance to attach to each known word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// `None` attaches no passages; `Some(n)` the first `n` in corpus order.
    pub passages_per_word: Option<usize>,
}

/// Serializable view of a [`CheckResult`].
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub edition: &'static str,
    pub edition_name: &'static str,
    pub text: String,
    pub coverage: f64,
    pub distinct_words: usize,
    pub known: Vec<KnownWord>,
    pub unknown: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KnownWord {
    pub word: String,
    pub occurrences: u64,
    pub passage_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub passages: Vec<PassageExcerpt>,
}

/// One passage a known word occurs in.
#[derive(Debug, Clone, Serialize)]
pub struct PassageExcerpt {
    pub reference: String,
    pub text: String,
}

impl CheckReport {
    /// Build the report, resolving passage text through `index`.
    pub fn new(result: &CheckResult<'_>, index: &CorpusIndex, options: ReportOptions) -> Self {
        let known = result
            .matched
            .iter()
            .map(|entry| KnownWord::new(entry, index, options))
            .collect();

        Self {
            edition: result.edition.code(),
            edition_name: result.edition.display_name(),
            text: result.text.to_string(),
            coverage: result.coverage,
            distinct_words: result.distinct_words(),
            known,
            unknown: result.unmatched.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl KnownWord {
    fn new(entry: &TokenEntry, index: &CorpusIndex, options: ReportOptions) -> Self {
        let passages = match options.passages_per_word {
            None => Vec::new(),
            Some(limit) => entry
                .passages()
                .into_iter()
                .filter_map(|r| index.passage(r))
                .take(limit)
                .map(|p| PassageExcerpt {
                    reference: p.reference.to_string(),
                    text: p.text.clone(),
                })
                .collect(),
        };

        Self {
            word: entry.token().to_string(),
            occurrences: entry.count(),
            passage_count: entry.passage_count(),
            passages,
        }
    }
}

/// Serializable vocabulary listing for one edition.
#[derive(Debug, Clone, Serialize)]
pub struct FrequencyReport {
    pub edition: &'static str,
    pub edition_name: &'static str,
    pub total_words: usize,
    pub total_occurrences: u64,
    pub entries: Vec<FrequencyEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub occurrences: u64,
    pub passage_count: usize,
}

impl FrequencyReport {
    pub fn new(index: &CorpusIndex, entries: &[&TokenEntry]) -> Self {
        let edition: Edition = index.edition();
        Self {
            edition: edition.code(),
            edition_name: edition.display_name(),
            total_words: index.len(),
            total_occurrences: index.total_occurrences(),
            entries: entries
                .iter()
                .map(|e| FrequencyEntry {
                    word: e.token().to_string(),
                    occurrences: e.count(),
                    passage_count: e.passage_count(),
                })
                .collect(),
        }
    }
}
