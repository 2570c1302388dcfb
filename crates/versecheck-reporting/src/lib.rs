//! Report rendering for versecheck results.
//!
//! Consumers (the CLI, or anything else holding a [`CheckResult`]) build a
//! [`CheckReport`] or [`FrequencyReport`] and export it as JSON, Markdown or
//! plain text.
//!
//! [`CheckResult`]: versecheck_corpus::CheckResult

pub mod export;
pub mod types;

pub use export::{describe_known, export_check, export_frequency, format_coverage};
pub use types::{
    CheckReport, ExportFormat, FrequencyEntry, FrequencyReport, KnownWord, PassageExcerpt,
    ReportOptions,
};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("report rendering failed: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("unknown export format '{0}' (expected json, markdown or text)")]
    UnknownFormat(String),
}
