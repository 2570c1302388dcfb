use std::path::PathBuf;

use crate::passage::PassageError;

/// Errors raised while loading, building or querying a corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Read(#[from] std::io::Error),

    #[error("corpus header is truncated: expected 2 metadata lines, found {found}")]
    MissingHeader { found: usize },

    #[error("malformed passage on line {line}: {source}")]
    MalformedPassage {
        line: usize,
        #[source]
        source: PassageError,
    },

    #[error("query text contains no words")]
    EmptyQuery,

    #[error("unknown edition '{0}' (expected one of: {codes})", codes = crate::Edition::codes())]
    UnknownEdition(String),
}
