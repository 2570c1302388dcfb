use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{CorpusError, CorpusIndex, Edition};

/// A directory of corpus files, one `<code>.txt` per edition.
#[derive(Debug, Clone)]
pub struct CorpusLibrary {
    base_dir: PathBuf,
}

impl CorpusLibrary {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_for(&self, edition: Edition) -> PathBuf {
        self.base_dir.join(edition.file_name())
    }

    /// Read and index one edition.
    ///
    /// A leading UTF-8 byte order mark is ignored.
    pub fn load(&self, edition: Edition) -> Result<CorpusIndex, CorpusError> {
        let path = self.path_for(edition);
        let content = std::fs::read_to_string(&path).map_err(|source| CorpusError::Io {
            path: path.clone(),
            source,
        })?;
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

        let index = CorpusIndex::build(edition, content.lines())?;
        if index.passages().is_empty() {
            warn!(path = %path.display(), "corpus file contains no passages");
        }
        info!(
            edition = edition.code(),
            path = %path.display(),
            passages = index.passages().len(),
            words = index.len(),
            "loaded corpus"
        );
        Ok(index)
    }

    /// Editions whose corpus file is present.
    pub fn available(&self) -> Vec<Edition> {
        Edition::all()
            .iter()
            .copied()
            .filter(|e| self.path_for(*e).is_file())
            .collect()
    }
}
