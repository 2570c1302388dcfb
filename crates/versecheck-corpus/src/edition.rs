use std::fmt;

use crate::CorpusError;

/// A corpus edition (translation) that versecheck knows how to load.
///
/// Verses are not comparable across editions: translations differ slightly in
/// which verses they include, so passage indices are only meaningful within
/// one edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edition {
    /// English Revised Version.
    Erv,
    /// King James Version.
    Kjv,
}

impl Edition {
    pub fn all() -> &'static [Edition] {
        &[Edition::Erv, Edition::Kjv]
    }

    /// Short lowercase code, also used on the command line.
    pub fn code(self) -> &'static str {
        match self {
            Self::Erv => "erv",
            Self::Kjv => "kjv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Erv => "English Revised Version",
            Self::Kjv => "King James Version",
        }
    }

    /// File name of this edition inside a corpus directory.
    pub fn file_name(self) -> String {
        format!("{}.txt", self.code())
    }

    /// Comma-separated list of every edition code.
    pub fn codes() -> String {
        Self::all()
            .iter()
            .map(|e| e.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Edition {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|e| e.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CorpusError::UnknownEdition(s.to_string()))
    }
}
