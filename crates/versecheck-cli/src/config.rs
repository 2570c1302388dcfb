//! Configuration layering: CLI flags > environment > config file > defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use versecheck_corpus::Edition;

pub const CORPUS_DIR_VAR: &str = "VERSECHECK_CORPUS_DIR";
pub const EDITION_VAR: &str = "VERSECHECK_EDITION";

const DEFAULT_CORPUS_DIR: &str = "bibles";
const DEFAULT_EDITION: Edition = Edition::Kjv;

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub corpus_dir: Option<PathBuf>,
    pub edition: Option<String>,
    pub passages_per_word: Option<usize>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load the per-user config file if there is one.
    pub fn load_default() -> anyhow::Result<Self> {
        match default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/versecheck/config.toml`, e.g. `~/.config/versecheck/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("versecheck").join("config.toml"))
}

/// Values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub corpus_dir: Option<PathBuf>,
    pub edition: Option<String>,
    pub passages_per_word: Option<usize>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub corpus_dir: PathBuf,
    pub edition: Edition,
    pub passages_per_word: Option<usize>,
}

/// Merge the layers. `env` looks up an environment variable.
pub fn resolve(
    cli: Overrides,
    env: impl Fn(&str) -> Option<String>,
    file: FileConfig,
) -> anyhow::Result<Config> {
    let corpus_dir = cli
        .corpus_dir
        .or_else(|| env(CORPUS_DIR_VAR).map(PathBuf::from))
        .or(file.corpus_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CORPUS_DIR));

    let edition = match cli.edition.or_else(|| env(EDITION_VAR)).or(file.edition) {
        Some(code) => code.parse::<Edition>()?,
        None => DEFAULT_EDITION,
    };

    Ok(Config {
        corpus_dir,
        edition,
        passages_per_word: cli.passages_per_word.or(file.passages_per_word),
    })
}
