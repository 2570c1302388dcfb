//! The word -> passage index for one edition.

use std::collections::{HashMap, HashSet};
use std::io::BufRead;

use tracing::debug;
use versecheck_text::{Token, tokenize};

use crate::passage::{Passage, PassageRef, parse_passage};
use crate::{CorpusError, Edition};

/// Number of leading metadata lines in a corpus source. The second one is the
/// edition's human-readable title.
pub const METADATA_LINES: usize = 2;

/// Everything the index knows about one distinct word.
#[derive(Debug, Clone)]
pub struct TokenEntry {
    token: Token,
    passages: HashSet<PassageRef>,
    count: u64,
}

impl TokenEntry {
    fn new(token: Token, first: &PassageRef) -> Self {
        Self {
            token,
            passages: HashSet::from([first.clone()]),
            count: 1,
        }
    }

    fn record(&mut self, reference: &PassageRef) {
        if !self.passages.contains(reference) {
            self.passages.insert(reference.clone());
        }
        self.count += 1;
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Total number of occurrences across the corpus.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Number of distinct passages containing the word.
    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    pub fn contains_passage(&self, reference: &PassageRef) -> bool {
        self.passages.contains(reference)
    }

    /// Passages containing the word, in corpus order.
    pub fn passages(&self) -> Vec<&PassageRef> {
        let mut refs: Vec<&PassageRef> = self.passages.iter().collect();
        refs.sort_by_key(|r| r.index);
        refs
    }
}

/// Inverted index over one edition of the corpus.
///
/// Built once by [`CorpusIndex::build`] and read-only afterwards, so a single
/// instance can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    edition: Edition,
    title: String,
    passages: Vec<Passage>,
    words: HashMap<Token, TokenEntry>,
}

impl CorpusIndex {
    /// Build the index from the raw lines of a corpus source.
    ///
    /// The first [`METADATA_LINES`] lines are metadata. Every following line
    /// is parsed as a passage and numbered from 0; blank lines are skipped.
    /// The first malformed line aborts the whole build.
    pub fn build<I, S>(edition: Edition, lines: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();

        let header: Vec<String> = lines
            .by_ref()
            .take(METADATA_LINES)
            .map(|l| l.as_ref().trim().to_string())
            .collect();
        if header.len() < METADATA_LINES {
            return Err(CorpusError::MissingHeader {
                found: header.len(),
            });
        }
        let title = header[METADATA_LINES - 1].clone();
        debug!(edition = edition.code(), title = %title, "building corpus index");

        let mut passages: Vec<Passage> = Vec::new();
        let mut words: HashMap<Token, TokenEntry> = HashMap::new();

        for (offset, line) in lines.enumerate() {
            let line = line.as_ref();
            let line_no = offset + METADATA_LINES + 1;
            if line.trim().is_empty() {
                debug!(line = line_no, "skipping blank corpus line");
                continue;
            }

            let passage = parse_passage(line, passages.len())
                .map_err(|source| CorpusError::MalformedPassage { line: line_no, source })?;

            for token in tokenize(&passage.text) {
                words
                    .entry(token)
                    .and_modify(|entry| entry.record(&passage.reference))
                    .or_insert_with_key(|token| TokenEntry::new(token.clone(), &passage.reference));
            }
            passages.push(passage);
        }

        debug!(
            edition = edition.code(),
            passages = passages.len(),
            words = words.len(),
            "corpus index built"
        );

        Ok(Self {
            edition,
            title,
            passages,
            words,
        })
    }

    /// Build the index from any buffered reader (file, stdin, in-memory bytes).
    pub fn from_reader<R: BufRead>(edition: Edition, reader: R) -> Result<Self, CorpusError> {
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
        Self::build(edition, lines)
    }

    pub fn edition(&self) -> Edition {
        self.edition
    }

    /// Title taken from the corpus metadata header.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    /// Resolve a reference back to its passage.
    pub fn passage(&self, reference: &PassageRef) -> Option<&Passage> {
        self.passages
            .get(reference.index)
            .filter(|p| p.reference == *reference)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains_key(token)
    }

    pub fn lookup(&self, token: &str) -> Option<&TokenEntry> {
        self.words.get(token)
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &TokenEntry> {
        self.words.values()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENESIS: &str = "\u{feff}KJV\n\
        King James Version\n\
        Genesis 1:1\tIn the beginning God created\n\
        Genesis 1:2\tAnd the earth was without form\n";

    fn genesis() -> CorpusIndex {
        CorpusIndex::build(Edition::Kjv, GENESIS.lines()).unwrap()
    }

    #[test]
    fn test_header_is_skipped_and_title_kept() {
        let index = genesis();
        assert_eq!(index.title(), "King James Version");
        assert_eq!(index.passages().len(), 2);
        assert!(!index.contains("king"));
        assert!(!index.contains("kjv"));
    }

    #[test]
    fn test_counts_and_provenance() {
        let index = genesis();

        let the = index.lookup("the").unwrap();
        assert_eq!(the.count(), 2);
        assert_eq!(the.passage_count(), 2);

        let god = index.lookup("god").unwrap();
        assert_eq!(god.count(), 1);
        assert_eq!(god.passage_count(), 1);
        assert_eq!(god.passages()[0].to_string(), "Genesis, 1:1");
    }

    #[test]
    fn test_repeated_word_in_one_passage_counts_every_occurrence() {
        let index = CorpusIndex::build(
            Edition::Kjv,
            ["h", "t", "Psalms 150:6\tPraise ye the LORD. Praise ye the LORD."],
        )
        .unwrap();

        let praise = index.lookup("praise").unwrap();
        assert_eq!(praise.count(), 2);
        assert_eq!(praise.passage_count(), 1);
    }

    #[test]
    fn test_passages_are_numbered_from_zero() {
        let index = genesis();
        let indices: Vec<usize> = index.passages().iter().map(|p| p.reference.index).collect();
        assert_eq!(indices, [0, 1]);
    }

    #[test]
    fn test_passage_resolves_reference() {
        let index = genesis();
        let earth = index.lookup("earth").unwrap();
        let passage = index.passage(earth.passages()[0]).unwrap();
        assert_eq!(passage.text, "And the earth was without form");
    }

    #[test]
    fn test_entries_sorted_by_corpus_order() {
        let index = genesis();
        let refs: Vec<String> = index
            .lookup("the")
            .unwrap()
            .passages()
            .iter()
            .map(|r| r.to_string())
            .collect();
        assert_eq!(refs, ["Genesis, 1:1", "Genesis, 1:2"]);
    }

    #[test]
    fn test_count_never_below_passage_count() {
        let index = genesis();
        for entry in index.entries() {
            assert!(entry.count() >= 1);
            assert!(entry.count() >= entry.passage_count() as u64);
        }
    }

    #[test]
    fn test_malformed_line_fails_whole_build() {
        let lines = [
            "KJV",
            "King James Version",
            "Genesis 1:1\tIn the beginning",
            "Genesis 1:2 And the earth",
        ];
        let err = CorpusIndex::build(Edition::Kjv, lines).unwrap_err();
        match err {
            CorpusError::MalformedPassage { line, source } => {
                assert_eq!(line, 4);
                assert_eq!(source, crate::PassageError::MissingSeparator);
            }
            other => panic!("expected MalformedPassage, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_header() {
        let err = CorpusIndex::build(Edition::Erv, ["ERV"]).unwrap_err();
        assert!(matches!(err, CorpusError::MissingHeader { found: 1 }));
    }

    #[test]
    fn test_header_only_builds_empty_index() {
        let index = CorpusIndex::build(Edition::Erv, ["ERV", "English Revised Version"]).unwrap();
        assert!(index.is_empty());
        assert!(index.passages().is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped_without_consuming_an_index() {
        let index = CorpusIndex::build(
            Edition::Kjv,
            ["h", "t", "Genesis 1:1\tIn the beginning", "", "Genesis 1:2\tAnd the earth", "  "],
        )
        .unwrap();
        assert_eq!(index.passages().len(), 2);
        assert_eq!(index.passages()[1].reference.index, 1);
    }

    #[test]
    fn test_from_reader() {
        let index = CorpusIndex::from_reader(Edition::Kjv, GENESIS.as_bytes()).unwrap();
        assert_eq!(index.passages().len(), 2);
        assert!(index.contains("beginning"));
    }

    #[test]
    fn test_index_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CorpusIndex>();
    }
}
