use tracing::debug;
use versecheck_text::{Token, tokenize_unique};

use crate::index::{CorpusIndex, TokenEntry};
use crate::{CorpusError, Edition};

/// Outcome of checking a text against one edition.
///
/// `matched` and `unmatched` together hold every distinct word of the input,
/// each in order of first occurrence.
#[derive(Debug, Clone)]
pub struct CheckResult<'a> {
    pub edition: Edition,
    pub text: &'a str,
    pub matched: Vec<&'a TokenEntry>,
    pub unmatched: Vec<Token>,
    /// Percentage of distinct input words found in the corpus, in `[0, 100]`.
    pub coverage: f64,
}

impl CheckResult<'_> {
    /// Number of distinct words in the input.
    pub fn distinct_words(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    pub fn all_known(&self) -> bool {
        self.unmatched.is_empty()
    }

    pub fn none_known(&self) -> bool {
        self.matched.is_empty()
    }
}

impl CorpusIndex {
    /// Report which distinct words of `text` occur in this edition.
    ///
    /// Repeating a word in the input does not change its weight: coverage is
    /// `matched / distinct words * 100`. Text without any words is rejected
    /// with [`CorpusError::EmptyQuery`].
    pub fn check<'a>(&'a self, text: &'a str) -> Result<CheckResult<'a>, CorpusError> {
        let tokens = tokenize_unique(text);
        if tokens.is_empty() {
            return Err(CorpusError::EmptyQuery);
        }
        let distinct = tokens.len();

        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for token in tokens {
            match self.lookup(token.as_str()) {
                Some(entry) => matched.push(entry),
                None => unmatched.push(token),
            }
        }

        let coverage = matched.len() as f64 / distinct as f64 * 100.0;
        debug!(
            edition = self.edition().code(),
            distinct,
            matched = matched.len(),
            coverage,
            "checked text"
        );

        Ok(CheckResult {
            edition: self.edition(),
            text,
            matched,
            unmatched,
            coverage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genesis() -> CorpusIndex {
        CorpusIndex::build(
            Edition::Kjv,
            [
                "KJV",
                "King James Version",
                "Genesis 1:1\tIn the beginning God created",
                "Genesis 1:2\tAnd the earth was without form",
            ],
        )
        .unwrap()
    }

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_partial_coverage() {
        let index = genesis();
        let result = index.check("the earth and the sky").unwrap();

        let matched: Vec<&str> = result.matched.iter().map(|e| e.token().as_str()).collect();
        assert_eq!(matched, ["the", "earth", "and"]);
        assert_eq!(words(&result.unmatched), ["sky"]);
        assert_eq!(result.coverage, 75.0);
        assert_eq!(result.distinct_words(), 4);
        assert_eq!(result.edition, Edition::Kjv);
        assert_eq!(result.text, "the earth and the sky");
    }

    #[test]
    fn test_matched_entries_carry_provenance() {
        let index = genesis();
        let result = index.check("THE").unwrap();
        assert_eq!(result.matched[0].passage_count(), 2);
        assert_eq!(result.matched[0].count(), 2);
    }

    #[test]
    fn test_full_and_zero_coverage() {
        let index = genesis();

        let all = index.check("God created the earth!").unwrap();
        assert_eq!(all.coverage, 100.0);
        assert!(all.all_known());

        let none = index.check("blockchain NFTs").unwrap();
        assert_eq!(none.coverage, 0.0);
        assert!(none.none_known());
    }

    #[test]
    fn test_repeated_unknown_word_counts_once() {
        let index = genesis();
        let result = index.check("sky sky sky sky the").unwrap();
        assert_eq!(result.unmatched.len(), 1);
        assert_eq!(result.coverage, 50.0);
    }

    #[test]
    fn test_empty_query_is_an_error() {
        let index = genesis();
        for text in ["", "   \n\t", "123 456 !?"] {
            assert!(matches!(index.check(text), Err(CorpusError::EmptyQuery)));
        }
    }
}
