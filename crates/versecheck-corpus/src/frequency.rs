//! Vocabulary frequency listings over a built index.

use crate::index::{CorpusIndex, TokenEntry};

impl CorpusIndex {
    /// Entries by descending occurrence count, ties broken alphabetically.
    pub fn most_common(&self, limit: Option<usize>) -> Vec<&TokenEntry> {
        let mut entries: Vec<&TokenEntry> = self.entries().collect();
        entries.sort_by(|a, b| b.count().cmp(&a.count()).then_with(|| a.token().cmp(b.token())));
        if let Some(limit) = limit {
            entries.truncate(limit);
        }
        entries
    }

    /// The `n` rarest entries: the tail of [`most_common`](Self::most_common),
    /// in the same order.
    pub fn least_common(&self, n: usize) -> Vec<&TokenEntry> {
        let mut entries = self.most_common(None);
        let start = entries.len().saturating_sub(n);
        entries.split_off(start)
    }

    /// Entries whose count lies in `min..=max`, most common first.
    pub fn with_count_between(&self, min: u64, max: u64) -> Vec<&TokenEntry> {
        self.most_common(None)
            .into_iter()
            .filter(|e| (min..=max).contains(&e.count()))
            .collect()
    }

    /// Total number of word occurrences in the corpus.
    pub fn total_occurrences(&self) -> u64 {
        self.entries().map(TokenEntry::count).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::{CorpusIndex, Edition};

    fn index() -> CorpusIndex {
        CorpusIndex::build(
            Edition::Kjv,
            [
                "KJV",
                "King James Version",
                "Genesis 1:1\tIn the beginning God created the heaven and the earth.",
                "Genesis 1:2\tAnd the earth was without form, and void.",
            ],
        )
        .unwrap()
    }

    fn tokens(entries: &[&crate::TokenEntry]) -> Vec<String> {
        entries.iter().map(|e| e.token().to_string()).collect()
    }

    #[test]
    fn test_most_common_order() {
        let index = index();
        let top = index.most_common(Some(3));
        assert_eq!(tokens(&top), ["the", "and", "earth"]);
        assert_eq!(top[0].count(), 4);
        assert_eq!(top[1].count(), 3);
    }

    #[test]
    fn test_least_common_is_tail() {
        let index = index();
        let all = index.most_common(None);
        let least = index.least_common(2);
        assert_eq!(tokens(&least), tokens(&all[all.len() - 2..]));
        assert!(least.iter().all(|e| e.count() == 1));
        assert_eq!(index.least_common(1000).len(), all.len());
    }

    #[test]
    fn test_with_count_between() {
        let index = index();
        assert_eq!(tokens(&index.with_count_between(2, 3)), ["and", "earth"]);
        assert!(index.with_count_between(5, 10).is_empty());
    }

    #[test]
    fn test_total_occurrences() {
        // 10 words in the first verse, 8 in the second.
        assert_eq!(index().total_occurrences(), 18);
    }
}
