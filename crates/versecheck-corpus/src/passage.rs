//! Passage records and the corpus line parser.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Why a corpus line could not be parsed into a [`Passage`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassageError {
    #[error("missing tab between reference and text")]
    MissingSeparator,
    #[error("reference '{0}' has no ':' before the verse number")]
    MissingVerse(String),
    #[error("invalid chapter number '{0}'")]
    InvalidChapter(String),
    #[error("invalid verse number '{0}'")]
    InvalidVerse(String),
}

/// Location of one passage: `"<book>, <chapter>:<verse>"`.
///
/// Identity is the `(book, chapter, verse)` triple. `index` records the
/// passage's position in its edition and is used to get back to the text,
/// but two refs with the same location compare equal whatever their index.
#[derive(Debug, Clone)]
pub struct PassageRef {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub index: usize,
}

impl PartialEq for PassageRef {
    fn eq(&self, other: &Self) -> bool {
        self.book == other.book && self.chapter == other.chapter && self.verse == other.verse
    }
}

impl Eq for PassageRef {}

impl Hash for PassageRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.book.hash(state);
        self.chapter.hash(state);
        self.verse.hash(state);
    }
}

impl fmt::Display for PassageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}:{}", self.book, self.chapter, self.verse)
    }
}

/// One verse: its location and trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub reference: PassageRef,
    pub text: String,
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.reference, self.text)
    }
}

/// Parse a `"<Book> <Chapter>:<Verse>\t<Text>"` line.
///
/// The label is split on its last colon, and the chapter is the last
/// whitespace-separated word before it, so multi-word book names such as
/// `"Song of Solomon 2:1"` keep all their words.
pub fn parse_passage(line: &str, index: usize) -> Result<Passage, PassageError> {
    let (label, text) = line.split_once('\t').ok_or(PassageError::MissingSeparator)?;

    let (book_and_chapter, verse) = label
        .rsplit_once(':')
        .ok_or_else(|| PassageError::MissingVerse(label.trim().to_string()))?;

    let mut words: Vec<&str> = book_and_chapter.split_whitespace().collect();
    let chapter = words.pop().unwrap_or("");
    let chapter: u32 = chapter
        .parse()
        .map_err(|_| PassageError::InvalidChapter(chapter.to_string()))?;

    let verse = verse.trim();
    let verse: u32 = verse
        .parse()
        .map_err(|_| PassageError::InvalidVerse(verse.to_string()))?;

    Ok(Passage {
        reference: PassageRef {
            book: words.join(" "),
            chapter,
            verse,
            index,
        },
        text: text.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_simple_line() {
        let p = parse_passage("Genesis 1:1\tIn the beginning God created\n", 0).unwrap();
        assert_eq!(p.reference.book, "Genesis");
        assert_eq!(p.reference.chapter, 1);
        assert_eq!(p.reference.verse, 1);
        assert_eq!(p.reference.index, 0);
        assert_eq!(p.text, "In the beginning God created");
    }

    #[test]
    fn test_parse_multi_word_book() {
        let p = parse_passage("Song of Solomon 2:13\tThe fig tree putteth forth", 17).unwrap();
        assert_eq!(p.reference.book, "Song of Solomon");
        assert_eq!(p.reference.chapter, 2);
        assert_eq!(p.reference.verse, 13);
        assert_eq!(p.reference.to_string(), "Song of Solomon, 2:13");
    }

    #[test]
    fn test_numbered_book_keeps_its_number() {
        let p = parse_passage("1 Kings 3:5\tIn Gibeon the LORD appeared", 3).unwrap();
        assert_eq!(p.reference.book, "1 Kings");
        assert_eq!(p.reference.chapter, 3);
    }

    #[test]
    fn test_text_may_contain_tabs_and_colons() {
        let p = parse_passage("John 3:16\tFor God so loved: the world\tthat", 0).unwrap();
        assert_eq!(p.text, "For God so loved: the world\tthat");
    }

    #[test]
    fn test_display_round_trips_the_line() {
        let line = "Genesis 1:2\tAnd the earth was without form";
        let p = parse_passage(line, 1).unwrap();
        assert_eq!(p.to_string(), "Genesis, 1:2\tAnd the earth was without form");
    }

    #[test]
    fn test_missing_tab() {
        assert_eq!(
            parse_passage("Genesis 1:1 In the beginning", 0),
            Err(PassageError::MissingSeparator)
        );
    }

    #[test]
    fn test_missing_colon() {
        assert_eq!(
            parse_passage("Genesis 1\tIn the beginning", 0),
            Err(PassageError::MissingVerse("Genesis 1".into()))
        );
    }

    #[test]
    fn test_non_numeric_components() {
        assert_eq!(
            parse_passage("Genesis one:1\ttext", 0),
            Err(PassageError::InvalidChapter("one".into()))
        );
        assert_eq!(
            parse_passage("Genesis 1:a\ttext", 0),
            Err(PassageError::InvalidVerse("a".into()))
        );
        assert_eq!(
            parse_passage(":1\ttext", 0),
            Err(PassageError::InvalidChapter(String::new()))
        );
    }

    #[test]
    fn test_identity_ignores_index() {
        let a = parse_passage("Genesis 1:1\tone", 0).unwrap().reference;
        let b = parse_passage("Genesis 1:1\tother", 9).unwrap().reference;
        let c = parse_passage("Genesis 1:2\tone", 0).unwrap().reference;
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<PassageRef> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
