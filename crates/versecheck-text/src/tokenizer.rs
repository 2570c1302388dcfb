use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// A normalized word: lowercase alphabetic characters only.
///
/// Tokens are only produced by the tokenizer, so the invariant holds for
/// every value in circulation. Maps keyed by `Token` can be queried with a
/// plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Split text into its ordered sequence of tokens, duplicates included.
///
/// Alphabetic characters are lowercased and accumulated; whitespace ends the
/// current token; every other character (digits, punctuation) is dropped
/// without ending the token, so `"don't"` becomes `dont`.
///
/// ```
/// use versecheck_text::tokenize;
///
/// let words: Vec<String> = tokenize("Don't sell NFTs, 2 times!")
///     .into_iter()
///     .map(|t| t.into_string())
///     .collect();
/// assert_eq!(words, ["dont", "sell", "nfts", "times"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(Token(std::mem::take(&mut current)));
            }
        } else if c.is_alphabetic() {
            // Some mappings add combining marks ('İ' -> "i\u{307}").
            current.extend(c.to_lowercase().filter(|l| l.is_alphabetic()));
        }
    }

    if !current.is_empty() {
        tokens.push(Token(current));
    }

    tokens
}

/// Distinct tokens of `text`, in order of first occurrence.
pub fn tokenize_unique(text: &str) -> Vec<Token> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Join tokens with single spaces.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a single word the way the tokenizer would, without splitting.
///
/// Returns `None` when nothing alphabetic is left.
pub fn normalize_word(word: &str) -> Option<Token> {
    let normalized: String = word
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphabetic())
        .collect();
    (!normalized.is_empty()).then_some(Token(normalized))
}
