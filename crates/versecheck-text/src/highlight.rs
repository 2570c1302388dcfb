use crate::tokenizer::{Token, normalize_word};

/// Wrap every word of `text` that normalizes to `token`.
///
/// Words are whitespace-delimited, like the tokenizer sees them. Leading and
/// trailing punctuation stays outside the wrapped span; whitespace is copied
/// through verbatim.
///
/// ```
/// use versecheck_text::{highlight_token, normalize_word};
///
/// let token = normalize_word("light").unwrap();
/// let out = highlight_token("Let there be light: and there was light.", &token, |w| {
///     format!("**{w}**")
/// });
/// assert_eq!(out, "Let there be **light**: and there was **light**.");
/// ```
pub fn highlight_token<F>(text: &str, token: &Token, mut wrap: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                push_word(&mut out, &text[start..i], token, &mut wrap);
            }
            out.push(c);
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        push_word(&mut out, &text[start..], token, &mut wrap);
    }

    out
}

fn push_word<F>(out: &mut String, word: &str, token: &Token, wrap: &mut F)
where
    F: FnMut(&str) -> String,
{
    if normalize_word(word).as_ref() != Some(token) {
        out.push_str(word);
        return;
    }

    // normalize_word succeeded, so there is at least one alphabetic char.
    let first = word
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .map_or(0, |(i, _)| i);
    let last = word
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphabetic())
        .map_or(word.len(), |(i, c)| i + c.len_utf8());

    out.push_str(&word[..first]);
    out.push_str(&wrap(&word[first..last]));
    out.push_str(&word[last..]);
}
