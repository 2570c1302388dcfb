//! Text normalization for the versecheck workspace.
//!
//! [`tokenize`] turns free-form text into the canonical word sequence used both
//! to build a corpus index and to query it; [`highlight_token`] marks the
//! occurrences of a token inside raw passage text for display.

pub mod highlight;
pub mod tokenizer;

pub use highlight::highlight_token;
pub use tokenizer::{Token, detokenize, normalize_word, tokenize, tokenize_unique};
