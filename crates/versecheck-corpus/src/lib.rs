//! Scripture corpus indexing for word-presence checks.
//!
//! A corpus edition is a text file whose first two lines are metadata and
//! whose remaining lines are passages of the form
//! `<Book> <Chapter>:<Verse>\t<Text>`. [`CorpusIndex`] maps every word of
//! the corpus to the passages it occurs in; [`CorpusIndex::check`] reports
//! which words of an arbitrary text are known.
//!
//! # Loading
//!
//! - **From a directory**: [`CorpusLibrary::load`] reads `<dir>/<code>.txt`
//! - **From lines**: [`CorpusIndex::build`] takes any iterator of lines
//! - **From a reader**: [`CorpusIndex::from_reader`]
//!
//! ```
//! use versecheck_corpus::{CorpusIndex, Edition};
//!
//! let index = CorpusIndex::build(
//!     Edition::Kjv,
//!     [
//!         "KJV",
//!         "King James Version",
//!         "Genesis 1:1\tIn the beginning God created",
//!         "Genesis 1:2\tAnd the earth was without form",
//!     ],
//! )?;
//!
//! let result = index.check("the earth and the sky")?;
//! assert_eq!(result.coverage, 75.0);
//! assert_eq!(result.unmatched[0].as_str(), "sky");
//! # Ok::<(), versecheck_corpus::CorpusError>(())
//! ```

mod check;
mod edition;
mod error;
mod frequency;
mod index;
mod library;
pub mod passage;

pub use check::CheckResult;
pub use edition::Edition;
pub use error::CorpusError;
pub use index::{CorpusIndex, METADATA_LINES, TokenEntry};
pub use library::CorpusLibrary;
pub use passage::{Passage, PassageError, PassageRef, parse_passage};
pub use versecheck_text::Token;
