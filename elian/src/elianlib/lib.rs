//! Transcription of text into the Elian script.
//!
//! Text is encoded as a [`Script`] (a sequence of glyphs from
//! [`base::glyphs`]), split into words, packed into lines of limited
//! width and then drawn three rows of text per line.
#![deny(unreachable_pub)]
#![deny(unsafe_code)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::wildcard_imports)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::pedantic)]
#![allow(clippy::manual_assert)] // fix soon
#![allow(clippy::doc_markdown)] // fix soon

mod driver;
mod layout;
mod render;
mod script;
mod types;

pub use driver::{transcribe, transcribe_file, Source};
pub use layout::{
    chunk_lines, LayoutOptions, Line, Lines, Word, Words, DEFAULT_LINE_CHAR_LIMIT,
    GLYPH_SEPARATOR_WIDTH, WORD_SEPARATOR_WIDTH,
};
pub use render::render;
pub use script::{text_to_script, Script};
pub use types::{IoAction, IoFailed, IoTarget, TranscriptionFailure};
