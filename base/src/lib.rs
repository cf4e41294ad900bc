//! The `base` crate defines the Elian alphabet itself: the three-row
//! glyph drawn for each letter.  It does no I/O and knows nothing
//! about laying out text, so that any tool which needs Elian glyphs
//! can depend on it without depending on the transcriber.

pub mod glyphs;
