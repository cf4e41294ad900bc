//! Conversion of text into a sequence of Elian glyphs.
use tracing::{event, Level};

use base::glyphs::{lookup, Glyph};

use super::layout::{chunk_lines, LayoutOptions, Words};
use super::render::render;

/// An ordered sequence of glyphs.
///
/// A `Script` can only grow while it is being built.  Everything
/// downstream of construction ([`Script::words`], [`Script::render`])
/// borrows it immutably, so it cannot change while it is being laid
/// out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    glyphs: Vec<Glyph>,
}

impl Script {
    #[must_use]
    pub fn new() -> Script {
        Script::default()
    }

    /// Encode `text`.  Characters which have no Elian glyph (digits,
    /// punctuation, accented letters, line breaks and so on) are
    /// dropped.
    #[must_use]
    pub fn from_text(text: &str) -> Script {
        let mut script = Script::new();
        let mut dropped: usize = 0;
        for ch in text.chars() {
            match lookup(ch) {
                Some(glyph) => script.push(glyph),
                None => {
                    dropped += 1;
                }
            }
        }
        if dropped > 0 {
            event!(
                Level::TRACE,
                "dropped {dropped} characters which have no Elian glyph"
            );
        }
        script
    }

    pub fn push(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    #[must_use]
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Split the script into words.  This can be called any number of
    /// times and always yields the same words.
    #[must_use]
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.glyphs)
    }

    /// Lay out the script in lines no wider than
    /// `options.line_char_limit` and draw it.
    #[must_use]
    pub fn render(&self, options: &LayoutOptions) -> String {
        render(chunk_lines(self.words(), options.line_char_limit))
    }
}

impl Extend<Glyph> for Script {
    fn extend<T: IntoIterator<Item = Glyph>>(&mut self, iter: T) {
        self.glyphs.extend(iter);
    }
}

impl FromIterator<Glyph> for Script {
    fn from_iter<T: IntoIterator<Item = Glyph>>(iter: T) -> Script {
        Script {
            glyphs: iter.into_iter().collect(),
        }
    }
}

#[must_use]
pub fn text_to_script(text: &str) -> Script {
    Script::from_text(text)
}
