//! Splitting a script into words, and packing words into lines.
//!
//! Widths are measured in display columns.  Within a word every glyph
//! is followed by a one-column gap, so a word occupies the sum of
//! its glyph widths plus one column per glyph.  Words on the same
//! line are separated by a four-column gap.
//!
//! Runs of spaces need some care.  A single space between two words
//! is just a separator and produces no word of its own.  Each further
//! space in a run (and a space at the start of the script) produces a
//! "space sentinel", a word containing only the space glyph, so that
//! deliberate blanks survive into the output.  Sentinels are dropped
//! where they would otherwise begin a line.
use std::iter::FusedIterator;
use std::mem;

use base::glyphs::Glyph;

pub const GLYPH_SEPARATOR_WIDTH: usize = 1;
pub const WORD_SEPARATOR_WIDTH: usize = 4;
pub const DEFAULT_LINE_CHAR_LIMIT: usize = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// The maximum width (in columns) of an output line.  A word
    /// wider than this is not split; it gets a line to itself.
    pub line_char_limit: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            line_char_limit: DEFAULT_LINE_CHAR_LIMIT,
        }
    }
}

/// A run of glyphs containing no space, or a space sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    glyphs: &'a [Glyph],
}

impl<'a> Word<'a> {
    #[must_use]
    pub fn glyphs(&self) -> &'a [Glyph] {
        self.glyphs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The number of columns taken by the word, counting the gap
    /// after each glyph.
    #[must_use]
    pub fn width(&self) -> usize {
        self.glyphs
            .iter()
            .map(|g| g.width() + GLYPH_SEPARATOR_WIDTH)
            .sum()
    }

    #[must_use]
    pub fn is_space_sentinel(&self) -> bool {
        matches!(self.glyphs, [only] if only.is_space())
    }
}

/// Iterator over the words of a script; see [`Script::words`](crate::Script::words).
#[derive(Debug, Clone)]
pub struct Words<'a> {
    glyphs: &'a [Glyph],
    pos: usize,
    word_start: usize,
    finished: bool,
}

impl<'a> Words<'a> {
    pub(crate) fn new(glyphs: &'a [Glyph]) -> Words<'a> {
        Words {
            glyphs,
            pos: 0,
            word_start: 0,
            finished: false,
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Word<'a>> {
        if self.finished {
            return None;
        }
        let glyphs: &'a [Glyph] = self.glyphs;
        while let Some(glyph) = glyphs.get(self.pos) {
            let here = self.pos;
            self.pos += 1;
            if glyph.is_space() {
                let start = mem::replace(&mut self.word_start, here + 1);
                let word = if start < here {
                    &glyphs[start..here]
                } else {
                    // Nothing since the previous space (or since the
                    // start of the script), so the space itself
                    // becomes a word.
                    &glyphs[here..=here]
                };
                return Some(Word { glyphs: word });
            }
        }
        // The final word is emitted even when empty.
        self.finished = true;
        Some(Word {
            glyphs: &glyphs[self.word_start..],
        })
    }
}

impl FusedIterator for Words<'_> {}

/// The words making up one line of output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line<'a> {
    words: Vec<Word<'a>>,
}

impl<'a> Line<'a> {
    #[must_use]
    pub fn words(&self) -> &[Word<'a>] {
        &self.words
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The width of the line as accounted for by the line packer.
    #[must_use]
    pub fn width(&self) -> usize {
        let separators = self.words.len().saturating_sub(1) * WORD_SEPARATOR_WIDTH;
        self.words.iter().map(Word::width).sum::<usize>() + separators
    }
}

/// Iterator over the lines produced by [`chunk_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a, I> {
    words: I,
    char_limit: usize,
    current: Line<'a>,
    current_width: usize,
    finished: bool,
}

/// Greedily pack `words` into lines no wider than `char_limit`
/// columns.
///
/// Words are never split or reordered.  A space sentinel is never
/// placed at the start of a line; when one would be, it is discarded.
/// The last line is always produced, even if it is empty.
pub fn chunk_lines<'a, I>(words: I, char_limit: usize) -> Lines<'a, I::IntoIter>
where
    I: IntoIterator<Item = Word<'a>>,
{
    Lines {
        words: words.into_iter(),
        char_limit,
        current: Line::default(),
        current_width: 0,
        finished: false,
    }
}

impl<'a, I> Iterator for Lines<'a, I>
where
    I: Iterator<Item = Word<'a>>,
{
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.finished {
            return None;
        }
        for word in self.words.by_ref() {
            let word_width = word.width();
            let added_width = if self.current.is_empty() {
                word_width
            } else {
                word_width + WORD_SEPARATOR_WIDTH
            };
            if self.current_width + added_width > self.char_limit {
                let next_line = if word.is_space_sentinel() {
                    self.current_width = 0;
                    Line::default()
                } else {
                    self.current_width = word_width;
                    Line { words: vec![word] }
                };
                return Some(mem::replace(&mut self.current, next_line));
            }
            if self.current.is_empty() && word.is_space_sentinel() {
                continue;
            }
            self.current.words.push(word);
            self.current_width += added_width;
        }
        self.finished = true;
        Some(mem::take(&mut self.current))
    }
}

impl<'a, I> FusedIterator for Lines<'a, I> where I: Iterator<Item = Word<'a>> {}
