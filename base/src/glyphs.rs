//! The Elian glyph table.
//!
//! Each letter of the Elian script is drawn with Unicode box-drawing
//! characters over three rows of text (upper, middle and lower).  The
//! full alphabet looks like this:
//!
//! ```text
//! ─╮ ─╮  ╷ ╭─╮ ╭─╮ ╷ ╷ ╭─ ╭─ ╷
//!  ╵ ─╯ ─╯ ╵ ╵ ╰─╯ ╰─╯ ╵  ╰─ ╰─
//! ─╮ ─╮  ╷ ╭─╮   ╷   ╷ ╭─ ╭─ ╷
//!  │  │  │ │ ╵ ╭─┤ ╷ │ │  │  │
//!  ╵ ─╯ ─╯ ╵   ╰─╯ ╰─╯ ╵  ╰─ ╰─
//! ─╮ ─╮  ╷ ╭─╮  .╷   ╷ ╭─ ╭─ ╷
//! ·│ ·│ ·│ │·╵ ╭─┤ ╷·│ │· │· │·
//!  ╵ ─╯ ─╯ ╵   ╰─╯ ╰─╯ ╵  ╰─ ╰─
//! ```
//!
//! The first row of letters (A to I) has no ascender, the second (J
//! to R) has a stroke rising into the upper row, and the third (S to
//! Z) repeats the second with a dot.  The ninth position of the third
//! row is reserved; it has a glyph but no letter selects it.
//!
//! The table is immutable.  It is built once, on first use, and every
//! entry is checked as it is built.
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::sync::OnceLock;

/// The three-row drawing of a single Elian letter (or of a space).
///
/// Glyphs are compared by their drawing alone.  All three rows of a
/// glyph in the table have the same number of characters; that
/// number is the glyph's display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    upper: &'static str,
    middle: &'static str,
    lower: &'static str,
}

impl Glyph {
    const fn new(upper: &'static str, middle: &'static str, lower: &'static str) -> Glyph {
        Glyph {
            upper,
            middle,
            lower,
        }
    }

    #[must_use]
    pub fn upper(&self) -> &'static str {
        self.upper
    }

    #[must_use]
    pub fn middle(&self) -> &'static str {
        self.middle
    }

    #[must_use]
    pub fn lower(&self) -> &'static str {
        self.lower
    }

    /// The rows of the glyph, top first.
    #[must_use]
    pub fn rows(&self) -> [&'static str; 3] {
        [self.upper, self.middle, self.lower]
    }

    /// Number of display columns occupied by the glyph.
    #[must_use]
    pub fn width(&self) -> usize {
        self.upper.chars().count()
    }

    /// Returns true for the glyph of the space character, which marks
    /// word boundaries.
    #[must_use]
    pub fn is_space(&self) -> bool {
        *self == SPACE
    }

    fn row_widths(&self) -> [usize; 3] {
        self.rows().map(|row| row.chars().count())
    }
}

impl Display for Glyph {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}\n{}\n{}", self.upper, self.middle, self.lower)
    }
}

/// The glyph of the space character.
pub const SPACE: Glyph = Glyph::new(" ", " ", " ");

/// One entry in the glyph table.
#[derive(Debug, PartialEq, Eq)]
pub struct GlyphEntry {
    pub name: &'static str,
    /// The (upper-case) character which selects this glyph.  The
    /// reserved entry has none.
    pub selector: Option<char>,
    pub glyph: Glyph,
}

const fn letter(ch: char, name: &'static str, rows: [&'static str; 3]) -> GlyphEntry {
    GlyphEntry {
        name,
        selector: Some(ch),
        glyph: Glyph::new(rows[0], rows[1], rows[2]),
    }
}

const ALL_GLYPHS: &[GlyphEntry] = &[
    // No ascender.
    letter('A', "a", ["  ", "─╮", " ╵"]),
    letter('B', "b", ["  ", "─╮", "─╯"]),
    letter('C', "c", ["  ", " ╷", "─╯"]),
    letter('D', "d", ["   ", "╭─╮", "╵ ╵"]),
    letter('E', "e", ["   ", "╭─╮", "╰─╯"]),
    letter('F', "f", ["   ", "╷ ╷", "╰─╯"]),
    letter('G', "g", ["  ", "╭─", "╵ "]),
    letter('H', "h", ["  ", "╭─", "╰─"]),
    letter('I', "i", ["  ", "╷ ", "╰─"]),
    // Ascender.
    letter('J', "j", ["─╮", " │", " ╵"]),
    letter('K', "k", ["─╮", " │", "─╯"]),
    letter('L', "l", [" ╷", " │", "─╯"]),
    letter('M', "m", ["╭─╮", "│ ╵", "╵  "]),
    letter('N', "n", ["  ╷", "╭─┤", "╰─╯"]),
    letter('O', "o", ["  ╷", "╷ │", "╰─╯"]),
    letter('P', "p", ["╭─", "│ ", "╵ "]),
    letter('Q', "q", ["╭─", "│ ", "╰─"]),
    letter('R', "r", ["╷ ", "│ ", "╰─"]),
    // Ascender and dot.
    letter('S', "s", ["─╮", "·│", " ╵"]),
    letter('T', "t", ["─╮", "·│", "─╯"]),
    letter('U', "u", [" ╷", "·│", "─╯"]),
    letter('V', "v", ["╭─╮", "│·╵", "╵  "]),
    letter('W', "w", [" ·╷", "╭─┤", "╰─╯"]),
    letter('X', "x", ["  ╷", "╷·│", "╰─╯"]),
    letter('Y', "y", ["╭─", "│·", "╵ "]),
    letter('Z', "z", ["╭─", "│·", "╰─"]),
    GlyphEntry {
        name: "unused",
        selector: None,
        glyph: Glyph::new("╷ ", "│·", "╰─"),
    },
    GlyphEntry {
        name: "space",
        selector: Some(' '),
        glyph: SPACE,
    },
];

#[derive(Debug)]
struct GlyphMapByChar {
    mapping: HashMap<char, Glyph>,
}

static GLYPH_MAP_BY_CHAR: OnceLock<GlyphMapByChar> = OnceLock::new();

impl GlyphMapByChar {
    fn new(entries: &'static [GlyphEntry]) -> GlyphMapByChar {
        let mut mapping = HashMap::with_capacity(entries.len());
        for entry in entries {
            let [upper, middle, lower] = entry.glyph.row_widths();
            if upper != middle || middle != lower {
                panic!(
                    "glyph '{}' has rows of unequal width (upper {upper}, middle {middle}, lower {lower})",
                    entry.name
                );
            }
            if let Some(ch) = entry.selector {
                if let Some(prev) = mapping.insert(ch, entry.glyph) {
                    panic!(
                        "duplicate glyph mapping for character '{ch}': {:?} and {prev:?}",
                        entry.glyph
                    );
                }
            }
        }
        GlyphMapByChar { mapping }
    }

    fn get(&self, ch: char) -> Option<Glyph> {
        self.mapping.get(&ch).copied()
    }
}

fn glyph_map() -> &'static GlyphMapByChar {
    GLYPH_MAP_BY_CHAR.get_or_init(|| GlyphMapByChar::new(ALL_GLYPHS))
}

/// Convert `ch` to the upper-case character used as a table key.
/// Characters whose upper-case form is more than one character (for
/// example 'ß') have no key.
fn canonicalise_char(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => Some(single),
        _ => None,
    }
}

/// Find the glyph for `ch`, ignoring case.  Returns `None` for any
/// character outside the Elian alphabet; that is not an error.
#[must_use]
pub fn lookup(ch: char) -> Option<Glyph> {
    canonicalise_char(ch).and_then(|key| glyph_map().get(key))
}

/// Find a glyph by its table name (for example "q" or "unused").
#[must_use]
pub fn glyph_by_name(name: &str) -> Option<Glyph> {
    ALL_GLYPHS
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.glyph)
}

/// Every entry of the table, in alphabetical order, followed by the
/// reserved entry and space.
#[must_use]
pub fn all_glyphs() -> &'static [GlyphEntry] {
    // Force validation of the table before handing it out.
    glyph_map();
    ALL_GLYPHS
}
