//! Drawing laid-out lines as text.
use std::fmt::{self, Display, Formatter};

use base::glyphs::Glyph;

use super::layout::{Line, Word};

const GLYPH_SEPARATOR: &str = " ";
const WORD_SEPARATOR: &str = "    ";

#[derive(Debug, Clone, Copy)]
enum Row {
    Upper,
    Middle,
    Lower,
}

const ROWS: [Row; 3] = [Row::Upper, Row::Middle, Row::Lower];

impl Row {
    fn of(self, glyph: &Glyph) -> &'static str {
        match self {
            Row::Upper => glyph.upper(),
            Row::Middle => glyph.middle(),
            Row::Lower => glyph.lower(),
        }
    }
}

impl Word<'_> {
    fn write_row(&self, f: &mut Formatter<'_>, row: Row) -> fmt::Result {
        for (i, glyph) in self.glyphs().iter().enumerate() {
            if i > 0 {
                f.write_str(GLYPH_SEPARATOR)?;
            }
            f.write_str(row.of(glyph))?;
        }
        Ok(())
    }
}

impl Line<'_> {
    fn write_row(&self, f: &mut Formatter<'_>, row: Row) -> fmt::Result {
        for (i, word) in self.words().iter().enumerate() {
            if i > 0 {
                f.write_str(WORD_SEPARATOR)?;
            }
            word.write_row(f, row)?;
        }
        Ok(())
    }
}

/// Displays a line as its upper, middle and lower rows, separated by
/// line breaks (with no line break after the lower row).
impl Display for Line<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, row) in ROWS.into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            self.write_row(f, row)?;
        }
        Ok(())
    }
}

/// Draw `lines`, one after another.  Every row of the output is
/// separated from the next by a line break; there is no line break at
/// the end.
pub fn render<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = Line<'a>>,
{
    let mut output = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&line.to_string());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::super::layout::{chunk_lines, LayoutOptions, Line, DEFAULT_LINE_CHAR_LIMIT};
    use super::super::script::text_to_script;
    use super::render;
    use test_strategy::{proptest, Arbitrary};

    fn draw(text: &str, limit: usize) -> String {
        text_to_script(text).render(&LayoutOptions {
            line_char_limit: limit,
        })
    }

    #[test]
    fn test_render_hi() {
        let expected = concat!("     \n", "╭─ ╷ \n", "╰─ ╰─");
        assert_eq!(draw("HI", DEFAULT_LINE_CHAR_LIMIT), expected);
        assert_eq!(draw("hi", DEFAULT_LINE_CHAR_LIMIT), expected);
    }

    #[test]
    fn test_render_two_words() {
        let expected = concat!(
            "  " /* A */, "    ", "   " /* D */, "\n",
            "─╮", "    ", "╭─╮", "\n",
            " ╵", "    ", "╵ ╵",
        );
        assert_eq!(draw("A D", DEFAULT_LINE_CHAR_LIMIT), expected);
    }

    #[test]
    fn test_render_sentinel_keeps_the_gap() {
        // A, a space sentinel and B, each separated by four columns.
        let expected = concat!(
            "  ", "    ", " ", "    ", "  ", "\n",
            "─╮", "    ", " ", "    ", "─╮", "\n",
            " ╵", "    ", " ", "    ", "─╯",
        );
        assert_eq!(draw("A  B", DEFAULT_LINE_CHAR_LIMIT), expected);
    }

    #[test]
    fn test_render_wrapped() {
        let expected = concat!(
            "  \n", "─╮\n", " ╵\n", //
            "  \n", "─╮\n", "─╯",
        );
        assert_eq!(draw("A B", 5), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(draw("", DEFAULT_LINE_CHAR_LIMIT), "\n\n");
        assert_eq!(render(Vec::<Line<'_>>::new()), "");
    }

    #[test]
    fn test_render_trailing_space() {
        // The empty final word still gets a word separator.
        assert_eq!(
            draw("A ", DEFAULT_LINE_CHAR_LIMIT),
            "      \n─╮    \n ╵    "
        );
    }

    #[test]
    fn test_line_display() {
        let script = text_to_script("HI");
        let line = chunk_lines(script.words(), DEFAULT_LINE_CHAR_LIMIT)
            .next()
            .expect("there is always at least one line");
        assert_eq!(line.to_string(), draw("HI", DEFAULT_LINE_CHAR_LIMIT));
    }

    #[test]
    fn test_hello_thirty_times() {
        let text = "HELLO ".repeat(30);
        let limit = DEFAULT_LINE_CHAR_LIMIT;
        let output = draw(&text, limit);
        let rows: Vec<&str> = output.split('\n').collect();
        // Three HELLOs fit on each line.
        assert_eq!(rows.len(), 30);
        for row in &rows {
            assert!(row.chars().count() <= limit, "{row:?} is too wide");
        }
        let single = draw("HELLO", limit);
        let hello_upper = single.split('\n').next().expect("rendering has rows");
        for upper in rows.iter().step_by(3) {
            assert!(upper.starts_with(hello_upper));
        }
        // Each middle row holds whole words only: every word starts
        // with H and there are three per line.
        for middle in rows.iter().skip(1).step_by(3) {
            let words: Vec<&str> = middle.split("    ").filter(|w| !w.is_empty()).collect();
            assert_eq!(words.len(), 3, "{middle:?}");
            for w in words {
                assert!(w.starts_with("╭─ ╭─╮"), "{w:?}");
            }
        }
    }

    #[derive(Debug, Arbitrary)]
    struct RenderInput {
        #[strategy("[A-Za-z ]{0,200}")]
        text: String,
        #[strategy(1..150usize)]
        limit: usize,
    }

    #[proptest]
    fn rendering_is_deterministic(input: RenderInput) {
        let script = text_to_script(&input.text);
        let options = LayoutOptions {
            line_char_limit: input.limit,
        };
        assert_eq!(script.render(&options), script.render(&options));
    }

    #[proptest]
    fn rows_come_in_threes_of_equal_width(input: RenderInput) {
        let output = draw(&input.text, input.limit);
        let rows: Vec<&str> = output.split('\n').collect();
        assert_eq!(rows.len() % 3, 0);
        for triple in rows.chunks(3) {
            let width = triple[0].chars().count();
            assert!(triple.iter().all(|r| r.chars().count() == width));
        }
    }

    #[proptest]
    fn rows_fit_when_words_fit(#[strategy("([A-Za-z]{1,10} {1,3}){0,30}")] text: String) {
        // No word of ten letters can be wider than 40 columns.
        let limit = 40;
        let output = draw(&text, limit);
        for row in output.split('\n') {
            assert!(row.chars().count() <= limit, "{row:?}");
        }
    }
}
