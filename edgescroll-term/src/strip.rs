//! A single line of labels laid out left to right.

use unicode_width::UnicodeWidthChar;

const SEPARATOR: &str = " │ ";

/// One terminal column of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Char(char),
    /// Second column of a wide character.
    Continuation,
}

#[derive(Debug, Clone, Default)]
pub struct Strip {
    items: Vec<String>,
    cells: Vec<Glyph>,
}

impl Strip {
    pub fn new(items: Vec<String>) -> Self {
        let mut strip = Self {
            items,
            cells: Vec::new(),
        };
        strip.layout();
        strip
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
        self.layout();
    }

    pub fn pop(&mut self) -> Option<String> {
        let item = self.items.pop();
        self.layout();
        item
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Width in terminal columns.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    fn layout(&mut self) {
        self.cells.clear();
        self.cells.push(Glyph::Char(' '));
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                self.cells.extend(SEPARATOR.chars().map(Glyph::Char));
            }
            for ch in item.chars() {
                match ch.width() {
                    Some(0) | None => {}
                    Some(1) => self.cells.push(Glyph::Char(ch)),
                    Some(_) => {
                        self.cells.push(Glyph::Char(ch));
                        self.cells.push(Glyph::Continuation);
                    }
                }
            }
        }
        self.cells.push(Glyph::Char(' '));
    }

    /// Exactly `width` columns starting at `offset`, padded with spaces.
    /// Wide characters cut by either end of the window become spaces.
    pub fn window(&self, offset: usize, width: usize) -> Vec<Glyph> {
        let mut out = Vec::with_capacity(width);
        let end = offset + width;
        let mut x = offset;

        while x < end {
            match self.cells.get(x) {
                Some(Glyph::Char(ch)) => {
                    let wide = self.cells.get(x + 1) == Some(&Glyph::Continuation);
                    if wide && x + 1 >= end {
                        out.push(Glyph::Char(' '));
                        x += 1;
                    } else if wide {
                        out.push(Glyph::Char(*ch));
                        out.push(Glyph::Continuation);
                        x += 2;
                    } else {
                        out.push(Glyph::Char(*ch));
                        x += 1;
                    }
                }
                Some(Glyph::Continuation) | None => {
                    out.push(Glyph::Char(' '));
                    x += 1;
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(glyphs: &[Glyph]) -> String {
        glyphs
            .iter()
            .filter_map(|g| match g {
                Glyph::Char(c) => Some(*c),
                Glyph::Continuation => None,
            })
            .collect()
    }

    #[test]
    fn test_width_includes_separators_and_margins() {
        let strip = Strip::new(vec!["ab".into(), "cd".into()]);
        assert_eq!(strip.width(), 1 + 2 + 3 + 2 + 1);
    }

    #[test]
    fn test_wide_characters_take_two_columns() {
        let strip = Strip::new(vec!["東京".into()]);
        assert_eq!(strip.width(), 1 + 4 + 1);
    }

    #[test]
    fn test_window_pads_past_end() {
        let strip = Strip::new(vec!["ab".into()]);
        let glyphs = strip.window(2, 5);
        assert_eq!(glyphs.len(), 5);
        assert_eq!(text(&glyphs), "b    ");
    }

    #[test]
    fn test_window_splits_wide_char_at_edges() {
        let strip = Strip::new(vec!["東".into()]);
        // Starts on the continuation column.
        assert_eq!(text(&strip.window(2, 2)), "  ");
        // Ends on the first column of the wide char.
        assert_eq!(text(&strip.window(0, 2)), "  ");
        assert_eq!(strip.window(0, 3).len(), 3);
    }

    #[test]
    fn test_push_and_pop_relayout() {
        let mut strip = Strip::new(vec!["a".into()]);
        let before = strip.width();
        strip.push("bb");
        assert_eq!(strip.width(), before + 3 + 2);
        assert_eq!(strip.pop().as_deref(), Some("bb"));
        assert_eq!(strip.width(), before);
        assert_eq!(strip.item_count(), 1);
    }
}
