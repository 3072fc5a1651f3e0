use std::fmt;

/// Rendered output: one string per visited source row, one glyph per
/// visited column. Every row of a grid has the same glyph count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextGrid {
    lines: Vec<String>,
}

impl TextGrid {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Output rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Glyphs per row, 0 for an empty grid.
    pub fn width(&self) -> usize {
        self.lines.first().map(|line| line.chars().count()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for TextGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
