/// Gradient palette ordered densest to sparsest, indexed by a continuous
/// brightness ratio.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientPalette {
    chars: Vec<char>,
}

impl GradientPalette {
    pub fn new(chars: impl Into<String>) -> Self {
        let chars: Vec<char> = chars.into().chars().collect();
        assert!(chars.len() >= 2, "gradient palette must contain at least two glyphs");
        Self { chars }
    }

    /// Default 12-glyph gradient.
    pub fn standard() -> Self {
        Self::new("@#%$&*+=-:. ")
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Map a brightness in [0, 255] to a glyph. The index is floored, so
    /// only a full 255 reaches the sparsest glyph.
    pub fn glyph_for(&self, brightness: f32) -> char {
        let span = (self.chars.len() - 1) as f32;
        let index = ((brightness.clamp(0.0, 255.0) / 255.0) * span).floor() as usize;
        self.chars[index.min(self.chars.len() - 1)]
    }
}

/// Ascending half-open brightness intervals. The first rung whose upper
/// bound exceeds the brightness wins; the blank glyph covers the rest.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdLadder {
    rungs: Vec<(f32, char)>,
    blank: char,
}

impl ThresholdLadder {
    pub fn new(rungs: Vec<(f32, char)>, blank: char) -> Self {
        assert!(
            rungs.windows(2).all(|pair| pair[0].0 < pair[1].0),
            "ladder bounds must be strictly ascending"
        );
        Self { rungs, blank }
    }

    /// Dot stippling glyphs.
    pub fn dots() -> Self {
        Self::new(vec![(50.0, '●'), (100.0, '◉'), (150.0, '○'), (200.0, '◌')], ' ')
    }

    /// Block shading glyphs.
    pub fn blocks() -> Self {
        Self::new(vec![(50.0, '█'), (100.0, '▓'), (150.0, '▒'), (200.0, '░')], ' ')
    }

    pub fn glyph_for(&self, brightness: f32) -> char {
        self.rungs
            .iter()
            .find(|(bound, _)| brightness < *bound)
            .map(|&(_, glyph)| glyph)
            .unwrap_or(self.blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints() {
        let palette = GradientPalette::standard();
        assert_eq!(palette.glyph_for(0.0), '@');
        assert_eq!(palette.glyph_for(255.0), ' ');
    }

    #[test]
    fn gradient_index_is_floored() {
        let palette = GradientPalette::standard();
        // 254/255 * 11 = 10.95..., which must still floor to index 10.
        assert_eq!(palette.glyph_for(254.0), '.');
    }

    #[test]
    fn gradient_clamps_out_of_range_brightness() {
        let palette = GradientPalette::standard();
        assert_eq!(palette.glyph_for(-10.0), '@');
        assert_eq!(palette.glyph_for(300.0), ' ');
    }

    #[test]
    fn ladder_boundaries_are_half_open() {
        let dots = ThresholdLadder::dots();
        assert_eq!(dots.glyph_for(49.0), '●');
        assert_eq!(dots.glyph_for(50.0), '◉');
        assert_eq!(dots.glyph_for(199.0), '◌');
        assert_eq!(dots.glyph_for(200.0), ' ');
    }

    #[test]
    fn ladders_are_exhaustive_over_brightness_range() {
        let dots = ThresholdLadder::dots();
        let blocks = ThresholdLadder::blocks();
        for value in 0..=255 {
            let brightness = value as f32;
            assert!("●◉○◌ ".contains(dots.glyph_for(brightness)));
            assert!("█▓▒░ ".contains(blocks.glyph_for(brightness)));
        }
    }
}
