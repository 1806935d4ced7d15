//! Farbpalette, durchgeschaltet mit dem Farb-Taster

use crate::types::NamedColor;

/// Standard-Palette: Rot, Grün, Blau, Gelb, Lila
pub const DEFAULT_PALETTE: [NamedColor; 5] = [
    NamedColor::new("Red", 255, 0, 0),
    NamedColor::new("Green", 0, 255, 0),
    NamedColor::new("Blue", 0, 0, 255),
    NamedColor::new("Yellow", 255, 255, 0),
    NamedColor::new("Purple", 128, 0, 128),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

/// Feste Farbliste mit Cursor
#[derive(Debug, Clone)]
pub struct ColorPalette {
    colors: &'static [NamedColor],
    cursor: usize,
}

impl ColorPalette {
    /// Erstellt eine Palette, Cursor steht auf der ersten Farbe
    pub fn new(colors: &'static [NamedColor]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors, cursor: 0 })
    }

    /// Schaltet zur nächsten Farbe, nach der letzten wieder zur ersten
    pub fn advance(&mut self) -> NamedColor {
        self.cursor = (self.cursor + 1) % self.colors.len();
        self.current()
    }

    pub fn current(&self) -> NamedColor {
        self.colors[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            colors: &DEFAULT_PALETTE,
            cursor: 0,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PaletteError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaletteError::Empty => defmt::write!(fmt, "palette is empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let mut palette = ColorPalette::default();
        for _ in 0..DEFAULT_PALETTE.len() {
            palette.advance();
        }
        assert_eq!(palette.cursor(), 0);
        assert_eq!(palette.current().name, "Red");
    }

    #[test]
    fn test_cursor_two_is_blue() {
        let mut palette = ColorPalette::default();
        palette.advance();
        let color = palette.advance();
        assert_eq!(palette.cursor(), 2);
        assert_eq!(color.name, "Blue");
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(ColorPalette::new(&[]).unwrap_err(), PaletteError::Empty);
    }
}
