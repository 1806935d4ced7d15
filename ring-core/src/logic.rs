//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::DisplayState;

/// Dimmt eine Farbe kanalweise auf `fraction / 255`
///
/// Ganzzahlige Division, das Ergebnis ist nie heller als das Original.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use ring_core::dim;
/// let red = RGB8 { r: 200, g: 0, b: 0 };
/// assert_eq!(dim(red, 100), RGB8 { r: 78, g: 0, b: 0 });
/// ```
pub fn dim(color: RGB8, fraction: u8) -> RGB8 {
    let scale = |channel: u8| (u16::from(channel) * u16::from(fraction) / 255) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Wertet ein Byte der Debug-Konsole aus
///
/// Nur ASCII-Ziffern '0'..='6' ergeben einen Zustand, alles andere
/// (auch CR/LF) wird ignoriert.
pub fn parse_console_byte(byte: u8) -> Option<DisplayState> {
    match byte {
        b'0'..=b'6' => Some(DisplayState::from(byte - b'0')),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_zero_is_black() {
        let color = RGB8 {
            r: 255,
            g: 17,
            b: 1,
        };
        assert_eq!(dim(color, 0), RGB8 { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_dim_full_is_identity() {
        let color = RGB8 {
            r: 255,
            g: 17,
            b: 1,
        };
        assert_eq!(dim(color, 255), color);
    }

    #[test]
    fn test_dim_truncates() {
        // 255 * 40 / 255 = 40, 10 * 40 / 255 = 1.56 -> 1
        let color = RGB8 {
            r: 255,
            g: 10,
            b: 6,
        };
        assert_eq!(dim(color, 40), RGB8 { r: 40, g: 1, b: 0 });
    }

    #[test]
    fn test_parse_console_digits() {
        assert_eq!(parse_console_byte(b'0'), Some(DisplayState::DriveForward));
        assert_eq!(parse_console_byte(b'4'), Some(DisplayState::Stop));
        assert_eq!(parse_console_byte(b'6'), Some(DisplayState::AtHome));
    }

    #[test]
    fn test_parse_console_ignores_other_bytes() {
        for byte in [b'7', b'9', b'a', b'\r', b'\n', b' ', 0u8, 0xFF] {
            assert_eq!(parse_console_byte(byte), None);
        }
    }
}
