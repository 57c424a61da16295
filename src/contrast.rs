//! Foreground selection for text drawn on top of a palette swatch.

use ratatui::style::Color;

/// Text color that stays readable on a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foreground {
    /// Black text, for bright backgrounds.
    Dark,
    /// White text, for dim backgrounds.
    Light,
}

impl Foreground {
    pub fn color(self) -> Color {
        match self {
            Foreground::Dark => Color::Black,
            Foreground::Light => Color::White,
        }
    }
}

/// Pick a foreground for `hex` using the BT.601 luma weights.
///
/// Anything without a leading `#` gets dark text. Digits that don't decode
/// count as a dim background, so they get light text.
pub fn foreground_for(hex: &str) -> Foreground {
    if !hex.starts_with('#') {
        return Foreground::Dark;
    }
    let Some([r, g, b]) = parse_hex(hex) else {
        return Foreground::Light;
    };

    let luma = (299.0 * f64::from(r) + 587.0 * f64::from(g) + 114.0 * f64::from(b)) / 1000.0;
    if luma >= 128.0 {
        Foreground::Dark
    } else {
        Foreground::Light
    }
}

/// Decode the first six hex digits after `#` into RGB bytes.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?.get(..6)?;
    let mut rgb = [0u8; 3];
    hex::decode_to_slice(digits, &mut rgb).ok()?;
    Some(rgb)
}

/// Swatch color for a card, `None` when the hex code can't be drawn.
pub fn swatch_color(hex: &str) -> Option<Color> {
    parse_hex(hex).map(|[r, g, b]| Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        assert_eq!(foreground_for("#FFFFFF"), Foreground::Dark);
        assert_eq!(foreground_for("#000000"), Foreground::Light);
    }

    #[test]
    fn test_mid_gray_ties_to_dark() {
        // 128 * (299 + 587 + 114) / 1000 == 128
        assert_eq!(foreground_for("#808080"), Foreground::Dark);
        assert_eq!(foreground_for("#7F7F7F"), Foreground::Light);
    }

    #[test]
    fn test_weights() {
        // Pure green is bright enough, pure blue is not.
        assert_eq!(foreground_for("#00FF00"), Foreground::Dark);
        assert_eq!(foreground_for("#0000FF"), Foreground::Light);
        assert_eq!(foreground_for("#ff0000"), Foreground::Light);
    }

    #[test]
    fn test_missing_hash_is_dark() {
        assert_eq!(foreground_for("000000"), Foreground::Dark);
        assert_eq!(foreground_for(""), Foreground::Dark);
    }

    #[test]
    fn test_undecodable_is_light() {
        assert_eq!(foreground_for("#FFF"), Foreground::Light);
        assert_eq!(foreground_for("#GGGGGG"), Foreground::Light);
    }

    #[test]
    fn test_parse_hex_ignores_trailing_digits() {
        assert_eq!(parse_hex("#1A2B3C"), Some([0x1a, 0x2b, 0x3c]));
        assert_eq!(parse_hex("#1A2B3CFF"), Some([0x1a, 0x2b, 0x3c]));
        assert_eq!(parse_hex("1A2B3C"), None);
        assert_eq!(swatch_color("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_foreground_color() {
        assert_eq!(Foreground::Dark.color(), Color::Black);
        assert_eq!(Foreground::Light.color(), Color::White);
    }
}
