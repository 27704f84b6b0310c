//! Hex color parsing for palette entries
//!
//! Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`. Short forms double
//! each digit; forms without alpha are opaque.

use image::Rgba;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be 3, 4, 6, or 8 hex chars after #)
    #[error("invalid color length {0}, expected 3, 4, 6, or 8")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Parse a hex color string into an RGBA color.
///
/// ```
/// use merry_sprites::color::parse_hex;
///
/// assert_eq!(parse_hex("#00D4FF").unwrap(), image::Rgba([0, 212, 255, 255]));
/// assert_eq!(parse_hex("#F00").unwrap(), image::Rgba([255, 0, 0, 255]));
/// ```
pub fn parse_hex(s: &str) -> Result<Rgba<u8>, ColorError> {
    let hex = match s.strip_prefix('#') {
        Some(hex) => hex,
        None if s.is_empty() => return Err(ColorError::Empty),
        None => return Err(ColorError::MissingHash),
    };

    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8).ok_or(ColorError::InvalidHex(c)))
        .collect::<Result<Vec<u8>, _>>()?;

    match digits.as_slice() {
        [r, g, b] => Ok(Rgba([r * 17, g * 17, b * 17, 255])),
        [r, g, b, a] => Ok(Rgba([r * 17, g * 17, b * 17, a * 17])),
        [r1, r0, g1, g0, b1, b0] => Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, 255])),
        [r1, r0, g1, g0, b1, b0, a1, a0] => {
            Ok(Rgba([r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0, a1 * 16 + a0]))
        }
        other => Err(ColorError::InvalidLength(other.len())),
    }
}

/// Returns true if `s` is exactly `#` followed by six hex digits.
pub fn is_rrggbb(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Replace the alpha channel of a color.
pub fn with_alpha(color: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let [r, g, b, _] = color.0;
    Rgba([r, g, b, alpha])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rrggbb() {
        assert_eq!(parse_hex("#F5E6D3"), Ok(Rgba([245, 230, 211, 255])));
        assert_eq!(parse_hex("#3c2415"), Ok(Rgba([60, 36, 21, 255])));
    }

    #[test]
    fn test_parse_rrggbbaa() {
        assert_eq!(parse_hex("#00D4FF80"), Ok(Rgba([0, 212, 255, 128])));
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!(parse_hex("#FFF"), Ok(Rgba([255, 255, 255, 255])));
        assert_eq!(parse_hex("#0F08"), Ok(Rgba([0, 255, 0, 136])));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hex(""), Err(ColorError::Empty));
        assert_eq!(parse_hex("87CEEB"), Err(ColorError::MissingHash));
        assert_eq!(parse_hex("#87CEE"), Err(ColorError::InvalidLength(5)));
        assert_eq!(parse_hex("#87CEXB"), Err(ColorError::InvalidHex('X')));
    }

    #[test]
    fn test_is_rrggbb() {
        assert!(is_rrggbb("#87CEEB"));
        assert!(!is_rrggbb("#87CEEB80"));
        assert!(!is_rrggbb("#FFF"));
        assert!(!is_rrggbb("87CEEBA"));
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(with_alpha(Rgba([0, 212, 255, 255]), 128), Rgba([0, 212, 255, 128]));
    }
}
