//! Hex color literal parsing
//!
//! Theme palettes map color slots to hex literals. Two forms are accepted:
//! - `#RGB` - 3-digit hex, each digit is doubled (e.g., `#F00` -> red)
//! - `#RRGGBB` - 6-digit hex
//!
//! Alpha forms (`#RGBA`, `#RRGGBBAA`) and functional notation (`rgb()`,
//! `hsl()`, named colors) are not part of the palette contract and are
//! rejected.

use std::fmt;
use std::str::FromStr;
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
    /// Invalid length (must be 3 or 6 hex chars after #)
    #[error("invalid color length {0}, expected 3 or 6")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// An RGB color decoded from a hex literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Parse a hex color string (`#RGB` or `#RRGGBB`).
    ///
    /// # Examples
    ///
    /// ```
    /// use windcfg::color::HexColor;
    ///
    /// let accent = HexColor::parse("#59C2FF").unwrap();
    /// assert_eq!((accent.r, accent.g, accent.b), (0x59, 0xC2, 0xFF));
    ///
    /// // Shorthand digits are doubled
    /// let red = HexColor::parse("#F00").unwrap();
    /// assert_eq!((red.r, red.g, red.b), (255, 0, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ColorError` if the input is empty, lacks the leading `#`,
    /// has a length other than 3 or 6 hex digits, or contains a non-hex
    /// character.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        let hex = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

        match hex.len() {
            3 => {
                let mut chars = hex.chars();
                let r = parse_hex_digit(chars.next().unwrap())? * 17;
                let g = parse_hex_digit(chars.next().unwrap())? * 17;
                let b = parse_hex_digit(chars.next().unwrap())? * 17;
                Ok(Self { r, g, b })
            }
            6 => {
                let r = parse_hex_pair(&hex[0..2])?;
                let g = parse_hex_pair(&hex[2..4])?;
                let b = parse_hex_pair(&hex[4..6])?;
                Ok(Self { r, g, b })
            }
            len => {
                // Report the first bad character rather than a length error
                // when both problems are present.
                for c in hex.chars() {
                    if !c.is_ascii_hexdigit() {
                        return Err(ColorError::InvalidHex(c));
                    }
                }
                Err(ColorError::InvalidLength(len))
            }
        }
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Check whether a string is a valid palette color literal.
///
/// Used by config validation; equivalent to `HexColor::parse(s).is_ok()`.
pub fn is_valid_hex(s: &str) -> bool {
    HexColor::parse(s).is_ok()
}

/// Parse a single hex digit (0-9, A-F, a-f) to u8 (0-15)
fn parse_hex_digit(c: char) -> Result<u8, ColorError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(ColorError::InvalidHex(c)),
    }
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut chars = s.chars();
    let high = parse_hex_digit(chars.next().unwrap())?;
    let low = parse_hex_digit(chars.next().unwrap())?;
    Ok(high * 16 + low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit() {
        let c = HexColor::parse("#0B0E14").unwrap();
        assert_eq!((c.r, c.g, c.b), (0x0B, 0x0E, 0x14));
    }

    #[test]
    fn test_parse_three_digit_doubles() {
        let c = HexColor::parse("#abc").unwrap();
        assert_eq!((c.r, c.g, c.b), (0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_parse_lowercase_and_uppercase() {
        assert_eq!(HexColor::parse("#ffb454"), HexColor::parse("#FFB454"));
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(HexColor::parse(""), Err(ColorError::Empty));
    }

    #[test]
    fn test_missing_hash() {
        assert_eq!(HexColor::parse("59C2FF"), Err(ColorError::MissingHash));
    }

    #[test]
    fn test_alpha_forms_rejected() {
        assert_eq!(HexColor::parse("#F00F"), Err(ColorError::InvalidLength(4)));
        assert_eq!(HexColor::parse("#59C2FF80"), Err(ColorError::InvalidLength(8)));
    }

    #[test]
    fn test_invalid_hex_char() {
        assert_eq!(HexColor::parse("#GG0000"), Err(ColorError::InvalidHex('G')));
    }

    #[test]
    fn test_invalid_char_beats_length() {
        // A 5-char value with a bad char reports the char, not the length
        assert_eq!(HexColor::parse("#12z4"), Err(ColorError::InvalidHex('z')));
    }

    #[test]
    fn test_display_round_trip() {
        let c = HexColor::parse("#7fd962").unwrap();
        assert_eq!(c.to_string(), "#7FD962");
        assert_eq!(HexColor::parse(&c.to_string()).unwrap(), c);
    }

    #[test]
    fn test_from_str() {
        let c: HexColor = "#FFB454".parse().unwrap();
        assert_eq!((c.r, c.g, c.b), (0xFF, 0xB4, 0x54));
    }

    #[test]
    fn test_is_valid_hex() {
        assert!(is_valid_hex("#0F131A"));
        assert!(is_valid_hex("#fff"));
        assert!(!is_valid_hex("#ff"));
        assert!(!is_valid_hex("blue"));
        assert!(!is_valid_hex(""));
    }
}
