// src/parse.rs
use crate::error::PatternError;
use image::Rgb;

/// Canvas dimensions in pixels. Both sides are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

pub type Color = Rgb<u8>;

/// Decimal integer with no sign, no leading zero and a value of at least 1.
fn positive_dimension(digits: &str) -> Option<u32> {
    let first = digits.bytes().next()?;
    if !(b'1'..=b'9').contains(&first) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Parse size string like a "1200x600" (separator may also be an uppercase `X`).
pub fn parse_size(s: &str) -> Result<Size, PatternError> {
    let invalid = || PatternError::InvalidSizeFormat(s.to_string());

    let sep = s.find(|c: char| c == 'x' || c == 'X').ok_or_else(invalid)?;
    let width = positive_dimension(&s[..sep]).ok_or_else(invalid)?;
    let height = positive_dimension(&s[sep + 1..]).ok_or_else(invalid)?;

    Ok(Size { width, height })
}

/// Parse color string like a "#007fff" into its red, green and blue bytes.
pub fn parse_color(s: &str) -> Result<Color, PatternError> {
    let invalid = || PatternError::InvalidColorFormat(s.to_string());

    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    // All six bytes are ASCII here, so byte slicing stays on char boundaries.
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
