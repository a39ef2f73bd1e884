//! Hex color conversions for theme and styling options.

use crate::{Error, Result};

/// Parse a hex color into its `(r, g, b)` channels.
///
/// A leading `#` is stripped. Three digits are treated as CSS shorthand
/// (each digit doubled, so `f` becomes `ff`); any other length must be the
/// full six-digit form. Strings that are neither, or that contain non-hex
/// characters, are an [`Error::Color`].
///
/// # Examples
///
/// ```
/// use quill_helpers::color::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#ffffff")?, (255, 255, 255));
/// assert_eq!(hex_to_rgb("fff")?, (255, 255, 255));
/// assert_eq!(hex_to_rgb("1a2b3c")?, (26, 43, 60));
/// # Ok::<(), quill_helpers::Error>(())
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

    match digits.len() {
        3 => {
            let r = hex_digit(digits[0], hex)?;
            let g = hex_digit(digits[1], hex)?;
            let b = hex_digit(digits[2], hex)?;
            // Shorthand doubles each digit: 0xf -> 0xff.
            Ok((r * 17, g * 17, b * 17))
        },
        6 => Ok((
            hex_pair(digits[0], digits[1], hex)?,
            hex_pair(digits[2], digits[3], hex)?,
            hex_pair(digits[4], digits[5], hex)?,
        )),
        len => Err(Error::Color(format!(
            "expected 3 or 6 hex digits in '{hex}', got {len}"
        ))),
    }
}

/// Convert a hex color and opacity into a CSS `rgba()` string.
///
/// The channel values are the ones parsed by [`hex_to_rgb`] on the same
/// input, never bytes read back out of the raw string.
///
/// # Examples
///
/// ```
/// use quill_helpers::color::hex_to_rgba;
///
/// assert_eq!(hex_to_rgba("#1a2b3c", 0.5)?, "rgba(26,43,60,0.5)");
/// # Ok::<(), quill_helpers::Error>(())
/// ```
pub fn hex_to_rgba(hex: &str, opacity: f64) -> Result<String> {
    let (r, g, b) = hex_to_rgb(hex)?;
    Ok(format!("rgba({r},{g},{b},{opacity})"))
}

#[allow(clippy::cast_possible_truncation)] // to_digit(16) yields at most 15
fn hex_digit(byte: u8, source: &str) -> Result<u8> {
    (byte as char)
        .to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| {
            Error::Color(format!(
                "invalid hex digit '{}' in '{source}'",
                byte as char
            ))
        })
}

fn hex_pair(high: u8, low: u8, source: &str) -> Result<u8> {
    Ok(hex_digit(high, source)? * 16 + hex_digit(low, source)?)
}
