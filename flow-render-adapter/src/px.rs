use alloc::string::String;
use core::fmt;

/// Why a CSS-style pixel length could not be turned into a height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsePxError {
    /// The input was empty or only whitespace (or just `"px"`).
    Empty,
    /// The input is not a number, with or without a `px` suffix.
    Invalid(String),
    Negative,
    NotFinite,
    /// The rounded value does not fit in a `u32`.
    TooLarge,
}

impl fmt::Display for ParsePxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty pixel length"),
            Self::Invalid(input) => write!(f, "invalid pixel length `{input}`"),
            Self::Negative => f.write_str("pixel length must not be negative"),
            Self::NotFinite => f.write_str("pixel length must be finite"),
            Self::TooLarge => f.write_str("pixel length is too large"),
        }
    }
}

impl core::error::Error for ParsePxError {}

/// Parses a pixel length such as `"12px"`, `"12"` or `" 12.5px "` into whole pixels.
///
/// Surrounding whitespace and a trailing `px` unit are accepted. Fractional values are rounded
/// to the nearest pixel, halves away from zero.
pub fn parse_px(input: &str) -> Result<u32, ParsePxError> {
    let trimmed = input.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    if number.is_empty() {
        return Err(ParsePxError::Empty);
    }

    let value: f64 = number
        .parse()
        .map_err(|_| ParsePxError::Invalid(String::from(trimmed)))?;
    if !value.is_finite() {
        return Err(ParsePxError::NotFinite);
    }
    if value < 0.0 {
        return Err(ParsePxError::Negative);
    }

    // `f64::round` needs std; values here are non-negative.
    let rounded = value + 0.5;
    if rounded >= u32::MAX as f64 + 1.0 {
        return Err(ParsePxError::TooLarge);
    }
    Ok(rounded as u32)
}
