use std::fmt;

use serde::{Deserialize, Serialize};

/// Opacity applied to every derived series fill.
pub const FILL_ALPHA: f64 = 0.1;

/// Fill used when a series color is not `#`-prefixed hex.
pub const FALLBACK_FILL: TranslucentFill = TranslucentFill {
    red: 0.0,
    green: 0.0,
    blue: 0.0,
    alpha: FILL_ALPHA,
};

/// Low-opacity fill derived from a series color.
///
/// Channels use the 0..=255 scale and are kept as `f64` so that malformed hex
/// pairs survive as `NaN` instead of being clamped to a default.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TranslucentFill {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl TranslucentFill {
    /// Returns `true` when any channel failed to parse.
    #[must_use]
    pub fn has_nan_channel(self) -> bool {
        self.red.is_nan() || self.green.is_nan() || self.blue.is_nan()
    }
}

impl PartialEq for TranslucentFill {
    // NaN channels compare equal so the derivation stays observably deterministic.
    fn eq(&self, other: &Self) -> bool {
        fn same(a: f64, b: f64) -> bool {
            a == b || (a.is_nan() && b.is_nan())
        }
        same(self.red, other.red)
            && same(self.green, other.green)
            && same(self.blue, other.blue)
            && same(self.alpha, other.alpha)
    }
}

impl fmt::Display for TranslucentFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// Converts a series color into its translucent fill.
///
/// Only `#`-prefixed input is parsed: the three two-character pairs after the
/// `#` become red, green and blue. Anything else yields [`FALLBACK_FILL`].
/// Pairs are not validated; a pair without a leading hex digit becomes `NaN`.
#[must_use]
pub fn color_to_translucent_fill(color: &str) -> TranslucentFill {
    let Some(hex) = color.strip_prefix('#') else {
        tracing::debug!(color, "series color is not hex, using fallback fill");
        return FALLBACK_FILL;
    };

    let chars: Vec<char> = hex.chars().collect();
    let pair = |start: usize| -> f64 {
        let start = start.min(chars.len());
        let end = (start + 2).min(chars.len());
        let text: String = chars[start..end].iter().collect();
        parse_hex_prefix(&text)
    };

    let fill = TranslucentFill {
        red: pair(0),
        green: pair(2),
        blue: pair(4),
        alpha: FILL_ALPHA,
    };
    if fill.has_nan_channel() {
        tracing::debug!(color, "series color has malformed hex channels");
    }
    fill
}

/// Lenient base-16 prefix parse: optional leading whitespace, sign and `0x`,
/// then the longest run of hex digits. No digits at all yields `NaN`.
fn parse_hex_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);

    let mut value: Option<f64> = None;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(16) else {
            break;
        };
        value = Some(value.unwrap_or(0.0) * 16.0 + f64::from(digit));
    }

    match value {
        Some(v) if negative && v != 0.0 => -v,
        Some(v) => v,
        None => f64::NAN,
    }
}
