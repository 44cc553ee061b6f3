// SPDX-License-Identifier: MIT
//
// Token values: what an author may write for a seed, and the single text
// rendering every emitter uses.
//
//   "#1c398e"             → Hex        → "#1C398E"
//   "rgb(28 57 142 / .5)" → Rgba       → "rgb(28 57 142 / 0.50)"
//   "0.5rem"              → Literal    → "0.5rem"
//
// Because the stylesheet and the typed map both format through `Display`
// here, a token's value is byte-identical in both artifacts.

use std::fmt;

use crate::error::ColorError;
use crate::rgb::{Rgb, decode};

// ─── Alpha ───────────────────────────────────────────────────────────────────

/// Opacity stored as a whole percentage (0–100).
///
/// Keeping it integral makes the two-decimal rendering exact: 5% is always
/// `0.05` and 100% is always `1.00`, with no float formatting involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alpha(u8);

impl Alpha {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(100);

    /// Build from a percentage. Returns `None` above 100.
    #[must_use]
    pub const fn from_percent(percent: u8) -> Option<Self> {
        if percent <= 100 { Some(Self(percent)) } else { None }
    }

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Parse a CSS alpha number in `[0, 1]` with at most two decimals
    /// (`1`, `0.5`, `.05`, `1.00`).
    fn parse(s: &str) -> Option<Self> {
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) || frac.len() > 2 {
            return None;
        }

        let whole: u32 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let hundredths: u32 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u32>().ok()? * 10,
            _ => frac.parse().ok()?,
        };
        let percent = whole.checked_mul(100)?.checked_add(hundredths)?;
        u8::try_from(percent).ok().and_then(Self::from_percent)
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

// ─── ColorValue ──────────────────────────────────────────────────────────────

/// The value bound to a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorValue {
    /// Opaque color, rendered `#RRGGBB`.
    Hex(Rgb),
    /// Alpha-carrying color, rendered `rgb(R G B / A)`.
    Rgba(Rgb, Alpha),
    /// Non-color CSS value (a length, a keyword) carried through untouched.
    Literal(String),
}

impl ColorValue {
    /// Classify an author-written value.
    ///
    /// - `#…` must be a 6-digit hex color.
    /// - `rgb(…` must be the functional form `rgb(R G B / A)`.
    /// - Anything else non-empty is a literal. A literal may not contain
    ///   `;`, `{`, `}` or control characters, so it can never end its
    ///   declaration or block early.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Malformed`] for an empty value, a bad hex color,
    /// a bad functional color, or a literal with a forbidden character.
    pub fn parse(raw: &str) -> Result<Self, ColorError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(ColorError::malformed(raw, "empty value"));
        }
        if s.starts_with('#') {
            return decode(s).map(Self::Hex);
        }
        if s.starts_with("rgb(") {
            return parse_functional(s);
        }
        if s.chars().any(is_forbidden_in_literal) {
            return Err(ColorError::malformed(
                raw,
                "literal may not contain `;`, `{`, `}` or control characters",
            ));
        }
        Ok(Self::Literal(s.to_owned()))
    }

    /// The opaque color, if this value is eligible for ramps and opacity
    /// variants.
    #[must_use]
    pub const fn as_hex(&self) -> Option<Rgb> {
        match self {
            Self::Hex(c) => Some(*c),
            _ => None,
        }
    }

    /// Whether this value is a color (hex or functional).
    #[must_use]
    pub const fn is_color(&self) -> bool {
        matches!(self, Self::Hex(_) | Self::Rgba(..))
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(c) => fmt::Display::fmt(c, f),
            Self::Rgba(c, a) => write!(f, "rgb({} {} {} / {a})", c.r, c.g, c.b),
            Self::Literal(s) => f.write_str(s),
        }
    }
}

impl From<Rgb> for ColorValue {
    fn from(c: Rgb) -> Self {
        Self::Hex(c)
    }
}

fn is_forbidden_in_literal(c: char) -> bool {
    c.is_control() || matches!(c, ';' | '{' | '}')
}

fn parse_functional(s: &str) -> Result<ColorValue, ColorError> {
    const SHAPE: &str = "expected `rgb(R G B / A)`";

    let body = s
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ColorError::malformed(s, SHAPE))?;
    let (channels, alpha) = body
        .split_once('/')
        .ok_or_else(|| ColorError::malformed(s, SHAPE))?;

    let mut parts = channels.split_whitespace().map(str::parse::<u8>);
    let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ColorError::malformed(s, "channels must be three integers 0-255"));
    };

    let alpha = Alpha::parse(alpha.trim())
        .ok_or_else(|| ColorError::malformed(s, "alpha must be 0-1 with at most two decimals"))?;

    Ok(ColorValue::Rgba(Rgb::new(r, g, b), alpha))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
