// SPDX-License-Identifier: MIT
//
// 8-bit sRGB triples: hex decode/encode and byte-space interpolation.
//
// Single-character channel names (r, g, b, t) follow the usual color-math
// convention.
#![allow(clippy::many_single_char_names)]

use std::fmt;

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque color as three gamma-encoded sRGB bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` / `RRGGBB`. See [`decode`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Malformed`] if the string is not exactly six hex
    /// digits after an optional `#`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        decode(s)
    }

    /// Render as `#RRGGBB`. See [`encode`].
    #[must_use]
    pub fn to_hex(self) -> String {
        encode(self)
    }

    /// Interpolate toward `other`. See [`interpolate`].
    #[must_use]
    pub fn mix(self, other: Self, fraction: f64) -> Self {
        interpolate(self, other, fraction)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        (c.r, c.g, c.b)
    }
}

// ─── Codec ───────────────────────────────────────────────────────────────────

/// Parse a 6-digit hex color with an optional leading `#`.
///
/// Digits may be upper or lower case. Short (`#RGB`) and alpha
/// (`#RRGGBBAA`) forms are rejected: every seed must name an exact byte
/// triple.
///
/// # Errors
///
/// Returns [`ColorError::Malformed`] if the remainder is not exactly six
/// hex digits.
pub fn decode(s: &str) -> Result<Rgb, ColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let bytes = digits.as_bytes();
    if bytes.len() != 6 {
        return Err(ColorError::malformed(s, "expected exactly 6 hex digits"));
    }

    let channel = |i: usize| {
        parse_hex_byte(&bytes[i..i + 2])
            .ok_or_else(|| ColorError::malformed(s, "invalid hex digit"))
    };
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Render a color as `#RRGGBB`, uppercase, each channel zero-padded.
#[must_use]
pub fn encode(color: Rgb) -> String {
    color.to_string()
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some((hi << 4) | lo)
}

// ─── Interpolation ───────────────────────────────────────────────────────────

/// Linear interpolation from `from` toward `to` in raw byte space.
///
/// Per channel: `round(a + (b - a) * fraction)`. `fraction` = 0.0 returns
/// `from`, 1.0 returns `to`. Rounding is half away from zero, so an exact
/// midpoint such as 127.5 lands on 128.
///
/// Results are clamped to 0–255, so fractions outside `[0, 1]` saturate
/// instead of wrapping.
#[must_use]
pub fn interpolate(from: Rgb, to: Rgb, fraction: f64) -> Rgb {
    Rgb::new(
        lerp_channel(from.r, to.r, fraction),
        lerp_channel(from.g, to.g, fraction),
        lerp_channel(from.b, to.b, fraction),
    )
}

/// Unfused multiply-add: the materialized values were produced with a
/// separate multiply and add, and `.5` boundaries are sensitive to it.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
