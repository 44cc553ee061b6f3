// SPDX-License-Identifier: MIT
//
// n-color — Color arithmetic for n-tokens.
//
// Everything here works on raw, gamma-encoded sRGB bytes. The generated
// tokens are a fallback for browsers without `color-mix()`, so they must
// reproduce the materialized values exactly: plain linear interpolation of
// the 0–255 channel bytes, no linearization and no perceptual space.
//
//   "#1C398E" ──decode──▶ Rgb { r, g, b } ──interpolate──▶ Rgb ──encode──▶ "#RRGGBB"
//
// `ColorValue` classifies author-written seed strings into hex colors,
// functional `rgb(R G B / A)` colors, and passthrough literals, and owns the
// one canonical text rendering shared by every emitter.

pub mod error;
pub mod rgb;
pub mod value;

pub use error::ColorError;
pub use rgb::{Rgb, decode, encode, interpolate};
pub use value::{Alpha, ColorValue};
