//! # n-palette — Theme palette generation engine
//!
//! Expands a handful of hand-authored seed colors per theme into every
//! token the stylesheets reference: tints, shades, and opacity variants.
//! The output replaces `color-mix()` for browsers that cannot evaluate it,
//! so every value is materialized up front.
//!
//! # Architecture
//!
//! ```text
//! PaletteConfig (themes + shared ramps)
//!     │
//!     ▼
//! config.rs:  validate names, default theme, stop fractions
//!     │
//!     ▼
//! ramp.rs:    seeds ∪ interpolated tints/shades
//!     │
//!     ▼
//! opacity.rs: + 20 alpha variants per hex color (single pass)
//!     │
//!     ▼
//! palette.rs: PaletteSet (one immutable Palette per theme)
//!     │
//!     ▼
//! emit.rs:    colors.css (all themes) + colors.ts (default theme)
//! ```
//!
//! # Color Space
//!
//! All arithmetic happens on gamma-encoded sRGB bytes via `n-color`. The
//! values must match a plain byte-wise mix, not a perceptual blend.

pub mod builtin;
pub mod config;
pub mod emit;
pub mod error;
pub mod opacity;
pub mod palette;
pub mod ramp;

pub use config::{PaletteConfig, RampSpec, Stop, ThemeSeeds};
pub use emit::Artifacts;
pub use error::{PaletteError, Result};
pub use palette::{Palette, PaletteSet, assemble};
