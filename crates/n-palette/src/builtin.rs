//! The canonical seed table — what the app ships with.
//!
//! Two themes share one set of ramps: lighter fg/bg tints toward
//! `--whitest` (100–400) and darker shades toward `--blackest` (600–900).
//! The seeds themselves are the 500 step. `light` is the default theme and
//! the one exported to the typed map.
//!
//! Channel mixing rounds exact halves away from zero. Earlier generated
//! files rounded them to even, so three `light` tokens moved by one step:
//!
//! | Token      | Before    | Now       |
//! |------------|-----------|-----------|
//! | `--fg-300` | `#849CC6` | `#849CC7` |
//! | `--bg-300` | `#E0ECFF` | `#E1ECFF` |
//! | `--fg-800` | `#1D307A` | `#1D307B` |

use crate::config::{PaletteConfig, RampSpec, ThemeSeeds};

/// Name of the theme exported to `colors.ts`.
pub const DEFAULT_THEME: &str = "light";

/// Tint stops: suffix → fraction toward `--whitest`.
const LIGHTER: [(u32, f64); 4] = [(100, 0.9), (200, 0.7), (300, 0.5), (400, 0.3)];

/// Shade stops: suffix → fraction toward `--blackest`.
const DARKER: [(u32, f64); 4] = [(600, 0.1), (700, 0.2), (800, 0.3), (900, 0.4)];

/// The built-in configuration.
#[must_use]
pub fn builtin_config() -> PaletteConfig {
    PaletteConfig {
        default_theme: DEFAULT_THEME.to_owned(),
        themes: vec![light(), dark()],
        ramps: builtin_ramps(),
    }
}

/// The ramps shared by every built-in theme.
#[must_use]
pub fn builtin_ramps() -> Vec<RampSpec> {
    vec![
        RampSpec::new("--fg", "--fg-500", "--whitest", &LIGHTER),
        RampSpec::new("--bg", "--bg-500", "--whitest", &LIGHTER),
        RampSpec::new("--fg", "--fg-500", "--blackest", &DARKER),
        RampSpec::new("--bg", "--bg-500", "--blackest", &DARKER),
    ]
}

fn light() -> ThemeSeeds {
    ThemeSeeds::new(
        "light",
        &[
            ("--fg-500", "#1C398E"),
            ("--bg-500", "#D5D9FF"),
            ("--whitest", "#ecfeff"),
            ("--blackest", "#1e1a4d"),
            ("--positive-500", "#30D48A"),
            ("--negative-500", "#D84B32"),
            ("--radius", "0.5rem"),
            ("--border-width", "1px"),
        ],
    )
}

fn dark() -> ThemeSeeds {
    ThemeSeeds::new(
        "dark",
        &[
            ("--fg-500", "#D5D9FF"),
            ("--bg-500", "#1C2452"),
            ("--whitest", "#ecfeff"),
            ("--blackest", "#0B0A1F"),
            ("--positive-500", "#3DDC97"),
            ("--negative-500", "#F0664D"),
            ("--radius", "0.5rem"),
            ("--border-width", "1px"),
        ],
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
