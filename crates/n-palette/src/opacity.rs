//! Opacity variants — every opaque color re-expressed at 5% steps.
//!
//! For each hex token `t` and each step `p` in 5, 10, …, 100 the expander adds
//! `"{t}-{p:02}"` → `rgb(R G B / p/100)`. Expansion reads only the snapshot
//! it is given and writes into a fresh map, so variants are never expanded
//! again. Literals and functional colors get no variants.

use std::collections::BTreeMap;

use n_color::{Alpha, ColorValue};
use tracing::debug;

use crate::error::{PaletteError, Result};

/// Opacity steps, ascending: 5% through 100% inclusive.
pub const OPACITY_STEPS: [Alpha; 20] = {
    let mut steps = [Alpha::OPAQUE; 20];
    let mut percent = 5;
    let mut i = 0;
    while i < steps.len() {
        steps[i] = match Alpha::from_percent(percent) {
            Some(alpha) => alpha,
            None => panic!("opacity step above 100%"),
        };
        percent += 5;
        i += 1;
    }
    steps
};

/// Name of the variant of `token` at `alpha`: `--fg-500` at 5% → `--fg-500-05`.
#[must_use]
pub fn variant_name(token: &str, alpha: Alpha) -> String {
    format!("{token}-{:02}", alpha.percent())
}

/// Return `snapshot` plus 20 opacity variants for each of its hex tokens.
///
/// # Errors
///
/// Returns [`PaletteError::AmbiguousToken`] if a variant name is already
/// taken (e.g. a seed literally named `--x-05` next to a color `--x`).
pub fn expand(
    theme: &str,
    snapshot: &BTreeMap<String, ColorValue>,
) -> Result<BTreeMap<String, ColorValue>> {
    let mut tokens = snapshot.clone();
    let mut sources = 0usize;

    for (name, value) in snapshot {
        let Some(rgb) = value.as_hex() else {
            continue;
        };
        sources += 1;

        for alpha in OPACITY_STEPS {
            let variant = variant_name(name, alpha);
            if tokens.contains_key(&variant) {
                return Err(PaletteError::ambiguous(theme, &variant));
            }
            tokens.insert(variant, ColorValue::Rgba(rgb, alpha));
        }
    }

    debug!(
        theme,
        sources,
        variants = sources * OPACITY_STEPS.len(),
        "expanded opacity variants"
    );

    Ok(tokens)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
