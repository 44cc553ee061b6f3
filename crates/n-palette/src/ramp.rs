//! Ramp derivation — tints and shades interpolated between two seeds.
//!
//! Every stop is computed straight from the two seed endpoints; stops never
//! chain off each other, and a ramp can only reference seeds (not tokens
//! another ramp produced). Several ramps may share a prefix as long as their
//! suffixes do not collide.

use std::collections::BTreeMap;

use n_color::{ColorValue, Rgb, interpolate};
use tracing::debug;

use crate::config::RampSpec;
use crate::error::{PaletteError, Result};

/// Return `seeds` plus every token produced by `ramps`.
///
/// # Errors
///
/// - [`PaletteError::UnknownReference`] if a ramp names a token that is not a
///   seed of this theme.
/// - [`PaletteError::MalformedColor`] if a ramp endpoint is not a hex color.
/// - [`PaletteError::AmbiguousToken`] if a produced name is already taken by
///   a seed or by another stop.
pub fn derive_ramps(
    theme: &str,
    seeds: &BTreeMap<String, ColorValue>,
    ramps: &[RampSpec],
) -> Result<BTreeMap<String, ColorValue>> {
    let mut tokens = seeds.clone();

    for ramp in ramps {
        let base = resolve(theme, seeds, ramp, &ramp.base)?;
        let target = resolve(theme, seeds, ramp, &ramp.target)?;

        for stop in &ramp.stops {
            let name = ramp.token_name(stop);
            if tokens.contains_key(&name) {
                return Err(PaletteError::ambiguous(theme, &name));
            }
            let color = interpolate(base, target, stop.fraction);
            tokens.insert(name, ColorValue::Hex(color));
        }

        debug!(
            theme,
            prefix = %ramp.prefix,
            base = %ramp.base,
            target = %ramp.target,
            stops = ramp.stops.len(),
            "derived ramp"
        );
    }

    Ok(tokens)
}

/// Look up a ramp endpoint among the seeds and require an opaque color.
fn resolve(
    theme: &str,
    seeds: &BTreeMap<String, ColorValue>,
    ramp: &RampSpec,
    token: &str,
) -> Result<Rgb> {
    let value = seeds
        .get(token)
        .ok_or_else(|| PaletteError::UnknownReference {
            theme: theme.to_owned(),
            prefix: ramp.prefix.clone(),
            token: token.to_owned(),
        })?;

    value.as_hex().ok_or_else(|| PaletteError::MalformedColor {
        theme: theme.to_owned(),
        token: token.to_owned(),
        value: value.to_string(),
        reason: "ramp endpoints must be 6-digit hex colors",
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
