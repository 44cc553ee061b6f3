//! Generator configuration — seed themes and ramp specs.
//!
//! A [`PaletteConfig`] is plain immutable data. It is passed explicitly to
//! [`assemble`](crate::palette::assemble); nothing here is global. The
//! canonical table lives in [`builtin`](crate::builtin); a TOML file with the
//! same shape can replace it:
//!
//! ```toml
//! default_theme = "light"
//!
//! [[theme]]
//! name = "light"
//! seeds = { "--fg-500" = "#1C398E", "--whitest" = "#ecfeff", "--radius" = "0.5rem" }
//!
//! [[ramp]]
//! prefix = "--fg"
//! base = "--fg-500"
//! target = "--whitest"
//! stops = [{ suffix = 100, fraction = 0.9 }, { suffix = 200, fraction = 0.7 }]
//! ```
//!
//! Themes are an array so declaration order survives parsing; that order is
//! the block order of the stylesheet.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{PaletteError, Result};

// ---------------------------------------------------------------------------
// PaletteConfig
// ---------------------------------------------------------------------------

/// Every input the generator needs for one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    /// The theme exported to the typed map.
    pub default_theme: String,

    /// Themes in declaration order.
    #[serde(rename = "theme")]
    pub themes: Vec<ThemeSeeds>,

    /// Ramps shared by every theme.
    #[serde(rename = "ramp", default)]
    pub ramps: Vec<RampSpec>,
}

impl PaletteConfig {
    /// Parse a TOML document. `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Config`] if the document does not match the
    /// config shape.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| PaletteError::Config {
            origin: origin.to_owned(),
            source,
        })
    }

    /// Read and parse a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Io`] if the file cannot be read and
    /// [`PaletteError::Config`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| PaletteError::io(path, e))?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Look up a theme by name.
    #[must_use]
    pub fn theme(&self, name: &str) -> Option<&ThemeSeeds> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Check the structural rules that do not depend on color values:
    /// theme names are valid and unique, the default theme exists, every
    /// ramp stop names a custom property, and every ramp fraction is a
    /// finite number in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for theme in &self.themes {
            if !is_valid_theme_name(&theme.name) {
                return Err(PaletteError::InvalidThemeName {
                    theme: theme.name.clone(),
                });
            }
            if !seen.insert(theme.name.as_str()) {
                return Err(PaletteError::DuplicateTheme {
                    theme: theme.name.clone(),
                });
            }
        }

        if self.theme(&self.default_theme).is_none() {
            return Err(PaletteError::UnknownTheme {
                theme: self.default_theme.clone(),
            });
        }

        for ramp in &self.ramps {
            for stop in &ramp.stops {
                let token = ramp.token_name(stop);
                if !is_valid_token_name(&token) {
                    return Err(PaletteError::invalid_token(
                        format!("ramp `{}`", ramp.prefix),
                        &token,
                    ));
                }
                if !(0.0..=1.0).contains(&stop.fraction) {
                    return Err(PaletteError::InvalidStop {
                        prefix: ramp.prefix.clone(),
                        suffix: stop.suffix.clone(),
                        fraction: stop.fraction,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Theme names end up in a CSS class selector (`.theme-<name>`).
#[must_use]
pub fn is_valid_theme_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Token names are CSS custom properties: `--` followed by at least one
/// of A-Z, a-z, 0-9, `-`, `_`.
#[must_use]
pub fn is_valid_token_name(name: &str) -> bool {
    name.strip_prefix("--").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    })
}

// ---------------------------------------------------------------------------
// ThemeSeeds
// ---------------------------------------------------------------------------

/// The author-supplied seed tokens of one theme, as raw strings.
///
/// Values are classified later (hex, functional, literal) so that a
/// malformed color is reported with its theme and token. Seeds stay a list
/// so a token written twice reaches the builder and is rejected there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSeeds {
    pub name: String,
    #[serde(deserialize_with = "seeds_from_toml")]
    pub seeds: Vec<(String, String)>,
}

impl ThemeSeeds {
    #[must_use]
    pub fn new(name: &str, seeds: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_owned(),
            seeds: seeds
                .iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        }
    }

    /// Raw value of the first seed named `token`.
    #[must_use]
    pub fn seed(&self, token: &str) -> Option<&str> {
        self.seeds
            .iter()
            .find_map(|(k, v)| (k == token).then_some(v.as_str()))
    }
}

// TOML already rejects a key repeated within one table.
fn seeds_from_toml<'de, D: Deserializer<'de>>(
    de: D,
) -> std::result::Result<Vec<(String, String)>, D::Error> {
    Ok(BTreeMap::<String, String>::deserialize(de)?
        .into_iter()
        .collect())
}

// ---------------------------------------------------------------------------
// RampSpec
// ---------------------------------------------------------------------------

/// A family of tokens interpolated between two seeds of the same theme.
///
/// Each stop produces `"{prefix}-{suffix}"` at `fraction` of the way from
/// `base` toward `target`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RampSpec {
    pub prefix: String,
    pub base: String,
    pub target: String,
    pub stops: Vec<Stop>,
}

impl RampSpec {
    #[must_use]
    pub fn new(prefix: &str, base: &str, target: &str, stops: &[(u32, f64)]) -> Self {
        Self {
            prefix: prefix.to_owned(),
            base: base.to_owned(),
            target: target.to_owned(),
            stops: stops
                .iter()
                .map(|&(suffix, fraction)| Stop {
                    suffix: suffix.to_string(),
                    fraction,
                })
                .collect(),
        }
    }

    /// The token name a stop produces.
    #[must_use]
    pub fn token_name(&self, stop: &Stop) -> String {
        format!("{}-{}", self.prefix, stop.suffix)
    }
}

/// One point on a ramp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stop {
    /// Name suffix. TOML may write it as a string or an integer.
    #[serde(deserialize_with = "suffix_from_toml")]
    pub suffix: String,
    /// Distance from base (0.0) toward target (1.0).
    pub fraction: f64,
}

fn suffix_from_toml<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Suffix {
        Text(String),
        Number(u64),
    }

    Ok(match Suffix::deserialize(de)? {
        Suffix::Text(s) => s,
        Suffix::Number(n) => n.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
