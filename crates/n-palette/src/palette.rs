//! Theme assembly — one fully materialized [`Palette`] per theme.
//!
//! ```text
//! ThemeSeeds ──parse──▶ seeds ──ramps──▶ seeds ∪ derived ──opacity──▶ Palette
//! ```
//!
//! Themes never see each other: a ramp resolves its endpoints inside the
//! theme being built. [`assemble`] builds every theme before returning, so
//! callers can render and write only once everything has succeeded.

use std::collections::BTreeMap;

use n_color::ColorValue;
use tracing::debug;

use crate::config::{PaletteConfig, RampSpec, ThemeSeeds, is_valid_token_name};
use crate::error::{PaletteError, Result};
use crate::{opacity, ramp};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// The complete token → value mapping of one theme.
///
/// Immutable once built. Iteration is in ascending byte order of token
/// names, which is the order both emitters write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    tokens: BTreeMap<String, ColorValue>,
}

impl Palette {
    /// Build a theme's palette: classify seeds, derive ramps, expand opacity.
    ///
    /// # Errors
    ///
    /// Any [`PaletteError`] raised while checking seed names, classifying
    /// seeds, deriving ramps, or expanding opacity variants, tagged with
    /// `theme.name`. A seed listed twice is [`PaletteError::AmbiguousToken`].
    pub fn build(theme: &ThemeSeeds, ramps: &[RampSpec]) -> Result<Self> {
        let mut seeds = BTreeMap::new();
        for (token, raw) in &theme.seeds {
            if !is_valid_token_name(token) {
                return Err(PaletteError::invalid_token(
                    format!("theme `{}`", theme.name),
                    token,
                ));
            }
            let value = ColorValue::parse(raw)
                .map_err(|e| PaletteError::malformed(&theme.name, token, &e))?;
            if seeds.insert(token.clone(), value).is_some() {
                return Err(PaletteError::ambiguous(&theme.name, token));
            }
        }

        let derived = ramp::derive_ramps(&theme.name, &seeds, ramps)?;
        let tokens = opacity::expand(&theme.name, &derived)?;

        debug!(
            theme = %theme.name,
            seeds = seeds.len(),
            derived = derived.len() - seeds.len(),
            total = tokens.len(),
            "built palette"
        );

        Ok(Self { tokens })
    }

    #[must_use]
    pub fn get(&self, token: &str) -> Option<&ColorValue> {
        self.tokens.get(token)
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    /// Tokens in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = (&'a String, &'a ColorValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ColorValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

// ---------------------------------------------------------------------------
// PaletteSet
// ---------------------------------------------------------------------------

/// Every theme's palette, in declaration order, plus the default theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSet {
    default_index: usize,
    themes: Vec<(String, Palette)>,
}

impl PaletteSet {
    /// Themes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> {
        self.themes.iter().map(|(name, p)| (name.as_str(), p))
    }

    #[must_use]
    pub fn get(&self, theme: &str) -> Option<&Palette> {
        self.themes
            .iter()
            .find_map(|(name, p)| (name == theme).then_some(p))
    }

    #[must_use]
    pub fn default_theme(&self) -> &str {
        &self.themes[self.default_index].0
    }

    /// The palette exported to the typed map.
    #[must_use]
    pub fn default_palette(&self) -> &Palette {
        &self.themes[self.default_index].1
    }

    /// Number of themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Total tokens across all themes.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.themes.iter().map(|(_, p)| p.len()).sum()
    }
}

/// Build a palette for every theme in `config`.
///
/// Nothing is returned unless every theme succeeds.
///
/// # Errors
///
/// The first configuration error encountered: structural problems from
/// [`PaletteConfig::validate`], then per-theme errors in declaration order.
pub fn assemble(config: &PaletteConfig) -> Result<PaletteSet> {
    config.validate()?;

    let themes = config
        .themes
        .iter()
        .map(|theme| Palette::build(theme, &config.ramps).map(|p| (theme.name.clone(), p)))
        .collect::<Result<Vec<_>>>()?;

    let default_index = themes
        .iter()
        .position(|(name, _)| *name == config.default_theme)
        .ok_or_else(|| PaletteError::UnknownTheme {
            theme: config.default_theme.clone(),
        })?;

    Ok(PaletteSet {
        default_index,
        themes,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::{DEFAULT_THEME, builtin_config};
    use pretty_assertions::assert_eq;

    fn two_theme_config() -> PaletteConfig {
        PaletteConfig {
            default_theme: "A".into(),
            themes: vec![
                ThemeSeeds::new("A", &[("--a-base", "#000000"), ("--a-top", "#FFFFFF")]),
                ThemeSeeds::new("B", &[("--b-only", "#123456"), ("--gap", "2px")]),
            ],
            ramps: vec![],
        }
    }

    #[test]
    fn end_to_end_midpoint_example() {
        let cfg = PaletteConfig {
            default_theme: "t".into(),
            themes: vec![ThemeSeeds::new(
                "t",
                &[("--base", "#000000"), ("--target", "#FFFFFF")],
            )],
            ramps: vec![RampSpec::new("--x", "--base", "--target", &[(500, 0.5)])],
        };
        let set = assemble(&cfg).unwrap();
        let p = set.default_palette();
        assert_eq!(p.get("--x-500").unwrap().to_string(), "#808080");
        assert_eq!(
            p.get("--x-500-50").unwrap().to_string(),
            "rgb(128 128 128 / 0.50)"
        );
        // 2 seeds + 1 derived, each with 20 variants.
        assert_eq!(p.len(), 3 * 21);
    }

    #[test]
    fn themes_keep_declaration_order() {
        let set = assemble(&two_theme_config()).unwrap();
        let names: Vec<_> = set.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn themes_are_independent() {
        let set = assemble(&two_theme_config()).unwrap();
        let a = set.get("A").unwrap();
        let b = set.get("B").unwrap();
        assert!(!a.contains("--b-only"));
        assert!(!b.contains("--a-base"));
        assert_eq!(b.len(), 2 + 20);
    }

    #[test]
    fn ramp_missing_in_one_theme_fails_whole_run() {
        let mut cfg = two_theme_config();
        cfg.ramps = vec![RampSpec::new("--r", "--a-base", "--a-top", &[(1, 0.5)])];
        let err = assemble(&cfg).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::UnknownReference { ref theme, .. } if theme == "B"
        ));
    }

    #[test]
    fn malformed_seed_names_theme_and_token() {
        let mut cfg = two_theme_config();
        cfg.themes[1] = ThemeSeeds::new("B", &[("--bad", "#12345")]);
        let err = assemble(&cfg).unwrap_err();
        assert_eq!(
            err.to_string(),
            "theme `B`: token `--bad` has malformed color `#12345`: expected exactly 6 hex digits"
        );
    }

    #[test]
    fn seed_listed_twice_is_ambiguous() {
        let mut cfg = two_theme_config();
        cfg.themes[0] = ThemeSeeds::new("A", &[("--x", "#000000"), ("--x", "#FFFFFF")]);
        let err = assemble(&cfg).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::AmbiguousToken { ref theme, ref token } if theme == "A" && token == "--x"
        ));
    }

    #[test]
    fn seed_name_must_be_custom_property() {
        let mut cfg = two_theme_config();
        cfg.themes[1] = ThemeSeeds::new("B", &[("color", "#000000")]);
        let err = assemble(&cfg).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::InvalidToken { ref origin, ref token }
                if origin == "theme `B`" && token == "color"
        ));
    }

    #[test]
    fn literal_with_css_syntax_is_rejected() {
        let mut cfg = two_theme_config();
        cfg.themes[1] = ThemeSeeds::new("B", &[("--evil", "1px;}\nbody{color:red")]);
        let err = assemble(&cfg).unwrap_err();
        assert!(matches!(
            err,
            PaletteError::MalformedColor { ref theme, ref token, .. }
                if theme == "B" && token == "--evil"
        ));
    }

    #[test]
    fn validation_runs_first() {
        let mut cfg = two_theme_config();
        cfg.default_theme = "missing".into();
        assert!(matches!(assemble(&cfg), Err(PaletteError::UnknownTheme { .. })));
    }

    #[test]
    fn builtin_token_counts() {
        let set = assemble(&builtin_config()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.default_theme(), DEFAULT_THEME);
        // 6 color seeds + 16 derived = 22 colors, ×21 with variants, + 2 literals.
        for (_, palette) in set.iter() {
            assert_eq!(palette.len(), 22 * 21 + 2);
        }
        assert_eq!(set.token_count(), 2 * (22 * 21 + 2));
    }

    #[test]
    fn builtin_literals_pass_through() {
        let set = assemble(&builtin_config()).unwrap();
        let p = set.default_palette();
        assert_eq!(p.get("--radius").unwrap().to_string(), "0.5rem");
        assert_eq!(p.get("--border-width").unwrap().to_string(), "1px");
        assert!(!p.contains("--radius-05"));
    }

    #[test]
    fn builtin_seeds_are_normalized_not_changed() {
        let set = assemble(&builtin_config()).unwrap();
        let p = set.default_palette();
        assert_eq!(p.get("--whitest").unwrap().to_string(), "#ECFEFF");
        assert_eq!(p.get("--fg-500").unwrap().to_string(), "#1C398E");
    }

    #[test]
    fn iteration_is_sorted() {
        let set = assemble(&builtin_config()).unwrap();
        let names: Vec<_> = set.default_palette().iter().map(|(k, _)| k).collect();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rebuilds_are_identical() {
        let a = assemble(&builtin_config()).unwrap();
        let b = assemble(&builtin_config()).unwrap();
        assert_eq!(a, b);
    }
}
