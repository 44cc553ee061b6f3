//! Error taxonomy for palette generation.
//!
//! Every variant is fatal: a run either produces both artifacts or nothing.
//! Each error names the theme, ramp, or token an author has to fix.

use std::io;
use std::path::PathBuf;

use n_color::ColorError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaletteError>;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("theme `{theme}`: token `{token}` has malformed color `{value}`: {reason}")]
    MalformedColor {
        theme: String,
        token: String,
        value: String,
        reason: &'static str,
    },

    #[error("theme `{theme}`: ramp `{prefix}` references unknown seed `{token}`")]
    UnknownReference {
        theme: String,
        prefix: String,
        token: String,
    },

    #[error("theme `{theme}`: token `{token}` is produced more than once")]
    AmbiguousToken { theme: String, token: String },

    /// `origin` is the theme or ramp that names the token.
    #[error("{origin}: `{token}` is not a custom property name (`--` then A-Z, a-z, 0-9, `-`, `_`)")]
    InvalidToken { origin: String, token: String },

    #[error("ramp `{prefix}`: stop `{suffix}` has fraction {fraction}, expected 0.0 to 1.0")]
    InvalidStop {
        prefix: String,
        suffix: String,
        fraction: f64,
    },

    #[error("theme `{theme}` is declared more than once")]
    DuplicateTheme { theme: String },

    #[error("theme name `{theme}` must be non-empty and use only A-Z, a-z, 0-9, `-`, `_`")]
    InvalidThemeName { theme: String },

    #[error("default theme `{theme}` is not declared")]
    UnknownTheme { theme: String },

    #[error("invalid config {origin}: {source}")]
    Config {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PaletteError {
    /// Attach theme/token context to a color parse failure.
    pub(crate) fn malformed(theme: &str, token: &str, err: &ColorError) -> Self {
        let ColorError::Malformed { value, reason } = err;
        Self::MalformedColor {
            theme: theme.to_owned(),
            token: token.to_owned(),
            value: value.clone(),
            reason: *reason,
        }
    }

    pub(crate) fn ambiguous(theme: &str, token: &str) -> Self {
        Self::AmbiguousToken {
            theme: theme.to_owned(),
            token: token.to_owned(),
        }
    }

    pub(crate) fn invalid_token(origin: String, token: &str) -> Self {
        Self::InvalidToken {
            origin,
            token: token.to_owned(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn malformed_keeps_value_and_reason() {
        let err = n_color::decode("#12").unwrap_err();
        let err = PaletteError::malformed("light", "--fg-500", &err);
        assert_eq!(
            err.to_string(),
            "theme `light`: token `--fg-500` has malformed color `#12`: expected exactly 6 hex digits"
        );
    }

    #[test]
    fn invalid_token_names_its_origin() {
        let err = PaletteError::invalid_token("theme `light`".into(), "color");
        assert_eq!(
            err.to_string(),
            "theme `light`: `color` is not a custom property name (`--` then A-Z, a-z, 0-9, `-`, `_`)"
        );
    }

    #[test]
    fn io_error_is_surfaced_verbatim() {
        let err = PaletteError::io(
            "out/colors.css",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(err.to_string(), "out/colors.css: permission denied");
    }
}
