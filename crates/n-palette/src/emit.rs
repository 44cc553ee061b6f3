//! Emitters — the stylesheet and the typed token map.
//!
//! | Artifact     | Themes           | Entry line                   |
//! |--------------|------------------|------------------------------|
//! | `colors.css` | all, declared order | `  <token>: <value>;`     |
//! | `colors.ts`  | default only     | `  '<token>': '<value>',`    |
//!
//! Both walk a [`Palette`] in its sorted order and format values through
//! `ColorValue`'s `Display`, so the default theme's entries match byte for
//! byte. The typed map stays single-theme: only the stylesheet carries the
//! other themes.
//!
//! [`Artifacts`] holds both rendered texts. Rendering happens entirely in
//! memory; files are touched only by [`Artifacts::write`].

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{PaletteError, Result};
use crate::palette::{Palette, PaletteSet};

/// File name of the stylesheet inside the output directory.
pub const STYLESHEET_FILE: &str = "colors.css";

/// File name of the typed map inside the output directory.
pub const TYPED_MAP_FILE: &str = "colors.ts";

/// Name of the exported map constant.
pub const TYPED_MAP_EXPORT: &str = "COLOR_VARS";

const GENERATED_NOTICE: &str = "Generated by n-tokens - do not edit";

/// CSS selector scoping a theme's block.
#[must_use]
pub fn theme_selector(theme: &str) -> String {
    format!(".theme-{theme}")
}

// ---------------------------------------------------------------------------
// Stylesheet
// ---------------------------------------------------------------------------

/// Render every theme as a scoped block of custom properties.
#[must_use]
pub fn render_stylesheet(set: &PaletteSet) -> String {
    let mut out = format!("/* {GENERATED_NOTICE} */\n");
    for (theme, palette) in set.iter() {
        out.push('\n');
        write_block(&mut out, &theme_selector(theme), palette);
    }
    out
}

fn write_block(out: &mut String, selector: &str, palette: &Palette) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{selector} {{");
    for (token, value) in palette.iter() {
        let _ = writeln!(out, "  {token}: {value};");
    }
    out.push_str("}\n");
}

// ---------------------------------------------------------------------------
// Typed map
// ---------------------------------------------------------------------------

/// Render one palette as an exported TypeScript record.
#[must_use]
pub fn render_typed_map(palette: &Palette) -> String {
    let mut out = format!("// {GENERATED_NOTICE}\n");
    let _ = writeln!(
        out,
        "export const {TYPED_MAP_EXPORT}: Record<string, string> = {{"
    );
    for (token, value) in palette.iter() {
        let _ = writeln!(
            out,
            "  {}: {},",
            ts_string(token),
            ts_string(&value.to_string())
        );
    }
    out.push_str("};\n");
    out
}

/// Single-quoted TypeScript string literal.
fn ts_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

/// Both rendered outputs of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub stylesheet: String,
    pub typed_map: String,
}

impl Artifacts {
    /// Render both artifacts from an assembled set.
    #[must_use]
    pub fn render(set: &PaletteSet) -> Self {
        Self {
            stylesheet: render_stylesheet(set),
            typed_map: render_typed_map(set.default_palette()),
        }
    }

    fn files<'a>(&'a self, dir: &Path) -> [(PathBuf, &'a str); 2] {
        [
            (dir.join(STYLESHEET_FILE), self.stylesheet.as_str()),
            (dir.join(TYPED_MAP_FILE), self.typed_map.as_str()),
        ]
    }

    /// Create `dir` if needed and replace both files.
    ///
    /// Both texts are first written beside their targets as `<name>.tmp`.
    /// The targets are renamed over only once both temporaries exist, so a
    /// failed write leaves the previous pair untouched. A failing second
    /// rename can still leave a new stylesheet next to an old typed map.
    ///
    /// Returns the written paths (stylesheet first).
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Io`] naming the directory or file that failed.
    pub fn write(&self, dir: &Path) -> Result<[PathBuf; 2]> {
        fs::create_dir_all(dir).map_err(|e| PaletteError::io(dir, e))?;

        let files = self.files(dir);
        let mut staged = Vec::with_capacity(files.len());
        for (path, text) in &files {
            let tmp = staging_path(path);
            if let Err(e) = fs::write(&tmp, text) {
                discard(&staged);
                return Err(PaletteError::io(tmp, e));
            }
            staged.push(tmp);
        }

        for ((path, text), tmp) in files.iter().zip(&staged) {
            if let Err(e) = fs::rename(tmp, path) {
                discard(&staged);
                return Err(PaletteError::io(path, e));
            }
            debug!(path = %path.display(), bytes = text.len(), "wrote artifact");
        }

        info!(dir = %dir.display(), "artifacts written");
        let [(css, _), (ts, _)] = files;
        Ok([css, ts])
    }

    /// Paths under `dir` whose contents differ from the rendered text.
    /// A missing file counts as stale. Nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Io`] if an existing file cannot be read.
    pub fn stale_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut stale = Vec::new();
        for (path, text) in self.files(dir) {
            let current = match fs::read_to_string(&path) {
                Ok(current) => Some(current),
                Err(e) if e.kind() == io::ErrorKind::NotFound => None,
                Err(e) => return Err(PaletteError::io(&path, e)),
            };
            if current.as_deref() != Some(text) {
                stale.push(path);
            }
        }
        Ok(stale)
    }
}

/// `colors.css` → `colors.css.tmp`, in the same directory.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn discard(staged: &[PathBuf]) {
    for tmp in staged {
        // Already renamed or never created.
        let _ = fs::remove_file(tmp);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PaletteConfig, RampSpec, ThemeSeeds};
    use crate::palette::assemble;
    use pretty_assertions::assert_eq;

    fn tiny_set() -> PaletteSet {
        assemble(&PaletteConfig {
            default_theme: "A".into(),
            themes: vec![
                ThemeSeeds::new("A", &[("--radius", "4px")]),
                ThemeSeeds::new("B", &[("--gap", "2px"), ("--line", "1px")]),
            ],
            ramps: vec![],
        })
        .unwrap()
    }

    #[test]
    fn stylesheet_layout() {
        assert_eq!(
            render_stylesheet(&tiny_set()),
            "/* Generated by n-tokens - do not edit */\n\
             \n\
             .theme-A {\n  --radius: 4px;\n}\n\
             \n\
             .theme-B {\n  --gap: 2px;\n  --line: 1px;\n}\n"
        );
    }

    #[test]
    fn typed_map_layout() {
        let set = tiny_set();
        assert_eq!(
            render_typed_map(set.default_palette()),
            "// Generated by n-tokens - do not edit\n\
             export const COLOR_VARS: Record<string, string> = {\n  \
             '--radius': '4px',\n\
             };\n"
        );
    }

    #[test]
    fn typed_map_is_default_theme_only() {
        let artifacts = Artifacts::render(&tiny_set());
        assert!(artifacts.typed_map.contains("'--radius'"));
        assert!(!artifacts.typed_map.contains("--gap"));
        assert!(artifacts.stylesheet.contains("--gap"));
    }

    #[test]
    fn colors_render_identically_in_both_formats() {
        let set = assemble(&PaletteConfig {
            default_theme: "t".into(),
            themes: vec![ThemeSeeds::new("t", &[("--b", "#000000"), ("--w", "#ffffff")])],
            ramps: vec![RampSpec::new("--x", "--b", "--w", &[(500, 0.5)])],
        })
        .unwrap();
        let artifacts = Artifacts::render(&set);
        assert!(artifacts.stylesheet.contains("  --x-500: #808080;\n"));
        assert!(artifacts.typed_map.contains("  '--x-500': '#808080',\n"));
        assert!(artifacts.stylesheet.contains("  --x-500-50: rgb(128 128 128 / 0.50);\n"));
        assert!(artifacts.typed_map.contains("  '--x-500-50': 'rgb(128 128 128 / 0.50)',\n"));
        assert!(artifacts.stylesheet.contains("  --w: #FFFFFF;\n"));
    }

    #[test]
    fn ts_strings_are_escaped() {
        assert_eq!(ts_string("plain"), "'plain'");
        assert_eq!(ts_string("it's"), "'it\\'s'");
        assert_eq!(ts_string("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn selector_is_theme_qualified() {
        assert_eq!(theme_selector("dark"), ".theme-dark");
    }

    #[test]
    fn write_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("src/generated");
        let artifacts = Artifacts::render(&tiny_set());

        fs::create_dir_all(&out).unwrap();
        fs::write(out.join(STYLESHEET_FILE), "stale contents that are longer").unwrap();

        let [css, ts] = artifacts.write(&out).unwrap();
        assert_eq!(css, out.join("colors.css"));
        assert_eq!(fs::read_to_string(css).unwrap(), artifacts.stylesheet);
        assert_eq!(fs::read_to_string(ts).unwrap(), artifacts.typed_map);
    }

    #[test]
    fn stale_files_reports_missing_and_changed() {
        let dir = tempfile::tempdir().unwrap();
        let artifacts = Artifacts::render(&tiny_set());
        assert_eq!(artifacts.stale_files(dir.path()).unwrap().len(), 2);

        artifacts.write(dir.path()).unwrap();
        assert!(artifacts.stale_files(dir.path()).unwrap().is_empty());

        fs::write(dir.path().join(TYPED_MAP_FILE), "// edited\n").unwrap();
        assert_eq!(
            artifacts.stale_files(dir.path()).unwrap(),
            vec![dir.path().join(TYPED_MAP_FILE)]
        );
    }

    #[test]
    fn failed_staging_keeps_previous_pair() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(STYLESHEET_FILE), "old css").unwrap();
        fs::write(dir.path().join(TYPED_MAP_FILE), "old ts").unwrap();
        // A directory where the typed map's temporary would go.
        let blocker = dir.path().join("colors.ts.tmp");
        fs::create_dir(&blocker).unwrap();

        let err = Artifacts::render(&tiny_set()).write(dir.path()).unwrap_err();
        assert!(matches!(err, PaletteError::Io { ref path, .. } if *path == blocker));
        assert_eq!(fs::read_to_string(dir.path().join(STYLESHEET_FILE)).unwrap(), "old css");
        assert_eq!(fs::read_to_string(dir.path().join(TYPED_MAP_FILE)).unwrap(), "old ts");
        assert!(!dir.path().join("colors.css.tmp").exists());
    }

    #[test]
    fn write_leaves_no_temporaries() {
        let dir = tempfile::tempdir().unwrap();
        Artifacts::render(&tiny_set()).write(dir.path()).unwrap();
        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, ["colors.css", "colors.ts"]);
    }

    #[test]
    fn staging_path_appends_suffix() {
        assert_eq!(
            staging_path(Path::new("out/colors.css")),
            PathBuf::from("out/colors.css.tmp")
        );
    }

    #[test]
    fn write_into_a_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();
        let err = Artifacts::render(&tiny_set()).write(&blocker).unwrap_err();
        assert!(matches!(err, PaletteError::Io { ref path, .. } if *path == blocker));
    }
}
