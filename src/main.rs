// SPDX-License-Identifier: MIT
//
// n-tokens — build-time generator for materialized theme color tokens.
//
// Expands each theme's seed colors into tints, shades, and opacity variants
// and writes them as two artifacts the frontend imports:
//
//   n-palette → config, ramps, opacity expansion, emitters
//   n-color   → sRGB values, hex codec, interpolation (used by n-palette)
//
// A run is all-or-nothing:
//
//   config (built-in or --config) → assemble every theme → render both texts
//     → write colors.css + colors.ts   (or compare them, with --check)
//
// Nothing touches the output directory until every theme has been built and
// both texts rendered.

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{Level, debug, info};

use n_palette::builtin::builtin_config;
use n_palette::{Artifacts, PaletteConfig, Result, assemble};

// ─── Command line ───────────────────────────────────────────────────────────

/// Generate theme color tokens as a stylesheet and a typed map.
#[derive(Debug, Parser)]
#[command(name = "n-tokens", version, about)]
struct Cli {
    /// TOML palette config. The built-in table is used when omitted.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory receiving colors.css and colors.ts.
    #[arg(long, value_name = "DIR", default_value = "src/generated")]
    out_dir: PathBuf,

    /// Export this theme to the typed map instead of the configured default.
    #[arg(long, value_name = "NAME")]
    default_theme: Option<String>,

    /// Compare with the files on disk instead of writing them.
    #[arg(long)]
    check: bool,

    /// Log more (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ─── Logging ────────────────────────────────────────────────────────────────

const fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Log to stderr so stdout carries only the summary line.
fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ─── Run ────────────────────────────────────────────────────────────────────

/// What a successful run did.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Written {
        stylesheet: PathBuf,
        typed_map: PathBuf,
        themes: usize,
        tokens: usize,
    },
    /// `--check` found both files current.
    UpToDate,
    /// `--check` found files that would change.
    Stale(Vec<PathBuf>),
}

impl Outcome {
    const fn exit_code(&self) -> i32 {
        match self {
            Self::Stale(_) => 1,
            Self::Written { .. } | Self::UpToDate => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written {
                stylesheet,
                typed_map,
                themes,
                tokens,
            } => write!(
                f,
                "wrote {} and {}: {themes} themes, {tokens} tokens",
                stylesheet.display(),
                typed_map.display()
            ),
            Self::UpToDate => f.write_str("generated files are up to date"),
            Self::Stale(paths) => {
                f.write_str("stale generated files:")?;
                for path in paths {
                    write!(f, "\n  {}", path.display())?;
                }
                Ok(())
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<PaletteConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            PaletteConfig::load(path)?
        }
        None => builtin_config(),
    };
    if let Some(theme) = &cli.default_theme {
        config.default_theme.clone_from(theme);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<Outcome> {
    let config = load_config(cli)?;
    let set = assemble(&config)?;
    let artifacts = Artifacts::render(&set);

    info!(
        themes = set.len(),
        tokens = set.token_count(),
        default = set.default_theme(),
        "rendered artifacts"
    );

    if cli.check {
        let stale = artifacts.stale_files(&cli.out_dir)?;
        return Ok(if stale.is_empty() {
            Outcome::UpToDate
        } else {
            Outcome::Stale(stale)
        });
    }

    let [stylesheet, typed_map] = artifacts.write(&cli.out_dir)?;
    Ok(Outcome::Written {
        stylesheet,
        typed_map,
        themes: set.len(),
        tokens: set.token_count(),
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(outcome) => {
            println!("{outcome}");
            process::exit(outcome.exit_code());
        }
        Err(e) => {
            eprintln!("n-tokens: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
