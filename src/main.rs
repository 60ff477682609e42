// SPDX-License-Identifier: MIT
//
// tonal — seed colors in, accessible light/dark design tokens out.
//
// This binary is the only part of the workspace that touches the
// filesystem, the environment or stdout. It wires together:
//
//   tonal-color  → OKLCH colors, gamut checks, vision simulation
//   tonal-engine → scales, contrast searches, token mapping, export
//
// Every subcommand follows the same flow:
//
//   --config / TONAL_CONFIG → ProjectConfig → (seeds, overrides, mode, level)
//       → tonal_engine::generate → print or write

mod config;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tonal_color::{Color, Deficiency, gamut};
use tonal_engine::audit::{AuditReport, audit};
use tonal_engine::export::{self, ExportFormat};
use tonal_engine::{ContrastLevel, Generated, Mode, builtin, contrast, generate};

use crate::config::ProjectConfig;

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Generate accessible design tokens from a handful of seed colors
#[derive(Parser)]
#[command(name = "tonal", about, version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Project file (TOML) with seeds and overrides
    #[arg(short, long, global = true, env = "TONAL_CONFIG")]
    config: Option<PathBuf>,

    /// Builtin seed preset, replaces the project file's preset
    #[arg(short, long, global = true)]
    preset: Option<String>,

    /// Active mode, overrides the project file
    #[arg(long, global = true)]
    mode: Option<Mode>,

    /// Contrast level, overrides the project file
    #[arg(long, global = true)]
    contrast: Option<ContrastLevel>,

    /// Log generation decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate tokens for both modes and serialize them
    Generate {
        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check every readable pair against the contrast targets
    Audit {
        /// Exit non-zero if any pair fails
        #[arg(long)]
        strict: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// WCAG contrast ratio between two colors
    Contrast { a: String, b: String },
    /// Report sRGB and Display P3 coverage of a hex or `oklch(L C H)` color
    Gamut { color: String },
    /// Preview the active mode's tokens through a color vision deficiency
    Simulate {
        #[arg(short, long, value_parser = parse_deficiency)]
        deficiency: Deficiency,
    },
    /// List builtin seed presets
    Presets,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Css,
    Scss,
    Tailwind,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Css => Self::Css,
            Format::Scss => Self::Scss,
            Format::Tailwind => Self::Tailwind,
            Format::Json => Self::Json,
        }
    }
}

fn parse_deficiency(s: &str) -> Result<Deficiency, String> {
    Deficiency::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = Deficiency::ALL.iter().map(|d| d.name()).collect();
        format!("unknown deficiency {s:?} (expected one of {})", names.join(", "))
    })
}

// ─── Session ────────────────────────────────────────────────────────────────

/// Resolved inputs plus the generated output.
struct Session {
    mode: Mode,
    level: ContrastLevel,
    generated: Generated,
}

impl Session {
    fn load(cli: &Cli) -> Result<Self> {
        let project = match &cli.config {
            Some(path) => ProjectConfig::load(path)?,
            None => ProjectConfig::default(),
        };
        let seeds = project.resolve_seeds(cli.preset.as_deref())?;
        if let Err(err) = seeds.validate() {
            log::warn!("{err}; generating with a neutral stand-in");
        }
        let mode = cli.mode.unwrap_or(project.mode);
        let level = cli.contrast.unwrap_or(project.contrast);
        log::debug!("generating: mode {mode}, contrast {level}");
        let generated = generate(&seeds, &project.overrides, level);
        Ok(Self {
            mode,
            level,
            generated,
        })
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn cmd_generate(session: &Session, format: Format, output: Option<&PathBuf>) -> Result<()> {
    let g = &session.generated;
    let text = export::export(format.into(), &g.light, &g.dark, &g.palette)
        .context("serializing tokens")?;
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn print_report(mode: Mode, report: &AuditReport) {
    println!("{mode}: {}/{} pairs pass", report.pass_count(), report.entries.len());
    for e in &report.entries {
        let mark = if e.passes { "pass" } else { "FAIL" };
        println!(
            "  {mark}  {:>6.2}:1 (need {:.1})  {} on {}",
            e.ratio, e.required, e.foreground, e.background
        );
    }
}

fn cmd_audit(session: &Session, strict: bool, json: bool) -> Result<ExitCode> {
    let reports: Vec<(Mode, AuditReport)> = Mode::ALL
        .into_iter()
        .map(|m| (m, audit(session.generated.tokens(m), session.level)))
        .collect();

    if json {
        let map: std::collections::BTreeMap<&str, &AuditReport> =
            reports.iter().map(|(m, r)| (m.name(), r)).collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for (mode, report) in &reports {
            print_report(*mode, report);
        }
    }

    let failed = reports.iter().any(|(_, r)| !r.passed());
    Ok(if strict && failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_contrast(a: &str, b: &str) -> Result<()> {
    let ca = parse_color_arg(a)?;
    let cb = parse_color_arg(b)?;
    let ratio = contrast::contrast_ratio(ca, cb);
    let grade = match ratio {
        r if r >= 7.0 => "AAA",
        r if r >= 4.5 => "AA",
        r if r >= 3.0 => "AA large",
        _ => "fail",
    };
    println!("{} on {}: {ratio:.2}:1 ({grade})", ca.to_hex(), cb.to_hex());
    Ok(())
}

/// Hex, or `oklch(L C H)` with L in 0–1 and H in degrees.
fn parse_color_arg(s: &str) -> Result<Color> {
    let Some(inner) = s.trim().strip_prefix("oklch(").and_then(|r| r.strip_suffix(')')) else {
        return Ok(Color::parse(s)?);
    };
    let parts = inner
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("bad number in {s:?}"))?;
    match parts.as_slice() {
        [l, c, h] => Ok(Color::oklch(*l, *c, *h)),
        _ => anyhow::bail!("expected oklch(L C H), got {s:?}"),
    }
}

fn cmd_gamut(color: &str) -> Result<()> {
    let c = parse_color_arg(color)?;
    let report = gamut::check(c);
    println!(
        "oklch({:.3} {:.3} {:.1})  srgb: {}  p3: {}  [{}]",
        c.l,
        c.c,
        c.h,
        report.srgb,
        report.display_p3,
        report.label()
    );
    println!(
        "max chroma at this L/H: srgb {:.3}, p3 {:.3}; clamped {}",
        gamut::max_chroma(c.l, c.h, gamut::Gamut::Srgb),
        gamut::max_chroma(c.l, c.h, gamut::Gamut::DisplayP3),
        c.to_gamut().to_hex()
    );
    Ok(())
}

fn cmd_simulate(session: &Session, deficiency: Deficiency) {
    let tokens = session.generated.tokens(session.mode);
    let simulated = tokens.simulate(deficiency);
    for ((name, before), (_, after)) in tokens.iter().zip(simulated.iter()) {
        println!("{name}: {before} -> {after}");
    }
}

fn cmd_presets() {
    for name in builtin::builtin_names() {
        if let Some(seeds) = builtin::builtin_seeds(name) {
            println!("{name:<8} primary {}  secondary {}", seeds.primary, seeds.secondary);
        }
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Command::Generate { format, output } => {
            cmd_generate(&Session::load(cli)?, *format, output.as_ref())?;
        }
        Command::Audit { strict, json } => return cmd_audit(&Session::load(cli)?, *strict, *json),
        Command::Contrast { a, b } => cmd_contrast(a, b)?,
        Command::Gamut { color } => cmd_gamut(color)?,
        Command::Simulate { deficiency } => cmd_simulate(&Session::load(cli)?, *deficiency),
        Command::Presets => cmd_presets(),
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("tonal: {err:#}");
            ExitCode::FAILURE
        }
    }
}
