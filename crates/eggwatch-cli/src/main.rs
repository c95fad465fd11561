//! CLI for eggwatch.
//!
//! Reads raid egg payloads as JSON Lines from a file or stdin and prints the
//! flattened template placeholders of every event, one JSON object per line.
//! It is the operational front end for trying feeds, caches and locale files
//! without running the full alerting pipeline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eggwatch_core::Units;
use eggwatch_egg::EggEvent;
use eggwatch_format::{LocaleTable, MemoryCache};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::UtcOffset;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten egg events into template placeholders
    Render {
        /// JSON Lines input (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Gym cache snapshot, e.g. {"gym_slots": {"<gym id>": 2}}
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Translation file (default: built-in English names)
        #[arg(long)]
        locale: Option<PathBuf>,

        /// Offset clocks are rendered in, e.g. "+02:00" or "Z"
        #[arg(long, env = "EGGWATCH_UTC_OFFSET", default_value = "Z", value_parser = parse_utc_offset)]
        utc_offset: UtcOffset,

        /// Units for distances (metric or imperial)
        #[arg(long, env = "EGGWATCH_UNITS", default_value = "metric")]
        units: Units,

        /// Viewer location as "LAT,LNG"; fills distance and direction
        #[arg(long, value_parser = parse_origin)]
        origin: Option<(f64, f64)>,

        /// Geofence name to tag every event with
        #[arg(long)]
        geofence: Option<String>,

        /// Extra placeholder as KEY=VALUE (repeatable)
        #[arg(long = "custom", value_parser = parse_custom)]
        custom: Vec<(String, String)>,
    },
    /// Validate egg events without rendering them
    Check {
        /// JSON Lines input (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

/// Everything applied to each event between parsing and flattening.
struct RenderOptions {
    cache: MemoryCache,
    locale: LocaleTable,
    utc_offset: UtcOffset,
    units: Units,
    origin: Option<(f64, f64)>,
    geofence: Option<String>,
    custom: Vec<(String, String)>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    accepted: u64,
    rejected: u64,
}

fn parse_utc_offset(s: &str) -> std::result::Result<UtcOffset, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }
    UtcOffset::parse(
        s,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .map_err(|e| format!("invalid UTC offset '{s}' (expected e.g. +02:00): {e}"))
}

fn parse_origin(s: &str) -> std::result::Result<(f64, f64), String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("invalid origin '{s}' (expected LAT,LNG)"))?;
    let coord = |part: &str| {
        part.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid coordinate '{part}' in origin '{s}'"))
    };
    Ok((coord(lat)?, coord(lng)?))
}

fn parse_custom(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("invalid placeholder '{s}' (expected KEY=VALUE)")),
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(p) => Box::new(BufReader::new(
            File::open(p).with_context(|| format!("Failed to open input file {p:?}"))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

fn render_events(
    reader: impl BufRead,
    out: &mut impl Write,
    opts: &RenderOptions,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let egg = match EggEvent::from_json(&line) {
            Ok(egg) => egg,
            Err(e) => {
                eprintln!("Skipping line {}: {}", idx + 1, e);
                summary.rejected += 1;
                continue;
            }
        };

        let egg = opts
            .custom
            .iter()
            .fold(egg, |egg, (key, value)| egg.with_custom_dts(key, value));
        let mut egg = egg.enrich(&opts.cache);
        if let Some(origin) = opts.origin {
            egg = egg.locate_from(origin);
        }
        if let Some(name) = &opts.geofence {
            egg = egg.with_geofence(name.as_str());
        }

        let dts = egg.flatten(&opts.locale, opts.utc_offset, opts.units);
        // encode before writing so stdout only ever sees whole lines
        let mut encoded = match serde_json::to_vec(&dts) {
            Ok(encoded) => encoded,
            Err(e) => {
                eprintln!("Skipping line {}: {}", idx + 1, e);
                summary.rejected += 1;
                continue;
            }
        };
        encoded.push(b'\n');
        out.write_all(&encoded).context("Failed to write placeholders")?;
        summary.accepted += 1;
    }

    Ok(summary)
}

fn check_events(reader: impl BufRead) -> Result<Summary> {
    let mut summary = Summary::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        match EggEvent::from_json(&line) {
            Ok(_) => summary.accepted += 1,
            Err(e) => {
                eprintln!("Line {}: {}", idx + 1, e);
                summary.rejected += 1;
            }
        }
    }
    Ok(summary)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            cache,
            locale,
            utc_offset,
            units,
            origin,
            geofence,
            custom,
        } => {
            let cache = match cache {
                Some(path) => MemoryCache::from_path(&path)
                    .with_context(|| format!("Failed to load gym cache {path:?}"))?,
                None => MemoryCache::new(),
            };
            let locale = match locale {
                Some(path) => LocaleTable::from_path(&path)
                    .with_context(|| format!("Failed to load locale {path:?}"))?,
                None => LocaleTable::default(),
            };
            tracing::debug!(gyms = cache.len(), %units, "rendering egg events");

            let opts = RenderOptions {
                cache,
                locale,
                utc_offset,
                units,
                origin,
                geofence,
                custom,
            };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let summary = render_events(open_input(input.as_deref())?, &mut out, &opts)?;
            out.flush()?;

            eprintln!(
                "Rendered {} events ({} rejected).",
                summary.accepted, summary.rejected
            );
            if summary.accepted == 0 && summary.rejected > 0 {
                anyhow::bail!("No event could be rendered");
            }
        }
        Commands::Check { input } => {
            let summary = check_events(open_input(input.as_deref())?)?;
            eprintln!(
                "Checked {} events: {} valid, {} rejected.",
                summary.accepted + summary.rejected,
                summary.accepted,
                summary.rejected
            );
            if summary.rejected > 0 {
                anyhow::bail!("{} invalid events", summary.rejected);
            }
        }
    }

    Ok(())
}
