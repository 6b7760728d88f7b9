// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! # Santa picker CLI
//!
//! Reads a roster (or uses the built-in one), generates assignments and
//! prints them. Logs go to stderr; stdout carries only the result.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use santa_picker::{config, render, EngineBuilder, RetryPolicy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "santa")]
#[command(about = "Pick secret Santas, avoiding partners and mutual pairs")]
#[command(version)]
struct Cli {
    /// JSON roster file (defaults to the built-in office roster)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Give up after this many attempts
    #[arg(short = 'n', long, default_value_t = santa_picker::engine::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Never give up
    #[arg(long, conflicts_with = "max_attempts")]
    unbounded: bool,

    /// Seed the random source for a reproducible draw
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the feasibility check before the first attempt
    #[arg(long)]
    no_precheck: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose logging (per-attempt outcomes)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let roster = match &cli.roster {
        Some(path) => config::load_roster(path)
            .with_context(|| format!("loading roster from {}", path.display()))?,
        None => config::default_roster(),
    };
    info!(participants = roster.len(), "Roster ready");

    let retry_policy = if cli.unbounded {
        RetryPolicy::Unbounded
    } else {
        RetryPolicy::Bounded(cli.max_attempts)
    };
    let mut builder = EngineBuilder::new()
        .retry_policy(retry_policy)
        .precheck(!cli.no_precheck);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }
    let mut engine = builder.build();

    let result = engine.generate(&roster);
    debug!(statistics = %engine.statistics(), "Run finished");

    match cli.format {
        Format::Text => print!("{}", render::render_text(&result)),
        Format::Json => println!(
            "{}",
            render::render_json(&result, engine.last_attempts())
                .context("serializing result")?
        ),
    }

    Ok(result.is_ok())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
