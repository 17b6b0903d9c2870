// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use clap::Parser;
use tracing::info;

use jieqi::{CalendarEmitter, Config, OutputFormat};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &cli);

    let options = config
        .calendar_options()
        .context("invalid [calendar] settings")?;
    let current_year = Utc::now().with_timezone(&options.timezone).year();
    let span = config.year_span(current_year)?;
    let finder = config.finder().context("invalid [search] settings")?;

    info!(%span, timezone = options.timezone.name(), "searching solar terms");
    let records = finder
        .find(span)
        .with_context(|| format!("solar term search failed for {span}"))?;

    let path = config.output_path();
    match config.output.format {
        OutputFormat::Ics => CalendarEmitter::new(options).write(&path, &records)?,
        OutputFormat::Json => jieqi::write_json(&path, &records)?,
    }

    println!("Generated {} with {} events.", path.display(), records.len());
    Ok(())
}

/// Command-line flags take precedence over the configuration file.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(first) = cli.from {
        config.years.first = Some(first);
    }
    if let Some(last) = cli.to {
        config.years.last = Some(last);
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.clone());
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(timezone) = &cli.timezone {
        config.calendar.timezone = timezone.clone();
    }
}
