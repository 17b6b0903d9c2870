// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use std::path::PathBuf;

use clap::Parser;
use jieqi::OutputFormat;

/// Generate a calendar of the 24 solar terms.
#[derive(Debug, Parser)]
#[command(
    name = "jieqi",
    version,
    about = "Compute the 24 solar terms and write them as calendar events"
)]
pub struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// First year to search (default: current year).
    #[arg(long = "from", value_name = "YEAR", allow_hyphen_values = true)]
    pub from: Option<i32>,

    /// Last year to search, inclusive (default: first year + 2).
    #[arg(long = "to", value_name = "YEAR", allow_hyphen_values = true)]
    pub to: Option<i32>,

    /// Override output path from config (default: `solar_terms.<format>`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override output format from config.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Override display time zone (IANA name) from config.
    #[arg(long)]
    pub timezone: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "jieqi", "--from", "2024", "--to", "2025", "-o", "out.json", "--format", "json",
            "--timezone", "UTC", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.from, Some(2024));
        assert_eq!(cli.to, Some(2025));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn defaults_are_empty() {
        let cli = Cli::try_parse_from(["jieqi"]).unwrap();
        assert!(cli.config.is_none() && cli.from.is_none() && cli.format.is_none());
        assert_eq!(cli.verbose, 0);
    }
}
