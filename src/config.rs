// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! TOML configuration.
//!
//! Every section and field is optional:
//!
//! ```toml
//! [years]
//! first = 2026
//! last = 2028
//!
//! [search]
//! step_days = 1.0
//! iterations = 50
//!
//! [calendar]
//! name = "24節氣"
//! product_id = "-//Antigravity//Solar Terms//ZH"
//! timezone = "Asia/Taipei"
//!
//! [output]
//! path = "solar_terms.ics"
//! format = "ics"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use qtty::Days;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::ics::{
    parse_timezone, CalendarOptions, DEFAULT_CALENDAR_NAME, DEFAULT_PRODUCT_ID, DEFAULT_TIMEZONE,
};
use crate::refine::DEFAULT_ITERATIONS;
use crate::scan::{YearSpan, DEFAULT_STEP};
use crate::{SolarTermFinder, Vsop87Sun};

/// Number of years searched when no last year is configured.
pub const DEFAULT_YEAR_COUNT: u32 = 3;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub years: YearsConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[years]`: both ends optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YearsConfig {
    pub first: Option<i32>,
    pub last: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default = "default_step_days")]
    pub step_days: f64,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step_days: default_step_days(),
            iterations: default_iterations(),
        }
    }
}

fn default_step_days() -> f64 {
    DEFAULT_STEP.value()
}
fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    #[serde(default = "default_calendar_name")]
    pub name: String,
    #[serde(default = "default_product_id")]
    pub product_id: String,
    /// IANA zone name.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            name: default_calendar_name(),
            product_id: default_product_id(),
            timezone: default_timezone(),
        }
    }
}

fn default_calendar_name() -> String {
    DEFAULT_CALENDAR_NAME.to_string()
}
fn default_product_id() -> String {
    DEFAULT_PRODUCT_ID.to_string()
}
fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Ics,
    Json,
}

impl OutputFormat {
    /// File extension written when no output path is configured.
    pub const fn extension(self) -> &'static str {
        match self {
            OutputFormat::Ics => "ics",
            OutputFormat::Json => "json",
        }
    }
}

/// File stem of the default output path.
pub const DEFAULT_OUTPUT_STEM: &str = "solar_terms";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Unset means `solar_terms.<ext>` for the chosen format.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the file cannot be read or is not valid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    /// Year span with defaults filled in: `first` falls back to
    /// `current_year`, `last` to `first` plus two.
    pub fn year_span(&self, current_year: i32) -> Result<YearSpan> {
        let first = self.years.first.unwrap_or(current_year);
        match self.years.last {
            Some(last) => YearSpan::new(first, last),
            None => YearSpan::starting_at(first, DEFAULT_YEAR_COUNT),
        }
    }

    /// Finder over [`Vsop87Sun`] with the configured step and iterations.
    pub fn finder(&self) -> Result<SolarTermFinder<Vsop87Sun>> {
        SolarTermFinder::new()
            .with_step(Days::new(self.search.step_days))?
            .with_iterations(self.search.iterations)
    }

    /// Output file: the configured path, or `solar_terms.ics` /
    /// `solar_terms.json` depending on the format.
    pub fn output_path(&self) -> PathBuf {
        match &self.output.path {
            Some(path) => path.clone(),
            None => {
                PathBuf::from(DEFAULT_OUTPUT_STEM).with_extension(self.output.format.extension())
            }
        }
    }

    /// Calendar options, resolving the zone name.
    pub fn calendar_options(&self) -> Result<CalendarOptions> {
        Ok(CalendarOptions {
            name: self.calendar.name.clone(),
            product_id: self.calendar.product_id.clone(),
            timezone: parse_timezone(&self.calendar.timezone)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.search.step_days, 1.0);
        assert_eq!(config.search.iterations, 50);
        assert_eq!(config.calendar.timezone, "Asia/Taipei");
        assert_eq!(config.output.path, None);
        assert_eq!(config.output.format, OutputFormat::Ics);
        assert_eq!(config.output_path(), PathBuf::from("solar_terms.ics"));
    }

    #[test]
    fn default_output_path_follows_format() {
        let mut config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output_path(), PathBuf::from("solar_terms.json"));

        config.output.path = Some(PathBuf::from("terms.txt"));
        assert_eq!(config.output_path(), PathBuf::from("terms.txt"));

        let explicit: Config =
            toml::from_str("[output]\npath = \"out/cal.ics\"\nformat = \"json\"\n").unwrap();
        assert_eq!(explicit.output_path(), PathBuf::from("out/cal.ics"));
    }

    #[test]
    fn partial_sections() {
        let config: Config = toml::from_str(
            r#"
            [years]
            first = 2030

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.years.first, Some(2030));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.calendar.name, "24節氣");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<Config>("[search]\nstep = 2.0\n").is_err());
        assert!(toml::from_str::<Config>("[metrics]\n").is_err());
    }

    #[test]
    fn year_span_defaults() {
        let mut config = Config::default();
        assert_eq!(config.year_span(2026).unwrap(), YearSpan::new(2026, 2028).unwrap());

        config.years.first = Some(2024);
        assert_eq!(config.year_span(2026).unwrap(), YearSpan::new(2024, 2026).unwrap());

        config.years.last = Some(2024);
        assert_eq!(config.year_span(2026).unwrap(), YearSpan::single(2024));

        config.years.last = Some(2020);
        assert!(matches!(config.year_span(2026), Err(Error::InvalidYearSpan { .. })));
    }

    #[test]
    fn invalid_search_settings() {
        let mut config = Config::default();
        config.search.step_days = 0.0;
        assert!(matches!(config.finder(), Err(Error::InvalidStep { .. })));

        config.search.step_days = 1.0;
        config.search.iterations = 0;
        assert!(matches!(config.finder(), Err(Error::InvalidIterations { .. })));
    }

    #[test]
    fn calendar_options_resolve_zone() {
        let mut config = Config::default();
        assert_eq!(config.calendar_options().unwrap(), CalendarOptions::default());

        config.calendar.timezone = "Nowhere/Special".into();
        assert!(matches!(
            config.calendar_options(),
            Err(Error::UnknownTimeZone { .. })
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\niterations = 30").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.search.iterations, 30);
    }

    #[test]
    fn load_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[search]\niterations = \"many\"").unwrap();
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { ref path, .. } if path == file.path()));

        let missing = Config::load("/nonexistent/jieqi.toml").unwrap_err();
        assert!(missing.to_string().contains("/nonexistent/jieqi.toml"));
    }
}
