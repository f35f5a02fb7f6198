use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ConvertArgs, LabelArgs, PossibleArgs, TrendArgs};

/// Jalali calendar trend metrics
///
/// Groups the rows of a SQLite table into minute, hour, day, week or month
/// buckets, aggregates a column per bucket and labels every bucket on the
/// Jalali (Persian solar) calendar. Empty buckets are shown as zero.
#[derive(Parser)]
#[command(version, about, name = "jt")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/jalali-trend/metrics.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Locale of month names, e.g. `en`; labels stay Persian by default
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Directory of `<locale>.json` translation bundles. Defaults to
    /// $XDG_CONFIG_HOME/jalali-trend/lang
    #[arg(long, global = true)]
    pub lang_dir: Option<PathBuf>,

    /// Decimal digits aggregates are rounded to
    #[arg(long, global = true, default_value_t = 0)]
    pub precision: u32,

    /// Time zone of the application clock (default UTC)
    #[arg(long, global = true)]
    pub app_timezone: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the jt CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a table into a Jalali trend
    #[command(alias = "t")]
    Trend(TrendArgs),
    /// Format one backend bucket key as a Jalali label
    #[command(alias = "l")]
    Label(LabelArgs),
    /// List the labels a trend would show right now
    #[command(alias = "p")]
    Possible(PossibleArgs),
    /// Convert a Gregorian date to the Jalali calendar
    #[command(alias = "c")]
    Convert(ConvertArgs),
}
