//! Command arguments and their handlers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, which stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Trend
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use jalali_trend_core::{
    display::Labels,
    params::{AggregateParams, TrendRequest, DEFAULT_COUNT_COLUMN},
    AggregateFunction, TimeUnit, Trend,
};
use jiff::{civil, Timestamp};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Options shared by commands that compute a range of buckets.
#[derive(Args)]
pub struct RangeArgs {
    /// Number of buckets to show
    #[arg(short, long, default_value_t = 30)]
    pub range: u32,
    /// IANA time zone buckets are cut in, e.g. Asia/Tehran
    #[arg(long)]
    pub timezone: Option<String>,
    /// Show hours as `2:00 PM` instead of `14:00`
    #[arg(long)]
    pub twelve_hour: bool,
}

impl From<&RangeArgs> for TrendRequest {
    fn from(val: &RangeArgs) -> Self {
        TrendRequest {
            range: val.range,
            timezone: val.timezone.clone(),
            twelve_hour_time: val.twelve_hour,
        }
    }
}

/// Headline value shown above the trend.
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ShowValue {
    /// Most recent bucket
    Latest,
    /// Sum of every bucket
    Sum,
}

/// Aggregate a table into a Jalali trend
#[derive(Args)]
pub struct TrendArgs {
    /// Table holding the measured rows
    pub table: String,
    /// Bucket size: minute, hour, day, week or month
    #[arg(short, long)]
    pub unit: TimeUnit,
    /// Aggregate function: count, sum, avg, max or min
    #[arg(short, long, default_value = "count")]
    pub function: AggregateFunction,
    /// Column to aggregate; counts default to `id`
    #[arg(short, long)]
    pub column: Option<String>,
    /// Column holding the UTC timestamp of each row
    #[arg(long)]
    pub date_column: Option<String>,
    #[command(flatten)]
    pub range: RangeArgs,
    /// Headline value to show above the trend
    #[arg(long, value_enum)]
    pub show: Option<ShowValue>,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&TrendArgs> for AggregateParams {
    fn from(val: &TrendArgs) -> Self {
        let column = val.column.as_deref().unwrap_or(DEFAULT_COUNT_COLUMN);
        let params = AggregateParams::new(&val.table, val.unit, val.function, column);
        match &val.date_column {
            Some(date_column) => params.with_date_column(date_column),
            None => params,
        }
    }
}

/// Format one backend bucket key as a Jalali label
#[derive(Args)]
pub struct LabelArgs {
    /// Unit the key was grouped by
    pub unit: TimeUnit,
    /// Bucket key, e.g. `2023-10`, `2023-10-15` or `2023-05-01 14:00`
    pub key: String,
    /// Show hours as `2:00 PM` instead of `14:00`
    #[arg(long)]
    pub twelve_hour: bool,
}

/// List the labels a trend would show right now
#[derive(Args)]
pub struct PossibleArgs {
    /// Bucket size: minute, hour, day, week or month
    pub unit: TimeUnit,
    #[command(flatten)]
    pub range: RangeArgs,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Convert a Gregorian date to the Jalali calendar
#[derive(Args)]
pub struct ConvertArgs {
    /// Gregorian date as YYYY-MM-DD
    pub date: civil::Date,
    /// Print JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Dispatches parsed commands to the trend and renders the output.
pub struct Cli {
    trend: Trend,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(trend: Trend, renderer: TerminalRenderer) -> Self {
        Self { trend, renderer }
    }

    pub async fn handle_trend(&self, args: &TrendArgs) -> Result<()> {
        if args.column.is_none() && args.function != AggregateFunction::Count {
            bail!("--column is required for {}", args.function);
        }

        let request = TrendRequest::from(&args.range);
        let params = AggregateParams::from(args);
        debug!("Trend request {request:?} for {params:?}");

        let result = self
            .trend
            .aggregate(&request, &params)
            .await
            .with_context(|| format!("Failed to build trend for table '{}'", params.table))?;

        let result = match args.show {
            Some(ShowValue::Latest) => result.show_latest_value(),
            Some(ShowValue::Sum) => result.show_sum_value(),
            None => result,
        };

        if args.json {
            self.renderer.print_json(&serde_json::to_string_pretty(&result)?)
        } else {
            self.renderer.render(&result.to_string())
        }
    }

    pub fn handle_label(&self, args: &LabelArgs) -> Result<()> {
        let label = self
            .trend
            .formatter(args.twelve_hour)
            .format_result_date(&args.key, args.unit)
            .context("Failed to format bucket key")?;
        self.renderer.render(&format!("{label}\n"))
    }

    pub fn handle_possible(&self, args: &PossibleArgs) -> Result<()> {
        let labels = self
            .trend
            .possible_labels_at(&TrendRequest::from(&args.range), args.unit, Timestamp::now())
            .context("Failed to compute possible labels")?;

        if args.json {
            self.renderer.print_json(&serde_json::to_string_pretty(&labels)?)
        } else {
            self.renderer.render(&Labels(&labels).to_string())
        }
    }

    pub fn handle_convert(&self, args: &ConvertArgs) -> Result<()> {
        let conversion = self
            .trend
            .convert(args.date)
            .with_context(|| format!("Failed to convert {}", args.date))?;

        if args.json {
            self.renderer
                .print_json(&serde_json::to_string_pretty(&conversion)?)
        } else {
            self.renderer.render(&conversion.to_string())
        }
    }
}
