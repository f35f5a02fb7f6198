//! Jalali trend CLI application
//!
//! Command-line interface for building Jalali calendar trend metrics over a
//! SQLite database.

mod args;
mod cli;
mod renderer;

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jalali_trend_core::{Translations, TrendBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        locale,
        lang_dir,
        precision,
        app_timezone,
        no_color,
        command,
    } = Args::parse();

    let translations = load_translations(locale, lang_dir.as_deref())?;

    let mut builder = TrendBuilder::new()
        .with_database_path(database_file)
        .with_precision(precision)
        .with_localizer(Arc::new(translations));
    if let Some(timezone) = app_timezone {
        builder = builder.with_app_timezone(timezone);
    }
    let trend = builder.build().await.context("Failed to initialize trend")?;

    let cli = Cli::new(trend, TerminalRenderer::new(!no_color));

    info!("jt started");

    match command {
        Trend(args) => cli.handle_trend(&args).await,
        Label(args) => cli.handle_label(&args),
        Possible(args) => cli.handle_possible(&args),
        Convert(args) => cli.handle_convert(&args),
    }
}

/// Builtin bundles plus either `--lang-dir` or the XDG language directory.
fn load_translations(locale: Option<String>, lang_dir: Option<&Path>) -> Result<Translations> {
    let translations = match lang_dir {
        Some(dir) => Translations::builtin()
            .load_dir(dir)
            .with_context(|| format!("Failed to load translations from {}", dir.display()))?,
        None => Translations::from_default_dir().context("Failed to load translations")?,
    };

    Ok(match locale {
        Some(locale) => translations.with_locale(locale),
        None => translations,
    })
}
