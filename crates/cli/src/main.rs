use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use solidarity_cli::{App, Cli, Config, commands};
use solidarity_store::JsonFileStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let log_format = Config::log_format_from(|key| std::env::var(key).ok())?;
    solidarity_observability::init_with(log_format, level);

    let config = Config::load()?;
    tracing::debug!(data_file = %config.data_file.display(), "configuration loaded");

    let store = Arc::new(JsonFileStore::new(&config.data_file));
    let app = App::from_config(&config, store).context("building application state")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&app, cli.command, Utc::now(), &mut out)?;
    out.flush()?;
    Ok(())
}
