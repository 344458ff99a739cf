use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use primetally::cli::Cli;
use primetally::config::Config;
use primetally::diag::DiagLogger;
use primetally::shutdown::ShutdownFlag;
use primetally::trace::init_tracing;
use primetally::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);

    let shutdown = ShutdownFlag::new();
    shutdown
        .register_signals()
        .context("failed to register signal handlers")?;

    let diag = Arc::new(DiagLogger::new(config.diag.clone()));
    let result = runtime::run(&config, shutdown, Arc::clone(&diag));

    // Join the diag writer on the way out so the sink is flushed.
    if let Some(diag) = Arc::into_inner(diag) {
        diag.close();
    }

    result.context("terminal ui failed")
}
