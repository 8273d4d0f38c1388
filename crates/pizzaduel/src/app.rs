//! Application entry point and dispatch.

use std::io::Read;

use anyhow::{Context, Result};
use tracing::info;

use pizzaduel_cli::input::parse_orders;
use pizzaduel_cli::output::{to_json, write_to_file};
use pizzaduel_cli::presenter::CliPresenter;
use pizzaduel_core::{CircularPizza, OrderBatch, TrapezoidalPizza};

use crate::config::AppConfig;
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        pizzaduel_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.verbose {
        info!(version = version::version(), "pizzaduel starting");
    }

    let text = read_input(config.input.as_deref())?;
    let batch = build_batch(&text)?;

    if config.json {
        println!("{}", to_json(&batch)?);
    } else {
        CliPresenter::new(config.quiet, config.verbose).present(&batch);
    }

    if let Some(ref path) = config.output {
        write_to_file(path, &batch.summarize())
            .with_context(|| format!("failed to write summary to {path}"))?;
    }

    Ok(())
}

/// Parse the order list text and construct a batch from it.
///
/// Keeps the original error types intact so the caller can map them to
/// exit codes.
pub fn build_batch(text: &str) -> Result<OrderBatch> {
    let requests = parse_orders(text)?;
    let mut batch = OrderBatch::new();
    for request in requests {
        let circular = CircularPizza::new(request.diameter)?;
        let trapezoid = TrapezoidalPizza::new(request.side_a, request.side_b, request.height)?;
        batch.add_order(circular, trapezoid);
    }
    Ok(batch)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {path}")),
    }
}
