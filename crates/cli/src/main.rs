mod cli;
mod error;

use crate::cli::Cli;
use crate::error::Error;
use clap::Parser;
use config::{Config, ReportStyle};
use std::io::{IsTerminal, Write};
use std::process::ExitCode;
use tally::report::{AnsiRenderer, PlainRenderer, Renderer, ScoreReport};
use tally::score::{Scorer, WeightedScorer};
use tally::validate::validate_totals;
use tracing::{debug, error, warn};
use tracing_log::AsTrace;

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.log_level_filter().as_trace())
        .with_level(true)
        // the report owns stdout
        .with_writer(std::io::stderr)
        .init();

    debug!(config = ?cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    cli.apply(&mut config);

    if let Some(path) = &cli.dump_config {
        config.dump(path)?;
        return Ok(());
    }

    // clap enforces the positionals unless --dump-config was given
    let (official_path, prediction_path) = cli
        .official
        .as_ref()
        .zip(cli.prediction.as_ref())
        .ok_or(Error::MissingInput)?;

    let official = tally::loader::load_official(official_path)?;
    let prediction = tally::loader::load_prediction(prediction_path)?;

    let validation = validate_totals(&official, &prediction, config.scoring.allow_mismatch);
    for message in &validation.messages {
        if message.is_blocking() {
            error!("{message}");
        } else {
            warn!("{message}");
        }
    }
    if let Some(err) = validation.blocking_error() {
        return Err(err.into());
    }

    let scorecard = WeightedScorer::new(&config).score(&official, &prediction);

    let renderer: Box<dyn Renderer> = match config.report.style {
        ReportStyle::Plain => Box::new(PlainRenderer::new(&config)),
        ReportStyle::Ansi => Box::new(AnsiRenderer::new(&config)),
        ReportStyle::Auto => {
            if std::io::stdout().is_terminal() {
                Box::new(AnsiRenderer::new(&config))
            } else {
                Box::new(PlainRenderer::new(&config))
            }
        }
    };

    let rendered = renderer.render(&ScoreReport {
        scorecard: &scorecard,
        messages: &validation.messages,
        meta: &official.meta,
    });
    std::io::stdout().write_all(rendered.as_bytes())?;

    Ok(())
}
