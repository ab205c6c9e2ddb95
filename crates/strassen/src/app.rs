//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::{info, warn};

use strassen_cli::output::{to_json, write_to_file};
use strassen_cli::presenter::CLIResultPresenter;
use strassen_core::observers::LoggingObserver;
use strassen_core::{CancellationToken, DefaultFactory, DEFAULT_TOLERANCE};
use strassen_orchestration::interfaces::ResultPresenter;
use strassen_orchestration::multiplier_selection::get_multipliers_to_run;
use strassen_orchestration::orchestrator::{
    analyze_comparison_results, execute_multiplications_with_observer,
};

use crate::config::AppConfig;
use crate::input::load_operands;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let timeout = config.timeout_duration()?;
    let (a, b) = load_operands(config)?;

    let factory = DefaultFactory::with_options(config.options());
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;

    let cancel = CancellationToken::with_timeout(timeout);
    ctrlc_handler(cancel.clone());

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.details);
    if config.verbose && !config.json {
        presenter.present_operands(&a, &b);
    }

    info!(
        algo = %config.algo,
        shape = %a.shape(),
        multipliers = multipliers.len(),
        "Starting multiplication"
    );
    let observer = LoggingObserver::new();
    let results = execute_multiplications_with_observer(&multipliers, &a, &b, &cancel, &observer);

    // Present results
    let mut shown = false;
    for result in &results {
        match &result.outcome {
            Ok(product) if config.json => {
                if !shown {
                    println!("{}", to_json(product)?);
                }
            }
            Ok(product) => {
                if !(shown && config.quiet) {
                    presenter.present_result(result, product);
                }
            }
            // A lone failure is reported once, by main.
            Err(e) if results.len() > 1 => {
                presenter.present_error(&format!("{}: {e}", result.algorithm));
            }
            Err(_) => {}
        }
        shown |= result.outcome.is_ok();
    }

    // Present comparison if multiple
    if results.len() > 1 && !config.json {
        presenter.present_comparison(&results);
    }

    // Write to file if requested
    if let Some(path) = &config.output {
        if let Some(product) = results.iter().find_map(|r| r.product()) {
            write_to_file(path, product)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
    }

    if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
        return Err(err.clone().into());
    }

    // Analyze results
    if results.len() > 1 {
        analyze_comparison_results(&results, DEFAULT_TOLERANCE)?;
    }

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(e) = ctrlc::set_handler(move || {
        cancel.cancel();
    }) {
        warn!(error = %e, "Failed to install Ctrl+C handler");
    }
}
