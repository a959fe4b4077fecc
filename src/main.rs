//! randomidx CLI entry point

use anyhow::{Context, Result};
use randomidx::config::{cli::Cli, scenario, toml::load_config, validator::validate_config};
use randomidx::harness::PerfLogger;
use randomidx::output::json::{write_json_report, JsonReport};
use randomidx::output::text::{print_configuration, print_results};
use randomidx::runner::run_scenario;
use tracing_subscriber::EnvFilter;

/// Documents between progress events at debug level
const PROGRESS_EVERY: u64 = 100;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    if cli.list_scenarios {
        list_scenarios();
        return Ok(());
    }

    println!("randomidx v{}", env!("CARGO_PKG_VERSION"));
    println!("Synthetic corpus indexing benchmark");
    println!();

    let config = load_config(&cli)?;
    init_tracing(config.runtime.debug);

    validate_config(&config).context("Configuration validation failed")?;

    print_configuration(&config);

    if config.runtime.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!();
    println!("Starting test...");
    println!();

    let mut harness = PerfLogger::new().with_progress(PROGRESS_EVERY);
    let summary = run_scenario(&config, &mut harness)
        .with_context(|| format!("Scenario '{}' failed", config.scenario.name))?;

    print_results(&summary, harness.reports(), &config);

    if let Some(ref path) = config.output.json_output {
        let report = JsonReport::new(&config, &summary, harness.reports());
        write_json_report(path, &report)?;
        println!();
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

/// Install the global subscriber; `RUST_LOG` overrides the default level
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list_scenarios() {
    println!("Built-in scenarios:");
    for (name, description) in scenario::SCENARIOS {
        println!("  {:<22} {}", name, description);
    }
}
