//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Resolve the base configuration (file or built-in scenario) and apply CLI overrides
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => scenario::builtin(&cli.scenario).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown scenario '{}' (use --list-scenarios to see the built-in ones)",
                cli.scenario
            )
        })?,
    };

    Ok(merge_cli_with_config(cli, config))
}

/// Merge CLI arguments with a configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    // Distribution overrides
    if let Some(seed) = cli.seed {
        config.corpus.seed = seed;
    }
    if let Some(runsize) = cli.runsize {
        config.corpus.runsize = runsize;
    }
    if let Some(policy) = cli.slot_alphabet {
        config.corpus.slot_alphabet = policy.into();
    }

    // Engine overrides
    if let Some(engine) = cli.engine {
        config.engine.engine_type = engine.into();
    }
    if let Some(ref path) = cli.path {
        config.engine.path = Some(path.clone());
    }

    // Output overrides
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.show_slots {
        config.output.show_slots = true;
    }
    if cli.show_percentiles {
        config.output.show_percentiles = true;
    }

    // Runtime overrides
    if cli.verify {
        config.runtime.verify = true;
    }
    if cli.dry_run {
        config.runtime.dry_run = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    config
}
