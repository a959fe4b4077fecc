//! Configuration module
//!
//! Handles built-in scenarios, CLI argument parsing, TOML configuration files,
//! and validation.

pub mod cli;
pub mod scenario;
pub mod toml;
pub mod validator;
pub mod workload;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use workload::*;

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scenario: ScenarioConfig,
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Naming used when reporting a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Test case name reported to the harness
    #[serde(default = "default_scenario_name")]
    pub name: String,
    /// Database name opened on the engine and reported as the dataset label
    #[serde(default = "default_dataset")]
    pub dataset: String,
}

fn default_scenario_name() -> String {
    "custom".to_string()
}

fn default_dataset() -> String {
    "1".to_string()
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: default_scenario_name(),
            dataset: default_dataset(),
        }
    }
}

/// Engine selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Engine implementation to write to
    #[serde(default, rename = "type")]
    pub engine_type: EngineType,
    /// Directory for engines that persist documents
    pub path: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON report file path
    pub json_output: Option<PathBuf>,
    /// Show per-slot population and cardinality
    #[serde(default)]
    pub show_slots: bool,
    /// Show per-document latency percentiles
    #[serde(default)]
    pub show_percentiles: bool,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Check every document against the distribution before adding it
    #[serde(default)]
    pub verify: bool,
    /// Dry run mode
    #[serde(default)]
    pub dry_run: bool,
    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.corpus;
        writeln!(f, "Scenario: {} (dataset \"{}\")", self.scenario.name, self.scenario.dataset)?;
        writeln!(f, "  Documents:    {}", c.runsize)?;
        writeln!(f, "  Seed:         {}", c.seed)?;
        writeln!(f, "  Terms/doc:    {}-{}", c.minterms, c.maxterms)?;
        writeln!(f, "  Term length:  {}-{} over {} letters", c.mintermlen, c.maxtermlen, c.termcharrange)?;
        writeln!(
            f,
            "  Value slots:  {} at p={} (length {}-{}, {} alphabet)",
            c.slots_used, c.slot_probability, c.slotval_minlen, c.slotval_maxlen, c.slot_alphabet
        )?;
        write!(f, "  Engine:       {}", self.engine.engine_type)?;
        if let Some(ref path) = self.engine.path {
            write!(f, " ({})", path.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mentions_scenario_and_engine() {
        let config = scenario::randomidx1();
        let text = config.to_string();

        assert!(text.contains("randomidx1"));
        assert!(text.contains("Documents:    1000"));
        assert!(text.contains("Engine:       memory"));
    }
}
