//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// randomidx - Synthetic random-index workload generator
#[derive(Parser, Debug)]
#[command(name = "randomidx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Built-in scenario to run (see --list-scenarios)
    #[arg(long, default_value = "randomidx1")]
    pub scenario: String,

    /// TOML configuration file (replaces the built-in scenario)
    #[arg(short = 'c', long, env = "RANDOMIDX_CONFIG")]
    pub config: Option<PathBuf>,

    /// List built-in scenarios and exit
    #[arg(long)]
    pub list_scenarios: bool,

    // === Distribution Overrides ===
    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of documents to generate
    #[arg(short = 'n', long)]
    pub runsize: Option<u64>,

    /// Value slot alphabet policy
    #[arg(long, value_enum)]
    pub slot_alphabet: Option<SlotAlphabet>,

    // === Engine Options ===
    /// Indexing engine
    #[arg(short = 'e', long, value_enum)]
    pub engine: Option<EngineType>,

    /// Output directory for engines that persist documents
    #[arg(long)]
    pub path: Option<PathBuf>,

    // === Output Options ===
    /// Write a JSON report to this file
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Show per-slot population rate and cardinality
    #[arg(long)]
    pub show_slots: bool,

    /// Show per-document latency percentiles
    #[arg(long)]
    pub show_percentiles: bool,

    // === Runtime Options ===
    /// Check every generated document against the distribution
    #[arg(long)]
    pub verify: bool,

    /// Validate and print the configuration without running
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Indexing engine type
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineType {
    /// In-memory inverted index
    Memory,
    /// JSON lines document log on disk
    Jsonl,
    /// Discard documents (measures generation only)
    Null,
}

/// Value slot alphabet policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SlotAlphabet {
    /// Reject slot counts that outgrow the alphabet
    Strict,
    /// Stop growing at 26 letters
    Cap,
    /// Cycle back to two letters
    Wrap,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl From<EngineType> for super::workload::EngineType {
    fn from(engine: EngineType) -> Self {
        match engine {
            EngineType::Memory => Self::Memory,
            EngineType::Jsonl => Self::Jsonl,
            EngineType::Null => Self::Null,
        }
    }
}

impl From<SlotAlphabet> for super::workload::SlotAlphabet {
    fn from(policy: SlotAlphabet) -> Self {
        match policy {
            SlotAlphabet::Strict => Self::Strict,
            SlotAlphabet::Cap => Self::Cap,
            SlotAlphabet::Wrap => Self::Wrap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["randomidx"]).unwrap();
        assert_eq!(cli.scenario, "randomidx1");
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
        assert!(cli.engine.is_none());
        assert!(!cli.verify);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "randomidx",
            "--scenario",
            "randomidx-smoke",
            "--seed",
            "7",
            "-n",
            "25",
            "--engine",
            "jsonl",
            "--path",
            "/tmp/out",
            "--slot-alphabet",
            "wrap",
            "--verify",
        ])
        .unwrap();

        assert_eq!(cli.scenario, "randomidx-smoke");
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.runsize, Some(25));
        assert_eq!(cli.engine, Some(EngineType::Jsonl));
        assert_eq!(cli.path, Some(PathBuf::from("/tmp/out")));
        assert_eq!(cli.slot_alphabet, Some(SlotAlphabet::Wrap));
        assert!(cli.verify);
    }

    #[test]
    fn test_cli_rejects_unknown_engine() {
        assert!(Cli::try_parse_from(["randomidx", "--engine", "xapian"]).is_err());
    }
}
