//! Built-in performance-test scenarios
//!
//! Each scenario is a complete [`Config`] with literal distribution parameters.
//! Scenarios are looked up by name from the CLI; a TOML file can define any
//! other combination.

use super::workload::{CorpusConfig, SlotAlphabet};
use super::{Config, ScenarioConfig};

/// Names of all built-in scenarios, in listing order
pub const SCENARIOS: &[(&str, &str)] = &[
    ("randomidx1", "1000 documents, 100-1000 terms each, 10 value slots"),
    ("randomidx-smoke", "100 small documents for quick checks"),
    ("randomidx-wideslots", "500 documents with 40 capped value slots"),
];

/// Look up a built-in scenario by name
pub fn builtin(name: &str) -> Option<Config> {
    match name {
        "randomidx1" => Some(randomidx1()),
        "randomidx-smoke" => Some(smoke()),
        "randomidx-wideslots" => Some(wide_slots()),
        _ => None,
    }
}

/// The reference scenario: randomly generated index of 1000 documents
pub fn randomidx1() -> Config {
    scenario(
        "randomidx1",
        CorpusConfig {
            runsize: 1000,
            seed: 42,
            slots_used: 10,
            slot_probability: 0.7,
            slotval_minlen: 1,
            slotval_maxlen: 6,
            minterms: 100,
            maxterms: 1000,
            mintermlen: 1,
            maxtermlen: 10,
            termcharrange: 10,
            slot_alphabet: SlotAlphabet::Strict,
        },
    )
}

fn smoke() -> Config {
    scenario(
        "randomidx-smoke",
        CorpusConfig {
            runsize: 100,
            minterms: 5,
            maxterms: 50,
            ..randomidx1().corpus
        },
    )
}

fn wide_slots() -> Config {
    scenario(
        "randomidx-wideslots",
        CorpusConfig {
            runsize: 500,
            slots_used: 40,
            slot_probability: 0.5,
            minterms: 10,
            maxterms: 100,
            slot_alphabet: SlotAlphabet::Cap,
            ..randomidx1().corpus
        },
    )
}

fn scenario(name: &str, corpus: CorpusConfig) -> Config {
    Config {
        scenario: ScenarioConfig {
            name: name.to_string(),
            ..ScenarioConfig::default()
        },
        corpus,
        engine: Default::default(),
        output: Default::default(),
        runtime: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validator::validate_config;

    #[test]
    fn test_all_builtins_resolve_and_validate() {
        for (name, _) in SCENARIOS {
            let config = builtin(name).unwrap_or_else(|| panic!("missing scenario {}", name));
            assert_eq!(config.scenario.name, *name);
            validate_config(&config).unwrap();
        }
    }

    #[test]
    fn test_randomidx1_literals() {
        let c = randomidx1().corpus;
        assert_eq!(c.runsize, 1000);
        assert_eq!(c.seed, 42);
        assert_eq!(c.slots_used, 10);
        assert_eq!(c.slot_probability, 0.7);
        assert_eq!((c.slotval_minlen, c.slotval_maxlen), (1, 6));
        assert_eq!((c.minterms, c.maxterms), (100, 1000));
        assert_eq!((c.mintermlen, c.maxtermlen), (1, 10));
        assert_eq!(c.termcharrange, 10);
    }

    #[test]
    fn test_unknown_scenario() {
        assert!(builtin("randomidx2").is_none());
    }
}
