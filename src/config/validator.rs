//! Configuration validation

use super::*;
use crate::random::ALPHABET_SIZE;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_scenario(&config.scenario)?;
    validate_corpus(&config.corpus)?;
    validate_engine(&config.engine)?;

    Ok(())
}

/// Validate scenario naming
pub fn validate_scenario(scenario: &ScenarioConfig) -> Result<()> {
    if scenario.name.trim().is_empty() {
        anyhow::bail!("scenario name must not be empty");
    }

    if scenario.dataset.trim().is_empty() {
        anyhow::bail!("scenario dataset must not be empty");
    }

    Ok(())
}

/// Validate distribution parameters
pub fn validate_corpus(corpus: &CorpusConfig) -> Result<()> {
    validate_range("minterms", corpus.minterms, "maxterms", corpus.maxterms)?;
    validate_range("mintermlen", corpus.mintermlen, "maxtermlen", corpus.maxtermlen)?;
    validate_range(
        "slotval_minlen",
        corpus.slotval_minlen,
        "slotval_maxlen",
        corpus.slotval_maxlen,
    )?;

    // Draws take max - min + 1 values, which must fit in u32
    if corpus.maxterms - corpus.minterms == u32::MAX
        || corpus.maxtermlen - corpus.mintermlen == u32::MAX
        || corpus.slotval_maxlen - corpus.slotval_minlen == u32::MAX
    {
        anyhow::bail!("ranges may not span the full 32-bit integer range");
    }

    if !(0.0..=1.0).contains(&corpus.slot_probability) {
        anyhow::bail!(
            "slot_probability must be between 0.0 and 1.0, got {}",
            corpus.slot_probability
        );
    }

    if corpus.termcharrange == 0 || corpus.termcharrange > ALPHABET_SIZE {
        anyhow::bail!(
            "termcharrange must be between 1 and {}, got {}",
            ALPHABET_SIZE,
            corpus.termcharrange
        );
    }

    if let Some(max_slots) = corpus.slot_alphabet.max_slots() {
        if corpus.slots_used > max_slots {
            anyhow::bail!(
                "slots_used ({}) needs {} letters for its last slot but the alphabet has {}; \
                 use slot_alphabet = \"cap\" or \"wrap\" for more than {} slots",
                corpus.slots_used,
                corpus.slot_char_range(corpus.slots_used - 1),
                ALPHABET_SIZE,
                max_slots
            );
        }
    }

    if corpus.runsize == 0 {
        tracing::warn!("runsize is 0, no documents will be generated");
    }

    if corpus.slots_used > 0 && corpus.slot_probability == 0.0 {
        tracing::warn!("slot_probability is 0, value slots will always be empty");
    }

    Ok(())
}

fn validate_range(min_name: &str, min: u32, max_name: &str, max: u32) -> Result<()> {
    if min > max {
        anyhow::bail!("{} ({}) must not exceed {} ({})", min_name, min, max_name, max);
    }
    Ok(())
}

/// Validate engine selection
pub fn validate_engine(engine: &EngineSettings) -> Result<()> {
    if engine.engine_type == EngineType::Jsonl && engine.path.is_none() {
        anyhow::bail!("the jsonl engine requires an output directory (engine.path)");
    }

    if engine.engine_type != EngineType::Jsonl && engine.path.is_some() {
        tracing::warn!(
            "engine.path is ignored by the {} engine",
            engine.engine_type
        );
    }

    Ok(())
}
