//! Workload definition structures

use crate::random::ALPHABET_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distribution parameters that shape every generated document
///
/// Fixed for the lifetime of a run. Field names follow the scenario literals
/// they are usually copied from (`minterms`, `slotval_maxlen`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Number of documents to generate
    pub runsize: u64,
    /// Seed for the run's random stream
    pub seed: u64,
    /// Number of value slots per document
    pub slots_used: u32,
    /// Probability that a given slot is populated (0.0-1.0)
    pub slot_probability: f64,
    /// Minimum value length in characters
    pub slotval_minlen: u32,
    /// Maximum value length in characters
    pub slotval_maxlen: u32,
    /// Minimum number of terms per document
    pub minterms: u32,
    /// Maximum number of terms per document
    pub maxterms: u32,
    /// Minimum term length in characters
    pub mintermlen: u32,
    /// Maximum term length in characters
    pub maxtermlen: u32,
    /// Number of alphabet letters terms are drawn from
    pub termcharrange: u32,
    /// How slot alphabets grow past the end of the base alphabet
    #[serde(default)]
    pub slot_alphabet: SlotAlphabet,
}

impl CorpusConfig {
    /// Alphabet size used for values of the given slot
    pub fn slot_char_range(&self, slot: u32) -> u32 {
        self.slot_alphabet.char_range(slot)
    }
}

/// Alphabet growth policy for value slots
///
/// Slot `s` nominally draws its values from `s + 2` letters, so later slots
/// see more distinct values. The base alphabet only has 26 letters; this
/// policy decides what happens from slot 25 onwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotAlphabet {
    /// `s + 2` letters; configurations that would exceed 26 are rejected
    #[default]
    Strict,
    /// `min(s + 2, 26)` letters
    Cap,
    /// `2 + s % 25` letters, cycling back to two letters after slot 24
    Wrap,
}

impl SlotAlphabet {
    /// Alphabet size for slot `slot` under this policy
    pub fn char_range(self, slot: u32) -> u32 {
        match self {
            SlotAlphabet::Strict => slot.saturating_add(2),
            SlotAlphabet::Cap => slot.saturating_add(2).min(ALPHABET_SIZE),
            SlotAlphabet::Wrap => 2 + slot % (ALPHABET_SIZE - 1),
        }
    }

    /// Largest slot count this policy supports
    pub fn max_slots(self) -> Option<u32> {
        match self {
            SlotAlphabet::Strict => Some(ALPHABET_SIZE - 1),
            SlotAlphabet::Cap | SlotAlphabet::Wrap => None,
        }
    }
}

impl fmt::Display for SlotAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotAlphabet::Strict => write!(f, "strict"),
            SlotAlphabet::Cap => write!(f, "cap"),
            SlotAlphabet::Wrap => write!(f, "wrap"),
        }
    }
}

/// Indexing engine type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    /// In-memory inverted index
    #[default]
    Memory,
    /// Append-only JSON lines document log
    Jsonl,
    /// Accepts and discards documents
    Null,
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineType::Memory => write!(f, "memory"),
            EngineType::Jsonl => write!(f, "jsonl"),
            EngineType::Null => write!(f, "null"),
        }
    }
}
