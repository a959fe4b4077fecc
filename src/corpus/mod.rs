//! Synthetic document generation
//!
//! This module turns a [`CorpusConfig`] and a seeded [`RandomGenerator`] into
//! a stream of synthetic documents for indexing benchmarks.
//!
//! # Document Shape
//!
//! Every document carries:
//!
//! - **data**: a label derived from its ordinal (`random document 17`)
//! - **terms**: between `minterms` and `maxterms` random words, each between
//!   `mintermlen` and `maxtermlen` letters over `termcharrange` letters.
//!   Words repeat freely; repeats model term frequency.
//! - **values**: one entry per slot, populated with probability
//!   `slot_probability`. Slot `s` draws its letters from a larger alphabet than
//!   slot `s - 1`, so early slots have few distinct values and later slots
//!   many.
//!
//! # Draw Order
//!
//! The random stream is consumed in a fixed order per document: term count,
//! then length and letters of every term, then for each slot one population
//! draw followed by length and letters if populated. Keeping this order fixed
//! is what makes a corpus reproducible from its seed.
//!
//! # Example
//!
//! ```
//! use randomidx::config::scenario::randomidx1;
//! use randomidx::corpus::CorpusGenerator;
//!
//! let corpus = randomidx1().corpus;
//! let docs: Vec<_> = CorpusGenerator::new(corpus.clone()).take(3).collect();
//!
//! assert_eq!(docs[0].data, "random document 0");
//! assert!(docs[0].terms.len() >= 100 && docs[0].terms.len() <= 1000);
//! assert_eq!(docs[0].values.len(), 10);
//! ```

pub mod stats;
pub mod verify;

use crate::config::workload::CorpusConfig;
use crate::random::RandomGenerator;
use serde::{Deserialize, Serialize};

/// One generated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticDocument {
    /// Position of the document in the run
    pub ordinal: u64,
    /// Opaque payload stored alongside the document
    pub data: String,
    /// Terms in generation order; duplicates are kept
    pub terms: Vec<String>,
    /// Value per slot index, `None` where the slot was not populated
    pub values: Vec<Option<String>>,
}

impl SyntheticDocument {
    /// Value stored in `slot`, if populated
    pub fn value(&self, slot: u32) -> Option<&str> {
        self.values.get(slot as usize).and_then(|v| v.as_deref())
    }

    /// Iterate over populated slots as `(slot, value)` pairs
    pub fn populated_values(&self) -> impl Iterator<Item = (u32, &str)> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(slot, v)| v.as_deref().map(|v| (slot as u32, v)))
    }

    /// Total number of bytes across all terms
    pub fn term_bytes(&self) -> u64 {
        self.terms.iter().map(|t| t.len() as u64).sum()
    }
}

/// Builds one document per call from a fixed distribution
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    config: CorpusConfig,
}

impl DocumentBuilder {
    pub fn new(config: CorpusConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    /// Build the document at position `ordinal`, advancing `rng`
    ///
    /// # Panics
    ///
    /// Panics if the configuration has inverted ranges or an alphabet outside
    /// 1..=26; run it through the validator first.
    pub fn build(&self, rng: &mut RandomGenerator, ordinal: u64) -> SyntheticDocument {
        let c = &self.config;

        let count = rng.uniform_int_between(c.minterms, c.maxterms);
        let terms = (0..count)
            .map(|_| {
                let len = rng.uniform_int_between(c.mintermlen, c.maxtermlen);
                rng.random_word(len, c.termcharrange)
            })
            .collect();

        let values = (0..c.slots_used)
            .map(|slot| {
                if rng.uniform_01() < c.slot_probability {
                    let len = rng.uniform_int_between(c.slotval_minlen, c.slotval_maxlen);
                    Some(rng.random_word(len, c.slot_char_range(slot)))
                } else {
                    None
                }
            })
            .collect();

        SyntheticDocument {
            ordinal,
            data: format!("random document {}", ordinal),
            terms,
            values,
        }
    }
}

/// Lazily generates the documents of a whole run
///
/// Owns the run's random stream: seeded once at construction and advanced by
/// every document, never reset.
#[derive(Debug, Clone)]
pub struct CorpusGenerator {
    builder: DocumentBuilder,
    rng: RandomGenerator,
    next: u64,
    runsize: u64,
}

impl CorpusGenerator {
    /// Create a generator for `config.runsize` documents seeded with `config.seed`
    pub fn new(config: CorpusConfig) -> Self {
        let rng = RandomGenerator::with_seed(config.seed);
        let runsize = config.runsize;
        Self {
            builder: DocumentBuilder::new(config),
            rng,
            next: 0,
            runsize,
        }
    }

    /// Ordinal of the next document to be generated
    pub fn current_index(&self) -> u64 {
        self.next
    }

    pub fn config(&self) -> &CorpusConfig {
        self.builder.config()
    }

    /// Uniform draws consumed so far
    pub fn draws(&self) -> u64 {
        self.rng.draws()
    }
}

impl Iterator for CorpusGenerator {
    type Item = SyntheticDocument;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.runsize {
            return None;
        }

        let doc = self.builder.build(&mut self.rng, self.next);
        self.next += 1;
        Some(doc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.runsize - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CorpusGenerator {}
