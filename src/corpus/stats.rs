//! Corpus shape statistics
//!
//! Accumulates what a run actually generated: term counts, term volume, and
//! for each value slot how often it was populated and how many distinct values
//! it received (its cardinality).

use super::SyntheticDocument;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Running statistics over generated documents
#[derive(Debug, Clone, Default)]
pub struct CorpusStats {
    documents: u64,
    total_terms: u64,
    term_bytes: u64,
    min_terms: Option<u64>,
    max_terms: u64,
    slots: Vec<SlotTally>,
}

#[derive(Debug, Clone, Default)]
struct SlotTally {
    populated: u64,
    distinct: HashSet<String>,
}

/// Summary of one value slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSummary {
    pub slot: u32,
    pub populated: u64,
    pub population_rate: f64,
    pub cardinality: u64,
}

impl CorpusStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one document
    pub fn record(&mut self, doc: &SyntheticDocument) {
        let terms = doc.terms.len() as u64;
        self.documents += 1;
        self.total_terms += terms;
        self.term_bytes += doc.term_bytes();
        self.min_terms = Some(self.min_terms.map_or(terms, |m| m.min(terms)));
        self.max_terms = self.max_terms.max(terms);

        if self.slots.len() < doc.values.len() {
            self.slots.resize_with(doc.values.len(), SlotTally::default);
        }
        for (slot, value) in doc.populated_values() {
            let tally = &mut self.slots[slot as usize];
            tally.populated += 1;
            if !tally.distinct.contains(value) {
                tally.distinct.insert(value.to_string());
            }
        }
    }

    pub fn documents(&self) -> u64 {
        self.documents
    }

    pub fn total_terms(&self) -> u64 {
        self.total_terms
    }

    pub fn term_bytes(&self) -> u64 {
        self.term_bytes
    }

    pub fn min_terms(&self) -> u64 {
        self.min_terms.unwrap_or(0)
    }

    pub fn max_terms(&self) -> u64 {
        self.max_terms
    }

    /// Mean terms per document
    pub fn mean_terms(&self) -> f64 {
        if self.documents == 0 {
            0.0
        } else {
            self.total_terms as f64 / self.documents as f64
        }
    }

    /// Number of slots seen so far
    pub fn slot_count(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Documents in which `slot` was populated
    pub fn populated(&self, slot: u32) -> u64 {
        self.slots.get(slot as usize).map_or(0, |t| t.populated)
    }

    /// Fraction of documents in which `slot` was populated
    pub fn population_rate(&self, slot: u32) -> f64 {
        if self.documents == 0 {
            0.0
        } else {
            self.populated(slot) as f64 / self.documents as f64
        }
    }

    /// Distinct values seen in `slot`
    pub fn cardinality(&self, slot: u32) -> u64 {
        self.slots.get(slot as usize).map_or(0, |t| t.distinct.len() as u64)
    }

    /// Per-slot summaries in slot order
    pub fn slot_summaries(&self) -> Vec<SlotSummary> {
        (0..self.slot_count())
            .map(|slot| SlotSummary {
                slot,
                populated: self.populated(slot),
                population_rate: self.population_rate(slot),
                cardinality: self.cardinality(slot),
            })
            .collect()
    }
}
