//! In-memory inverted index
//!
//! A small stand-in for a real indexing engine: every added document is split
//! into per-term postings (document id plus within-document frequency) and its
//! populated value slots are stored per slot. This gives the generator a
//! realistic amount of indexing work to drive without any external service.

use super::{EngineError, EngineStats, IndexEngine};
use crate::corpus::SyntheticDocument;
use crate::Result;
use std::collections::{BTreeMap, HashMap};

/// One posting: a document containing a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: u64,
    /// Occurrences of the term in the document
    pub wdf: u32,
}

/// In-memory inverted index
#[derive(Debug, Default)]
pub struct MemoryIndex {
    name: String,
    postings: HashMap<String, Vec<Posting>>,
    /// Slot -> (doc id -> value)
    values: Vec<BTreeMap<u64, String>>,
    data: Vec<String>,
    total_postings: u64,
    committed: u64,
    flushes: u64,
    flushed: bool,
}

impl MemoryIndex {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Number of documents added
    pub fn doc_count(&self) -> u64 {
        self.data.len() as u64
    }

    /// Postings for `term`, in document order
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.postings.get(term).map_or(&[], Vec::as_slice)
    }

    /// Number of documents containing `term`
    pub fn term_freq(&self, term: &str) -> u64 {
        self.postings(term).len() as u64
    }

    /// Total occurrences of `term` across all documents
    pub fn collection_freq(&self, term: &str) -> u64 {
        self.postings(term).iter().map(|p| u64::from(p.wdf)).sum()
    }

    /// Value stored for `doc_id` in `slot`
    pub fn value(&self, doc_id: u64, slot: u32) -> Option<&str> {
        self.values
            .get(slot as usize)
            .and_then(|m| m.get(&doc_id))
            .map(String::as_str)
    }

    /// Number of distinct values stored in `slot`
    pub fn slot_cardinality(&self, slot: u32) -> usize {
        self.values.get(slot as usize).map_or(0, |m| {
            let mut distinct: Vec<&String> = m.values().collect();
            distinct.sort_unstable();
            distinct.dedup();
            distinct.len()
        })
    }

    /// Stored payload of `doc_id`
    pub fn data(&self, doc_id: u64) -> Option<&str> {
        self.data.get(doc_id as usize).map(String::as_str)
    }
}

impl IndexEngine for MemoryIndex {
    fn add_document(&mut self, doc: SyntheticDocument) -> Result<()> {
        if self.flushed {
            return Err(EngineError::Flushed(self.name.clone()).into());
        }

        let doc_id = self.data.len() as u64;

        let mut wdf: HashMap<String, u32> = HashMap::new();
        for term in doc.terms {
            *wdf.entry(term).or_insert(0) += 1;
        }
        self.total_postings += wdf.len() as u64;
        for (term, count) in wdf {
            self.postings
                .entry(term)
                .or_default()
                .push(Posting { doc_id, wdf: count });
        }

        if self.values.len() < doc.values.len() {
            self.values.resize_with(doc.values.len(), BTreeMap::new);
        }
        for (slot, value) in doc.values.into_iter().enumerate() {
            if let Some(value) = value {
                self.values[slot].insert(doc_id, value);
            }
        }

        self.data.push(doc.data);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.committed = self.doc_count();
        self.flushes += 1;
        self.flushed = true;
        Ok(())
    }

    fn stats(&self) -> EngineStats {
        EngineStats {
            documents_added: self.doc_count(),
            documents_committed: self.committed,
            flushes: self.flushes,
            distinct_terms: self.postings.len() as u64,
            postings: self.total_postings,
            bytes_written: 0,
        }
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(ordinal: u64, terms: &[&str], values: &[Option<&str>]) -> SyntheticDocument {
        SyntheticDocument {
            ordinal,
            data: format!("random document {}", ordinal),
            terms: terms.iter().map(|t| t.to_string()).collect(),
            values: values.iter().map(|v| v.map(str::to_string)).collect(),
        }
    }

    #[test]
    fn test_postings_and_wdf() {
        let mut index = MemoryIndex::new("1");
        index.add_document(doc(0, &["ab", "c", "ab"], &[])).unwrap();
        index.add_document(doc(1, &["c"], &[])).unwrap();

        assert_eq!(index.doc_count(), 2);
        assert_eq!(index.postings("ab"), &[Posting { doc_id: 0, wdf: 2 }]);
        assert_eq!(index.term_freq("c"), 2);
        assert_eq!(index.collection_freq("ab"), 2);
        assert_eq!(index.term_freq("zz"), 0);

        let stats = index.stats();
        assert_eq!(stats.distinct_terms, 2);
        assert_eq!(stats.postings, 3);
    }

    #[test]
    fn test_values_and_data() {
        let mut index = MemoryIndex::new("1");
        index.add_document(doc(0, &["a"], &[Some("ab"), None])).unwrap();
        index.add_document(doc(1, &["a"], &[Some("ab"), Some("b")])).unwrap();

        assert_eq!(index.value(0, 0), Some("ab"));
        assert_eq!(index.value(0, 1), None);
        assert_eq!(index.value(1, 1), Some("b"));
        assert_eq!(index.value(0, 7), None);
        assert_eq!(index.slot_cardinality(0), 1);
        assert_eq!(index.slot_cardinality(1), 1);
        assert_eq!(index.data(1), Some("random document 1"));
    }

    #[test]
    fn test_flush_commits_and_closes() {
        let mut index = MemoryIndex::new("1");
        index.add_document(doc(0, &["a"], &[])).unwrap();
        index.flush().unwrap();

        let stats = index.stats();
        assert_eq!(stats.documents_added, 1);
        assert_eq!(stats.documents_committed, 1);
        assert_eq!(stats.flushes, 1);

        let err = index.add_document(doc(1, &["a"], &[])).unwrap_err();
        assert!(err.to_string().contains("already been flushed"));
    }
}
