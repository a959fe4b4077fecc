//! Mock indexing engine for testing
//!
//! This module provides a mock implementation of the IndexEngine trait that can
//! be used in tests. The mock engine records every document it receives and can
//! be configured to fail, so runner behavior can be checked without a real
//! index.
//!
//! # Features
//!
//! - Records all added documents in order
//! - Counts flushes
//! - Fails on the Nth `add_document` or on `flush` when configured
//! - Clones share state, so a test can keep a handle after giving one away
//!
//! # Example
//!
//! ```
//! use randomidx::engine::IndexEngine;
//! use randomidx::engine::mock::MockEngine;
//! use randomidx::corpus::SyntheticDocument;
//!
//! let mut engine = MockEngine::new();
//! let handle = engine.clone();
//!
//! let doc = SyntheticDocument {
//!     ordinal: 0,
//!     data: "random document 0".to_string(),
//!     terms: vec!["abc".to_string()],
//!     values: vec![None],
//! };
//! engine.add_document(doc).unwrap();
//! engine.flush().unwrap();
//!
//! assert_eq!(handle.added_count(), 1);
//! assert_eq!(handle.flush_count(), 1);
//! ```

use super::{EngineError, EngineStats, IndexEngine};
use crate::corpus::SyntheticDocument;
use crate::Result;
use std::sync::{Arc, Mutex};

/// Mock indexing engine for testing
#[derive(Clone, Default)]
pub struct MockEngine {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    documents: Vec<SyntheticDocument>,
    flushes: u64,
    committed: u64,
    /// Fail the add whose zero-based position equals this value
    fail_on_add: Option<u64>,
    fail_flush: bool,
    error_message: Option<String>,
}

impl MockEngine {
    /// Create a new mock engine that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `n`th call to `add_document` (zero-based)
    pub fn set_fail_on_add(&self, n: u64) {
        self.state.lock().unwrap().fail_on_add = Some(n);
    }

    /// Configure `flush` to fail
    pub fn set_fail_flush(&self, fail: bool) {
        self.state.lock().unwrap().fail_flush = fail;
    }

    /// Set the error message returned by injected failures
    pub fn set_error_message(&self, message: String) {
        self.state.lock().unwrap().error_message = Some(message);
    }

    /// Copy of all documents added so far
    pub fn documents(&self) -> Vec<SyntheticDocument> {
        self.state.lock().unwrap().documents.clone()
    }

    /// Number of documents added
    pub fn added_count(&self) -> u64 {
        self.state.lock().unwrap().documents.len() as u64
    }

    /// Number of flushes issued
    pub fn flush_count(&self) -> u64 {
        self.state.lock().unwrap().flushes
    }
}

impl MockState {
    fn injected_error(&self, ordinal: u64, default: &str) -> anyhow::Error {
        EngineError::Rejected {
            ordinal,
            reason: self.error_message.clone().unwrap_or_else(|| default.to_string()),
        }
        .into()
    }
}

impl IndexEngine for MockEngine {
    fn add_document(&mut self, doc: SyntheticDocument) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        if state.flushes > 0 {
            return Err(EngineError::Flushed("mock".to_string()).into());
        }
        if state.fail_on_add == Some(state.documents.len() as u64) {
            return Err(state.injected_error(doc.ordinal, "mock add failure"));
        }

        state.documents.push(doc);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let mut state = self.state.lock().unwrap();

        if state.fail_flush {
            let ordinal = state.documents.len() as u64;
            return Err(state.injected_error(ordinal, "mock flush failure"));
        }

        state.committed = state.documents.len() as u64;
        state.flushes += 1;
        Ok(())
    }

    fn stats(&self) -> EngineStats {
        let state = self.state.lock().unwrap();
        EngineStats {
            documents_added: state.documents.len() as u64,
            documents_committed: state.committed,
            flushes: state.flushes,
            ..EngineStats::default()
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(ordinal: u64) -> SyntheticDocument {
        SyntheticDocument {
            ordinal,
            data: format!("random document {}", ordinal),
            terms: vec![],
            values: vec![],
        }
    }

    #[test]
    fn test_mock_engine_records() {
        let mut engine = MockEngine::new();
        let handle = engine.clone();

        engine.add_document(doc(0)).unwrap();
        engine.add_document(doc(1)).unwrap();

        assert_eq!(handle.added_count(), 2);
        assert_eq!(handle.documents()[1].ordinal, 1);
        assert_eq!(handle.flush_count(), 0);
        assert_eq!(engine.stats().documents_committed, 0);

        engine.flush().unwrap();
        assert_eq!(engine.stats().documents_committed, 2);
    }

    #[test]
    fn test_mock_engine_fail_on_add() {
        let mut engine = MockEngine::new();
        engine.set_fail_on_add(1);
        engine.set_error_message("disk full".to_string());

        engine.add_document(doc(0)).unwrap();
        let err = engine.add_document(doc(1)).unwrap_err();
        assert!(err.to_string().contains("disk full"));
        assert_eq!(engine.added_count(), 1);
    }

    #[test]
    fn test_mock_engine_fail_flush() {
        let mut engine = MockEngine::new();
        engine.set_fail_flush(true);

        assert!(engine.flush().is_err());
        assert_eq!(engine.flush_count(), 0);
    }

    #[test]
    fn test_mock_engine_rejects_after_flush() {
        let mut engine = MockEngine::new();
        engine.flush().unwrap();
        assert!(engine.add_document(doc(0)).is_err());
    }
}
