//! Engine that discards every document
//!
//! Useful as a baseline: a run against it measures the cost of generating the
//! corpus alone.

use super::{EngineError, EngineStats, IndexEngine};
use crate::corpus::SyntheticDocument;
use crate::Result;

#[derive(Debug, Default)]
pub struct NullEngine {
    name: String,
    added: u64,
    committed: u64,
    flushes: u64,
}

impl NullEngine {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl IndexEngine for NullEngine {
    fn add_document(&mut self, _doc: SyntheticDocument) -> Result<()> {
        if self.flushes > 0 {
            return Err(EngineError::Flushed(self.name.clone()).into());
        }
        self.added += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.committed = self.added;
        self.flushes += 1;
        Ok(())
    }

    fn stats(&self) -> EngineStats {
        EngineStats {
            documents_added: self.added,
            documents_committed: self.committed,
            flushes: self.flushes,
            ..EngineStats::default()
        }
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
