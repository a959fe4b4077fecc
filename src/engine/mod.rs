//! Indexing engine abstraction
//!
//! This module defines the narrow interface through which generated documents
//! reach an indexing engine. The generator only ever opens one write session
//! per run, adds documents one at a time and issues a single flush at the end;
//! everything else (posting lists, storage, durability) belongs to the engine.
//!
//! # Engine Types
//!
//! - **memory**: In-memory inverted index with posting lists and value slots
//! - **jsonl**: Append-only JSON lines document log, flush = fsync
//! - **null**: Accepts and discards documents (measures generation alone)
//! - **mock**: Recording engine with configurable failures, for tests
//!
//! # Example
//!
//! ```
//! use randomidx::config::workload::EngineType;
//! use randomidx::engine::{open_writable, EngineOptions};
//!
//! let options = EngineOptions { engine_type: EngineType::Memory, path: None };
//! let mut engine = open_writable("1", &options).unwrap();
//! engine.flush().unwrap();
//! assert_eq!(engine.stats().flushes, 1);
//! ```

use crate::config::workload::EngineType;
use crate::config::EngineSettings;
use crate::corpus::SyntheticDocument;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Write session on an indexing engine
///
/// # Lifecycle
///
/// 1. Open a session via [`open_writable`] (or the concrete type's constructor)
/// 2. Call `add_document()` once per generated document
/// 3. Call `flush()` once after the last document
///
/// Adding documents after the flush is an error.
pub trait IndexEngine: Send {
    /// Ingest one document; the engine takes ownership of it
    fn add_document(&mut self, doc: SyntheticDocument) -> Result<()>;

    /// Commit everything added so far
    fn flush(&mut self) -> Result<()>;

    /// Counters describing what the engine has ingested
    fn stats(&self) -> EngineStats;

    /// Engine name for reports
    fn name(&self) -> &'static str;
}

/// Options for opening a write session
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub engine_type: EngineType,
    /// Directory for engines that persist documents
    pub path: Option<PathBuf>,
}

impl From<&EngineSettings> for EngineOptions {
    fn from(settings: &EngineSettings) -> Self {
        Self {
            engine_type: settings.engine_type,
            path: settings.path.clone(),
        }
    }
}

/// Engine-side counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    /// Documents accepted by `add_document`
    pub documents_added: u64,
    /// Documents covered by the last flush
    pub documents_committed: u64,
    /// Number of flushes issued
    pub flushes: u64,
    /// Distinct terms indexed (0 for engines without an index)
    pub distinct_terms: u64,
    /// Term postings indexed (0 for engines without an index)
    pub postings: u64,
    /// Bytes written to storage (0 for in-memory engines)
    pub bytes_written: u64,
}

/// Failures reported by the bundled engines
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine '{0}' has already been flushed; no further documents can be added")]
    Flushed(String),

    #[error("the {0} engine requires a path")]
    MissingPath(EngineType),

    #[error("document {ordinal} rejected: {reason}")]
    Rejected { ordinal: u64, reason: String },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Open a write session named `name`
pub fn open_writable(name: &str, options: &EngineOptions) -> Result<Box<dyn IndexEngine>> {
    let engine: Box<dyn IndexEngine> = match options.engine_type {
        EngineType::Memory => Box::new(memory::MemoryIndex::new(name)),
        EngineType::Null => Box::new(null::NullEngine::new(name)),
        EngineType::Jsonl => {
            let dir = options
                .path
                .as_ref()
                .ok_or(EngineError::MissingPath(EngineType::Jsonl))?;
            Box::new(jsonl::JsonlEngine::create(dir, name)?)
        }
    };

    tracing::debug!(engine = engine.name(), database = name, "opened writable database");
    Ok(engine)
}

pub mod jsonl;
pub mod memory;
pub mod mock;
pub mod null;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_memory() {
        let options = EngineOptions::default();
        let engine = open_writable("1", &options).unwrap();
        assert_eq!(engine.name(), "memory");
        assert_eq!(engine.stats(), EngineStats::default());
    }

    #[test]
    fn test_open_null() {
        let options = EngineOptions {
            engine_type: EngineType::Null,
            path: None,
        };
        assert_eq!(open_writable("1", &options).unwrap().name(), "null");
    }

    #[test]
    fn test_open_jsonl_requires_path() {
        let options = EngineOptions {
            engine_type: EngineType::Jsonl,
            path: None,
        };
        let err = open_writable("1", &options).err().unwrap();
        assert!(err.to_string().contains("requires a path"));
    }

    #[test]
    fn test_open_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let options = EngineOptions {
            engine_type: EngineType::Jsonl,
            path: Some(dir.path().to_path_buf()),
        };
        let engine = open_writable("db", &options).unwrap();
        assert_eq!(engine.name(), "jsonl");
        assert!(dir.path().join("db.jsonl").exists());
    }

    #[test]
    fn test_options_from_settings() {
        let settings = EngineSettings {
            engine_type: EngineType::Null,
            path: Some(PathBuf::from("/tmp/x")),
        };
        let options = EngineOptions::from(&settings);
        assert_eq!(options.engine_type, EngineType::Null);
        assert_eq!(options.path, Some(PathBuf::from("/tmp/x")));
    }
}
