//! JSON lines document log
//!
//! Writes each added document as one JSON object per line to
//! `<dir>/<name>.jsonl`. Writes are buffered; `flush()` drains the buffer and
//! calls `sync_all` so the whole run is durable before measurement ends.

use super::{EngineError, EngineStats, IndexEngine};
use crate::corpus::SyntheticDocument;
use crate::Result;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct JsonlEngine {
    name: String,
    path: PathBuf,
    writer: BufWriter<File>,
    added: u64,
    committed: u64,
    flushes: u64,
    bytes_written: u64,
}

impl JsonlEngine {
    /// Create (or truncate) `<dir>/<name>.jsonl`, creating `dir` if needed
    pub fn create(dir: &Path, name: &str) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create engine directory: {}", dir.display()))?;

        let path = dir.join(format!("{}.jsonl", name));
        let file = File::create(&path).map_err(|source| EngineError::Io {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            name: name.to_string(),
            path,
            writer: BufWriter::new(file),
            added: 0,
            committed: 0,
            flushes: 0,
            bytes_written: 0,
        })
    }

    /// Path of the document log
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> EngineError {
        EngineError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl IndexEngine for JsonlEngine {
    fn add_document(&mut self, doc: SyntheticDocument) -> Result<()> {
        if self.flushes > 0 {
            return Err(EngineError::Flushed(self.name.clone()).into());
        }

        let mut line = serde_json::to_vec(&doc)
            .with_context(|| format!("Failed to encode document {}", doc.ordinal))?;
        line.push(b'\n');

        self.writer.write_all(&line).map_err(|e| self.io_error(e))?;
        self.bytes_written += line.len() as u64;
        self.added += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.io_error(e))?;
        self.writer.get_ref().sync_all().map_err(|e| self.io_error(e))?;
        self.committed = self.added;
        self.flushes += 1;
        Ok(())
    }

    fn stats(&self) -> EngineStats {
        EngineStats {
            documents_added: self.added,
            documents_committed: self.committed,
            flushes: self.flushes,
            bytes_written: self.bytes_written,
            ..EngineStats::default()
        }
    }

    fn name(&self) -> &'static str {
        "jsonl"
    }
}
