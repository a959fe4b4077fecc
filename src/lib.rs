//! randomidx - Deterministic synthetic corpus generator for indexing performance tests
//!
//! randomidx builds a reproducible stream of random documents (term lists plus
//! sparse value slots) from a single seed, feeds them to an index engine one
//! at a time and times the ingestion through a performance harness.
//!
//! # Architecture
//!
//! - **Random primitives**: seeded uniform integers, reals and words
//! - **Corpus**: document builder and sized corpus iterator
//! - **Engines**: in-memory inverted index, JSON-lines file, null sink
//! - **Harness**: testcase/indexing bracketing with latency histograms
//! - **Runner**: the begin/add/flush/end run sequence

pub mod config;
pub mod corpus;
pub mod engine;
pub mod harness;
pub mod output;
pub mod random;
pub mod runner;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use corpus::{CorpusGenerator, DocumentBuilder, SyntheticDocument};
pub use engine::IndexEngine;
pub use harness::{Harness, PerfLogger};
pub use random::RandomGenerator;

/// Result type used throughout randomidx
pub type Result<T> = anyhow::Result<T>;
