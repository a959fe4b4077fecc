//! Run orchestration
//!
//! Drives one performance-test run end to end:
//!
//! ```text
//! begin_testcase ─► open_writable ─► begin_indexing
//!     ─► (build document ─► add_document ─► record_document_indexed) x runsize
//!     ─► flush ─► end_indexing ─► end_testcase
//! ```
//!
//! Generation and submission alternate strictly: document `i + 1` is not
//! generated until document `i` has been handed to the engine. The random
//! stream is seeded once before the loop and flush is issued exactly once
//! after it. Any engine error aborts the run and is returned unchanged; no
//! retry is attempted.
//!
//! Corpus statistics and `--verify` checks come from a separate pass over
//! the same seed before the test case begins, so the timed window covers
//! only generation and `add_document`.

use crate::config::Config;
use crate::corpus::stats::CorpusStats;
use crate::corpus::verify::check_document;
use crate::corpus::CorpusGenerator;
use crate::engine::{open_writable, EngineOptions, EngineStats, IndexEngine};
use crate::harness::Harness;
use crate::util::time::Timestamp;
use crate::Result;
use std::time::Duration;

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub scenario: String,
    pub dataset: String,
    pub engine: &'static str,
    /// Documents generated and added
    pub documents: u64,
    /// Uniform draws consumed from the random stream
    pub draws: u64,
    /// Time from the first document to the end of the flush
    pub elapsed: Duration,
    /// Time spent inside the flush
    pub flush_time: Duration,
    pub corpus: CorpusStats,
    pub engine_stats: EngineStats,
}

/// Run a scenario against the engine selected in its configuration
pub fn run_scenario(config: &Config, harness: &mut dyn Harness) -> Result<RunSummary> {
    let corpus = survey_corpus(config)?;

    harness.begin_testcase(&config.scenario.name);

    let options = EngineOptions::from(&config.engine);
    let mut engine = open_writable(&config.scenario.dataset, &options)?;
    let summary = index_corpus(config, engine.as_mut(), harness, corpus)?;

    harness.end_testcase();
    Ok(summary)
}

/// Run a scenario against an already opened engine
pub fn run_with_engine(
    config: &Config,
    engine: &mut dyn IndexEngine,
    harness: &mut dyn Harness,
) -> Result<RunSummary> {
    let corpus = survey_corpus(config)?;

    harness.begin_testcase(&config.scenario.name);
    let summary = index_corpus(config, engine, harness, corpus)?;
    harness.end_testcase();
    Ok(summary)
}

/// Regenerate the corpus untimed, collecting statistics
///
/// With `runtime.verify` set, every document is checked against the
/// distribution and the first violation is returned as an error.
pub fn survey_corpus(config: &Config) -> Result<CorpusStats> {
    let mut stats = CorpusStats::new();
    for doc in CorpusGenerator::new(config.corpus.clone()) {
        if config.runtime.verify {
            check_document(&doc, &config.corpus)?;
        }
        stats.record(&doc);
    }
    Ok(stats)
}

/// Generate the whole corpus into `engine` and flush it once
fn index_corpus(
    config: &Config,
    engine: &mut dyn IndexEngine,
    harness: &mut dyn Harness,
    corpus: CorpusStats,
) -> Result<RunSummary> {
    let corpus_config = &config.corpus;
    let mut generator = CorpusGenerator::new(corpus_config.clone());
    let mut documents = 0u64;

    tracing::debug!(
        seed = corpus_config.seed,
        runsize = corpus_config.runsize,
        engine = engine.name(),
        "generating corpus"
    );

    harness.begin_indexing(&config.scenario.dataset);
    let started = Timestamp::now();

    for doc in generator.by_ref() {
        engine.add_document(doc)?;
        documents += 1;
        harness.record_document_indexed();
    }

    let flush_started = Timestamp::now();
    engine.flush()?;
    let flush_time = flush_started.elapsed();
    let elapsed = started.elapsed();

    harness.end_indexing();

    tracing::debug!(
        documents,
        flush_ms = flush_time.as_millis() as u64,
        "corpus committed"
    );

    Ok(RunSummary {
        scenario: config.scenario.name.clone(),
        dataset: config.scenario.dataset.clone(),
        engine: engine.name(),
        documents,
        draws: generator.draws(),
        elapsed,
        flush_time,
        corpus,
        engine_stats: engine.stats(),
    })
}
