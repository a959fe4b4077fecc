//! JSON output formatting
//!
//! Serializes a completed run into a single JSON document: the distribution
//! that produced the corpus, what was generated, what the engine ingested and
//! the harness timings.

use crate::config::workload::CorpusConfig;
use crate::config::Config;
use crate::corpus::stats::SlotSummary;
use crate::engine::EngineStats;
use crate::harness::TestcaseReport;
use crate::runner::RunSummary;
use crate::util::time::calculate_rate;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Complete JSON report of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub timestamp: String,
    pub scenario: String,
    pub dataset: String,
    pub engine: String,
    pub distribution: CorpusConfig,
    pub results: JsonResults,
    pub terms: JsonTerms,
    pub slots: Vec<SlotSummary>,
    pub engine_stats: EngineStats,
    pub testcases: Vec<TestcaseReport>,
}

/// Headline numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResults {
    pub documents: u64,
    pub draws: u64,
    pub elapsed_us: u64,
    pub flush_us: u64,
    pub docs_per_sec: f64,
}

/// Term volume of the generated corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonTerms {
    pub total: u64,
    pub bytes: u64,
    pub min_per_doc: u64,
    pub max_per_doc: u64,
    pub mean_per_doc: f64,
}

impl JsonReport {
    pub fn new(config: &Config, summary: &RunSummary, testcases: &[TestcaseReport]) -> Self {
        let corpus = &summary.corpus;
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            scenario: summary.scenario.clone(),
            dataset: summary.dataset.clone(),
            engine: summary.engine.to_string(),
            distribution: config.corpus.clone(),
            results: JsonResults {
                documents: summary.documents,
                draws: summary.draws,
                elapsed_us: summary.elapsed.as_micros() as u64,
                flush_us: summary.flush_time.as_micros() as u64,
                docs_per_sec: calculate_rate(summary.documents, summary.elapsed),
            },
            terms: JsonTerms {
                total: corpus.total_terms(),
                bytes: corpus.term_bytes(),
                min_per_doc: corpus.min_terms(),
                max_per_doc: corpus.max_terms(),
                mean_per_doc: corpus.mean_terms(),
            },
            slots: corpus.slot_summaries(),
            engine_stats: summary.engine_stats.clone(),
            testcases: testcases.to_vec(),
        }
    }
}

/// Write `report` as pretty-printed JSON to `path`
pub fn write_json_report(path: &Path, report: &JsonReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON report: {}", path.display()))?;

    serde_json::to_writer_pretty(BufWriter::new(file), report)
        .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;

    Ok(())
}
