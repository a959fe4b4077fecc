//! Benchmark harness hooks
//!
//! The runner reports progress through the [`Harness`] trait: one test case
//! brackets a run, and inside it one indexing phase brackets the documents
//! added to a dataset. [`PerfLogger`] is the harness used by the binary; it
//! times every phase, keeps a per-document latency histogram and emits
//! `tracing` events at every boundary.
//!
//! # Event Order
//!
//! ```text
//! begin_testcase(name)
//!   begin_indexing(dataset)
//!     record_document_indexed()   x N
//!   end_indexing()
//! end_testcase()
//! ```

pub mod latency;

use crate::util::time::{calculate_rate, format_rate, Timestamp};
use latency::{LatencyHistogram, LatencySummary};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Progress and timing hooks of a benchmark harness
pub trait Harness {
    fn begin_testcase(&mut self, name: &str);
    fn end_testcase(&mut self);
    fn begin_indexing(&mut self, dataset: &str);
    fn record_document_indexed(&mut self);
    fn end_indexing(&mut self);
}

/// Timing of one indexing phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexingReport {
    pub dataset: String,
    pub documents: u64,
    #[serde(with = "duration_micros")]
    pub elapsed: Duration,
    pub latency: LatencySummary,
}

impl IndexingReport {
    /// Documents indexed per second
    pub fn docs_per_sec(&self) -> f64 {
        calculate_rate(self.documents, self.elapsed)
    }
}

/// Timing of one test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestcaseReport {
    pub name: String,
    #[serde(with = "duration_micros")]
    pub elapsed: Duration,
    pub indexing: Vec<IndexingReport>,
}

struct TestcaseState {
    name: String,
    started: Timestamp,
    indexing: Vec<IndexingReport>,
}

struct IndexingState {
    dataset: String,
    started: Timestamp,
    last_event: Timestamp,
    documents: u64,
    latency: LatencyHistogram,
}

/// Harness that times test cases and indexing phases
///
/// Out-of-order events (ending a phase that never began, nesting test cases)
/// are logged as warnings and otherwise ignored.
pub struct PerfLogger {
    testcase: Option<TestcaseState>,
    indexing: Option<IndexingState>,
    reports: Vec<TestcaseReport>,
    /// Emit a progress event every this many documents (0 = never)
    progress_every: u64,
}

impl PerfLogger {
    pub fn new() -> Self {
        Self {
            testcase: None,
            indexing: None,
            reports: Vec::new(),
            progress_every: 0,
        }
    }

    /// Log a debug progress event every `every` documents
    pub fn with_progress(mut self, every: u64) -> Self {
        self.progress_every = every;
        self
    }

    /// Completed test cases, in order
    pub fn reports(&self) -> &[TestcaseReport] {
        &self.reports
    }

    /// Take ownership of the completed test cases
    pub fn into_reports(self) -> Vec<TestcaseReport> {
        self.reports
    }

    /// Documents recorded in the indexing phase currently open
    pub fn documents_in_progress(&self) -> u64 {
        self.indexing.as_ref().map_or(0, |i| i.documents)
    }
}

impl Default for PerfLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness for PerfLogger {
    fn begin_testcase(&mut self, name: &str) {
        if let Some(ref open) = self.testcase {
            tracing::warn!(open = %open.name, name, "test case started while another is open");
        }
        tracing::info!(testcase = name, "test case started");
        self.testcase = Some(TestcaseState {
            name: name.to_string(),
            started: Timestamp::now(),
            indexing: Vec::new(),
        });
    }

    fn end_testcase(&mut self) {
        if self.indexing.is_some() {
            tracing::warn!("test case ended with an indexing phase still open");
            self.end_indexing();
        }

        let Some(state) = self.testcase.take() else {
            tracing::warn!("end_testcase called without an open test case");
            return;
        };

        let elapsed = state.started.elapsed();
        tracing::info!(
            testcase = %state.name,
            elapsed_ms = elapsed.as_millis() as u64,
            "test case finished"
        );
        self.reports.push(TestcaseReport {
            name: state.name,
            elapsed,
            indexing: state.indexing,
        });
    }

    fn begin_indexing(&mut self, dataset: &str) {
        if self.testcase.is_none() {
            tracing::warn!(dataset, "indexing started outside a test case");
        }
        tracing::info!(dataset, "indexing started");
        let now = Timestamp::now();
        self.indexing = Some(IndexingState {
            dataset: dataset.to_string(),
            started: now,
            last_event: now,
            documents: 0,
            latency: LatencyHistogram::new(),
        });
    }

    fn record_document_indexed(&mut self) {
        let Some(ref mut state) = self.indexing else {
            tracing::warn!("document recorded outside an indexing phase");
            return;
        };

        let now = Timestamp::now();
        state.latency.record(now.duration_since(state.last_event));
        state.last_event = now;
        state.documents += 1;

        if self.progress_every > 0 && state.documents % self.progress_every == 0 {
            tracing::debug!(
                dataset = %state.dataset,
                documents = state.documents,
                "indexing progress"
            );
        }
    }

    fn end_indexing(&mut self) {
        let Some(state) = self.indexing.take() else {
            tracing::warn!("end_indexing called without an open indexing phase");
            return;
        };

        let report = IndexingReport {
            dataset: state.dataset,
            documents: state.documents,
            elapsed: state.started.elapsed(),
            latency: state.latency.summary(),
        };
        tracing::info!(
            dataset = %report.dataset,
            documents = report.documents,
            elapsed_ms = report.elapsed.as_millis() as u64,
            rate = %format_rate(report.docs_per_sec()),
            "indexing finished"
        );

        match self.testcase {
            Some(ref mut testcase) => testcase.indexing.push(report),
            None => self.reports.push(TestcaseReport {
                name: String::new(),
                elapsed: report.elapsed,
                indexing: vec![report],
            }),
        }
    }
}

mod duration_micros {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_micros() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_micros)
    }
}
