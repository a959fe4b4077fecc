//! Per-document latency histogram using HdrHistogram
//!
//! Records the interval between consecutive "document indexed" events, which
//! covers generating one document and handing it to the engine.
//!
//! # Example
//!
//! ```
//! use randomidx::harness::latency::LatencyHistogram;
//! use std::time::Duration;
//!
//! let mut hist = LatencyHistogram::new();
//! hist.record(Duration::from_micros(100));
//! hist.record(Duration::from_micros(300));
//!
//! assert_eq!(hist.len(), 2);
//! assert!(hist.percentile(99.0).is_some());
//! ```

use hdrhistogram::Histogram;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound of the histogram: one hour in nanoseconds
const MAX_LATENCY_NANOS: u64 = 3_600_000_000_000;

/// Latency histogram wrapper
///
/// Tracks latencies from 1ns to 1 hour with 3 significant digits.
#[derive(Debug, Clone)]
pub struct LatencyHistogram {
    histogram: Histogram<u64>,
}

/// Percentile summary of a histogram, in nanoseconds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    pub samples: u64,
    pub min_ns: u64,
    pub mean_ns: u64,
    pub p50_ns: u64,
    pub p90_ns: u64,
    pub p99_ns: u64,
    pub max_ns: u64,
}

impl LatencyHistogram {
    pub fn new() -> Self {
        let histogram = Histogram::new_with_bounds(1, MAX_LATENCY_NANOS, 3)
            .expect("Failed to create histogram with valid bounds");

        Self { histogram }
    }

    /// Record a latency sample, clamped to 1ns..=1h
    #[inline]
    pub fn record(&mut self, latency: Duration) {
        let nanos = latency.as_nanos().min(u128::from(MAX_LATENCY_NANOS)) as u64;
        let _ = self.histogram.record(nanos.max(1));
    }

    /// Latency at `percentile` (0.0 - 100.0), or None if empty
    pub fn percentile(&self, percentile: f64) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.value_at_percentile(percentile)))
    }

    pub fn min(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.min()))
    }

    pub fn max(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.max()))
    }

    pub fn mean(&self) -> Option<Duration> {
        if self.is_empty() {
            return None;
        }
        Some(Duration::from_nanos(self.histogram.mean() as u64))
    }

    pub fn len(&self) -> u64 {
        self.histogram.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.len() == 0
    }

    /// Snapshot of the usual percentiles; all zero when empty
    pub fn summary(&self) -> LatencySummary {
        if self.is_empty() {
            return LatencySummary::default();
        }

        LatencySummary {
            samples: self.histogram.len(),
            min_ns: self.histogram.min(),
            mean_ns: self.histogram.mean() as u64,
            p50_ns: self.histogram.value_at_percentile(50.0),
            p90_ns: self.histogram.value_at_percentile(90.0),
            p99_ns: self.histogram.value_at_percentile(99.0),
            max_ns: self.histogram.max(),
        }
    }
}

impl Default for LatencyHistogram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_histogram() {
        let hist = LatencyHistogram::new();
        assert!(hist.is_empty());
        assert!(hist.percentile(50.0).is_none());
        assert!(hist.min().is_none());
        assert_eq!(hist.summary(), LatencySummary::default());
    }

    #[test]
    fn test_percentile() {
        let mut hist = LatencyHistogram::new();
        for i in 1..=100 {
            hist.record(Duration::from_micros(i * 10));
        }

        let p50 = hist.percentile(50.0).unwrap();
        let p99 = hist.percentile(99.0).unwrap();

        // p50 should be around 500 microseconds
        assert!(p50.as_micros() >= 450 && p50.as_micros() <= 550);
        // p99 should be around 990 microseconds
        assert!(p99.as_micros() >= 940 && p99.as_micros() <= 1040);
    }

    #[test]
    fn test_min_max_mean() {
        let mut hist = LatencyHistogram::new();
        hist.record(Duration::from_micros(100));
        hist.record(Duration::from_micros(500));
        hist.record(Duration::from_micros(300));

        let min = hist.min().unwrap();
        let max = hist.max().unwrap();
        let mean = hist.mean().unwrap();

        assert!(min.as_micros() >= 95 && min.as_micros() <= 105);
        assert!(max.as_micros() >= 495 && max.as_micros() <= 505);
        assert!(mean.as_micros() >= 290 && mean.as_micros() <= 310);
    }

    #[test]
    fn test_zero_and_huge_samples_are_clamped() {
        let mut hist = LatencyHistogram::new();
        hist.record(Duration::ZERO);
        hist.record(Duration::from_secs(7200));

        assert_eq!(hist.len(), 2);
        assert_eq!(hist.min().unwrap(), Duration::from_nanos(1));
        // max() reports the top of the bucket, within 0.1% of the 1 h ceiling
        let max = hist.max().unwrap();
        assert!(max >= Duration::from_secs(3599) && max <= Duration::from_secs(3604), "max {:?}", max);
        assert!(hist.percentile(100.0).unwrap() <= Duration::from_secs(3604));
    }

    #[test]
    fn test_summary() {
        let mut hist = LatencyHistogram::new();
        for _ in 0..10 {
            hist.record(Duration::from_micros(50));
        }

        let summary = hist.summary();
        assert_eq!(summary.samples, 10);
        assert!(summary.p50_ns >= 49_000 && summary.p50_ns <= 51_000);
        assert!(summary.min_ns <= summary.p90_ns && summary.p99_ns <= summary.max_ns);
    }
}
