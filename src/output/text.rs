//! Human-readable text output

use crate::config::Config;
use crate::harness::TestcaseReport;
use crate::runner::RunSummary;
use crate::util::time::{calculate_rate, format_bytes, format_duration, format_number, format_rate};
use std::time::Duration;

/// Print run results to console
///
/// Displays:
/// - Documents, elapsed time and indexing rate
/// - Term volume
/// - Engine counters
/// - Per-slot population and cardinality (if enabled)
/// - Per-document latency percentiles (if enabled)
pub fn print_results(summary: &RunSummary, testcases: &[TestcaseReport], config: &Config) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                    RUN RESULTS");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    println!("Scenario: {} (dataset \"{}\", {} engine)", summary.scenario, summary.dataset, summary.engine);
    println!("Elapsed Time: {:.3}s", summary.elapsed.as_secs_f64());
    println!("Flush Time:   {}", format_duration(summary.flush_time));
    println!();

    let rate = calculate_rate(summary.documents, summary.elapsed);
    println!("Documents:");
    println!("  Indexed: {} ({} docs/s)", format_number(summary.documents), format_rate(rate));
    println!("  Random draws: {}", format_number(summary.draws));
    println!();

    let corpus = &summary.corpus;
    println!("Terms:");
    println!("  Total:   {} ({})", format_number(corpus.total_terms()), format_bytes(corpus.term_bytes()));
    println!(
        "  Per doc: min {} / mean {:.1} / max {}",
        corpus.min_terms(),
        corpus.mean_terms(),
        corpus.max_terms()
    );
    println!();

    let engine = &summary.engine_stats;
    println!("Engine:");
    println!("  Committed: {} of {} documents", format_number(engine.documents_committed), format_number(engine.documents_added));
    if engine.distinct_terms > 0 {
        println!("  Distinct terms: {}", format_number(engine.distinct_terms));
        println!("  Postings:       {}", format_number(engine.postings));
    }
    if engine.bytes_written > 0 {
        println!("  Written: {}", format_bytes(engine.bytes_written));
    }
    println!();

    if config.output.show_slots && corpus.slot_count() > 0 {
        println!("Value Slots:");
        println!("  {:>4}  {:>10}  {:>8}  {:>11}", "slot", "populated", "rate", "cardinality");
        for slot in corpus.slot_summaries() {
            println!(
                "  {:>4}  {:>10}  {:>7.2}%  {:>11}",
                slot.slot,
                format_number(slot.populated),
                slot.population_rate * 100.0,
                format_number(slot.cardinality)
            );
        }
        println!();
    }

    if config.output.show_percentiles {
        for testcase in testcases {
            for indexing in &testcase.indexing {
                let l = &indexing.latency;
                if l.samples == 0 {
                    continue;
                }
                println!("Per-document latency ({}):", indexing.dataset);
                println!("  min:  {}", format_duration(Duration::from_nanos(l.min_ns)));
                println!("  mean: {}", format_duration(Duration::from_nanos(l.mean_ns)));
                println!("  p50:  {}", format_duration(Duration::from_nanos(l.p50_ns)));
                println!("  p90:  {}", format_duration(Duration::from_nanos(l.p90_ns)));
                println!("  p99:  {}", format_duration(Duration::from_nanos(l.p99_ns)));
                println!("  max:  {}", format_duration(Duration::from_nanos(l.max_ns)));
                println!();
            }
        }
    }

    println!("═══════════════════════════════════════════════════════════");
}

/// Print the configuration banner shown before a run
pub fn print_configuration(config: &Config) {
    println!("Configuration:");
    for line in config.to_string().lines() {
        println!("  {}", line);
    }
    if config.runtime.verify {
        println!("    Verification: enabled");
    }
}
