//! Drives one run: every configured size, both map kinds.

use std::hint::black_box;
use std::io::Write;

use log::{debug, info};

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::maps::MapKind;
use crate::report::{summary_line, Reporter, ResultRow};
use crate::timing::median_time;
use crate::workload::Workload;

/// Median milliseconds for `kind` over `trials` fresh-map trials.
pub fn bench_kind(kind: MapKind, workload: &Workload, trials: usize) -> BenchResult<f64> {
    let mut sink = 0u64;
    let median = median_time(trials, || {
        let trial = kind.run_trial(workload);
        sink = sink.wrapping_add(trial.sink);
        trial.elapsed_ms
    })?;
    debug!(
        "{} size={} median={:.3}ms sink={}",
        kind.label(),
        workload.len(),
        median,
        black_box(sink)
    );
    Ok(median)
}

/// Benchmark every size in `config`, writing each row as soon as it is
/// measured and echoing a summary line to `out`.
pub fn run<W, O>(
    config: &BenchConfig,
    reporter: &mut Reporter<W>,
    out: &mut O,
) -> BenchResult<Vec<ResultRow>>
where
    W: Write,
    O: Write,
{
    info!(
        "sizes={} trials={} seed={}",
        config.sizes_csv(),
        config.trials,
        config.seed
    );
    reporter.write_preamble(config)?;

    let mut rows = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        info!("benchmarking size={}", size);
        let workload = Workload::generate(size, config.seed);
        let row = ResultRow {
            size,
            map_ms: bench_kind(MapKind::Ordered, &workload, config.trials)?,
            unordered_map_ms: bench_kind(MapKind::Hashed, &workload, config.trials)?,
        };
        reporter.write_row(&row)?;
        writeln!(out, "{}", summary_line(&row))
            .map_err(|e| BenchError::Io(format!("stdout: {}", e)))?;
        rows.push(row);
    }

    reporter.finish()?;
    Ok(rows)
}
