//! Report module: CSV rows, the run log, and the stdout summary.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::maps::MapKind;

/// Median timings for one configured size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub size: usize,
    pub map_ms: f64,
    pub unordered_map_ms: f64,
}

pub fn csv_header() -> String {
    let columns: Vec<String> = MapKind::ALL
        .iter()
        .map(|kind| format!("{}_ms", kind.label()))
        .collect();
    format!("size,{}", columns.join(","))
}

pub fn csv_row(row: &ResultRow) -> String {
    format!("{},{:.3},{:.3}", row.size, row.map_ms, row.unordered_map_ms)
}

pub fn log_line(row: &ResultRow) -> String {
    format!(
        "size={} map_ms={:.3} unordered_map_ms={:.3}",
        row.size, row.map_ms, row.unordered_map_ms
    )
}

/// One-line summary echoed to stdout.
pub fn summary_line(row: &ResultRow) -> String {
    format!(
        "Size {}: map={:.3} ms, unordered_map={:.3} ms",
        row.size, row.map_ms, row.unordered_map_ms
    )
}

/// Writes the CSV file and the run log side by side.
pub struct Reporter<W: Write> {
    csv: W,
    csv_path: PathBuf,
    log: W,
    log_path: PathBuf,
}

impl Reporter<BufWriter<File>> {
    /// Open both output files named by `config`, CSV first.
    pub fn create(config: &BenchConfig) -> BenchResult<Self> {
        let csv = open_output("CSV", &config.output_csv)?;
        let log = open_output("log", &config.output_log)?;
        Ok(Self::new(
            csv,
            config.output_csv.clone(),
            log,
            config.output_log.clone(),
        ))
    }
}

fn open_output(kind: &str, path: &Path) -> BenchResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| BenchError::output_open(kind, path, &e))?;
    }
    let file = File::create(path).map_err(|e| BenchError::output_open(kind, path, &e))?;
    Ok(BufWriter::new(file))
}

impl<W: Write> Reporter<W> {
    /// Wrap already opened writers; the paths are only used in error messages.
    pub fn new(csv: W, csv_path: PathBuf, log: W, log_path: PathBuf) -> Self {
        Self {
            csv,
            csv_path,
            log,
            log_path,
        }
    }

    /// CSV header and the configuration echo at the top of the log.
    pub fn write_preamble(&mut self, config: &BenchConfig) -> BenchResult<()> {
        let log_path = &self.log_path;
        write!(
            self.log,
            "Benchmark config\nsizes={}\ntrials={}\nseed={}\noutput={}\n\n",
            config.sizes_csv(),
            config.trials,
            config.seed,
            config.output_csv.display()
        )
        .map_err(|e| BenchError::io(log_path, &e))?;

        writeln!(self.csv, "{}", csv_header()).map_err(|e| BenchError::io(&self.csv_path, &e))
    }

    pub fn write_row(&mut self, row: &ResultRow) -> BenchResult<()> {
        writeln!(self.csv, "{}", csv_row(row)).map_err(|e| BenchError::io(&self.csv_path, &e))?;
        writeln!(self.log, "{}", log_line(row)).map_err(|e| BenchError::io(&self.log_path, &e))
    }

    pub fn finish(&mut self) -> BenchResult<()> {
        self.csv
            .flush()
            .map_err(|e| BenchError::io(&self.csv_path, &e))?;
        self.log
            .flush()
            .map_err(|e| BenchError::io(&self.log_path, &e))
    }

    /// Hand back the CSV and log writers.
    #[cfg(test)]
    pub(crate) fn into_inner(self) -> (W, W) {
        (self.csv, self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ResultRow {
        ResultRow {
            size: 1000,
            map_ms: 0.12345,
            unordered_map_ms: 2.0,
        }
    }

    #[test]
    fn test_csv_format() {
        assert_eq!(csv_header(), "size,map_ms,unordered_map_ms");
        assert_eq!(csv_row(&row()), "1000,0.123,2.000");
    }

    #[test]
    fn test_text_lines() {
        assert_eq!(
            log_line(&row()),
            "size=1000 map_ms=0.123 unordered_map_ms=2.000"
        );
        assert_eq!(
            summary_line(&row()),
            "Size 1000: map=0.123 ms, unordered_map=2.000 ms"
        );
    }

    #[test]
    fn test_reporter_writes_both_outputs() {
        let config = BenchConfig {
            sizes: vec![1000, 10],
            trials: 3,
            seed: 42,
            ..BenchConfig::default()
        };
        let mut reporter = Reporter::new(
            Vec::new(),
            PathBuf::from("mem.csv"),
            Vec::new(),
            PathBuf::from("mem.log"),
        );
        reporter.write_preamble(&config).unwrap();
        reporter.write_row(&row()).unwrap();
        reporter.finish().unwrap();
        let (csv, log) = reporter.into_inner();

        let csv = String::from_utf8(csv).unwrap();
        assert_eq!(csv, "size,map_ms,unordered_map_ms\n1000,0.123,2.000\n");

        let log = String::from_utf8(log).unwrap();
        assert!(log.starts_with("Benchmark config\nsizes=1000,10\ntrials=3\nseed=42\n"));
        assert!(log.ends_with("\n\nsize=1000 map_ms=0.123 unordered_map_ms=2.000\n"));
    }
}
