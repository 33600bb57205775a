//! Command-line configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_SIZES: &[usize] = &[1000, 3000, 10000, 30000, 100000, 300000];
pub const DEFAULT_TRIALS: usize = 5;
pub const DEFAULT_SEED: u64 = 1337;

#[derive(Parser, Debug)]
#[command(name = "mapbench")]
#[command(about = "Time insert+lookup on BTreeMap vs HashMap, reduced by median")]
#[command(args_override_self = true)]
struct Args {
    /// Sizes to benchmark
    #[arg(
        long,
        value_name = "N1,N2,...",
        default_value = "1000,3000,10000,30000,100000,300000",
        value_parser = parse_sizes
    )]
    sizes: SizeList,

    /// Trials per size
    #[arg(long, value_name = "N", default_value = "5", value_parser = parse_trials)]
    trials: usize,

    /// RNG seed
    #[arg(long, value_name = "N", default_value = "1337")]
    seed: u64,

    /// CSV output path
    #[arg(long, value_name = "PATH", default_value = "results/benchmark.csv")]
    output: PathBuf,

    /// Log output path
    #[arg(long, value_name = "PATH", default_value = "results/run.log")]
    log: PathBuf,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// A whole `--sizes` value; a later `--sizes` replaces it.
#[derive(Debug, Clone)]
struct SizeList(Vec<usize>);

/// Comma-separated sizes. Empty items are skipped, but at least one size
/// must remain.
fn parse_sizes(s: &str) -> Result<SizeList, String> {
    let sizes = s
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<usize>()
                .map_err(|e| format!("invalid size '{}': {}", item, e))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if sizes.is_empty() {
        return Err("no sizes given".to_string());
    }
    Ok(SizeList(sizes))
}

fn parse_trials(s: &str) -> Result<usize, String> {
    let trials: usize = s.parse().map_err(|e| format!("{}", e))?;
    if trials == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(trials)
}

/// Resolved run configuration. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    pub trials: usize,
    pub seed: u64,
    pub output_csv: PathBuf,
    pub output_log: PathBuf,
    pub verbosity: u8,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            output_csv: PathBuf::from("results/benchmark.csv"),
            output_log: PathBuf::from("results/run.log"),
            verbosity: 0,
        }
    }
}

impl BenchConfig {
    /// Parse an argument list whose first element is the program name.
    ///
    /// `--help` comes back as an error of kind `DisplayHelp`; callers decide
    /// the exit status.
    pub fn parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;
        Ok(Self {
            sizes: args.sizes.0,
            trials: args.trials,
            seed: args.seed,
            output_csv: args.output,
            output_log: args.log,
            verbosity: args.verbose,
        })
    }

    /// Sizes joined the way they are accepted on the command line.
    pub fn sizes_csv(&self) -> String {
        self.sizes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
