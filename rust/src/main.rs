use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use mapbench::{logging, runner, BenchConfig, Reporter};

fn main() -> ExitCode {
    let config = match BenchConfig::parse_from(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            // Help and version go to stdout; everything else goes to stderr with usage.
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    if let Err(e) = logging::init(config.verbosity) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let mut reporter = match Reporter::create(&config) {
        Ok(reporter) => reporter,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let stdout = io::stdout();
    match runner::run(&config, &mut reporter, &mut stdout.lock()) {
        Ok(rows) => {
            log::info!("wrote {} rows to {}", rows.len(), config.output_csv.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(1)
        }
    }
}
