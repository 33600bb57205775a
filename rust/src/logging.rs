//! Diagnostic logging to stderr.
//!
//! Stdout carries the per-size summary and the run log file is written by the
//! reporter, so log4rs only ever gets a stderr console appender.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOGGING_PATTERN: &str = "{d(%H:%M:%S%.3f)} {l} {t} - {m}\n";

/// Level for a `-v` count: warnings by default, then info, then debug.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOGGING_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(
            Root::builder()
                .appender("stderr")
                .build(level_for(verbosity)),
        )?;

    log4rs::init_config(config)?;
    Ok(())
}
