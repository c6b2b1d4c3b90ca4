use colored::*;
use log::{Level, Log, Metadata, Record};

/// Terminal logger: one line per record, level tag and short target prefix.
pub struct TerminalLogger {
    max_level: Level,
}

impl TerminalLogger {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let max_level = if quiet {
            Level::Warn
        } else if verbose {
            Level::Trace
        } else {
            Level::Info
        };
        TerminalLogger { max_level }
    }

    fn format(&self, record: &Record) -> String {
        let tag = match record.level() {
            Level::Error => "[E]".red().bold(),
            Level::Warn => "[W]".yellow().bold(),
            Level::Info => "[I]".green().bold(),
            Level::Debug => "[D]".blue().bold(),
            Level::Trace => "[T]".white().bold(),
        };

        let target = record
            .target()
            .split("::")
            .last()
            .unwrap_or(record.target());

        let line = format!("{} [{}] {}", tag, target.dimmed(), record.args());
        match record.level() {
            Level::Error => line.red().to_string(),
            Level::Warn => line.yellow().to_string(),
            _ => line,
        }
    }
}

impl Log for TerminalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // Keep stdout for result lines
            eprintln!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(quiet: bool, verbose: bool) -> Result<(), log::SetLoggerError> {
    let logger = TerminalLogger::new(quiet, verbose);
    let level = logger.max_level.to_level_filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
