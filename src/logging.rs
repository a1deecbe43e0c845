use crate::config::Config;
use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, FileSpec, FlexiLoggerError, Logger, LoggerHandle,
    Naming, WriteMode,
};
use log::Record;
use std::io::Write;

/// Start the global logger. Keep the returned handle alive for the process lifetime.
pub fn init_logging(config: &Config) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_str(&config.log_level)?;
    let logger = if config.log_to_file {
        logger
            .log_to_file(FileSpec::try_from(log_file_path(config))?)
            .write_mode(WriteMode::BufferAndFlush)
            .rotate(
                Criterion::Age(Age::Day),
                Naming::Timestamps,
                Cleanup::KeepLogFiles(30),
            )
    } else {
        logger.log_to_stderr()
    };
    logger.format(format_record).start()
}

pub fn log_file_path(config: &Config) -> String {
    config.log_file.clone().unwrap_or_else(|| {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        format!("log/{}-profile-host.log", today)
    })
}

// [time] LEVEL target: message
fn format_record(w: &mut dyn Write, now: &mut DeferredNow, record: &Record) -> std::io::Result<()> {
    write!(
        w,
        "{} [{}] {}: {}",
        now.now().format("%d/%b/%Y:%H:%M:%S %z"),
        record.level(),
        record.target(),
        record.args()
    )
}
