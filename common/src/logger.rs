use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::LevelFilter;
use std::fs::{OpenOptions, create_dir_all};
use std::path::Path;

/// Initializes the fern logger for terminal binaries.
///
/// Records always go to `log_file_path`. Mirroring to stdout is opt-in via
/// `echo_to_stdout` because the quiz client draws its own screen and colored
/// log lines in between prompts make it unreadable.
pub fn init_logger(log_level: &str, log_file_path: &str, echo_to_stdout: bool) {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.exists() {
            create_dir_all(parent).expect("Failed to create log directory");
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .expect("Cannot open log file");

    let level = match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            let tag = match record.level() {
                log::Level::Error => "ERROR".red(),
                log::Level::Warn => "WARN".yellow(),
                log::Level::Info => "INFO".green(),
                log::Level::Debug => "DEBUG".cyan(),
                log::Level::Trace => "TRACE".normal(),
            };

            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                tag,
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(log_file);

    if echo_to_stdout {
        dispatch = dispatch.chain(std::io::stdout());
    }

    dispatch.apply().expect("Failed to initialize logger");
}
