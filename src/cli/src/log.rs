use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::File;
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs [`LOGGER`] as the global logger.
pub fn init(verbose: bool) {
    let logger = LOGGER.get_or_init(Logger::new);
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Only fails when a logger is already installed.
    let _ = log::set_logger(logger);

    log::set_max_level(level);
}

/// Console logger with an optional copy to a file.
pub struct Logger {
    stderr: Mutex<StandardStream>,
    file: Mutex<Option<File>>,
}

impl Logger {
    fn new() -> Self {
        Self {
            stderr: Mutex::new(StandardStream::stderr(ColorChoice::Auto)),
            file: Mutex::new(None),
        }
    }

    pub fn set_file(&self, file: File) {
        if let Ok(mut v) = self.file.lock() {
            *v = Some(file);
        }
    }

    fn color(level: Level) -> ColorSpec {
        let mut spec = ColorSpec::new();

        match level {
            Level::Error => spec.set_fg(Some(Color::Red)).set_bold(true),
            Level::Warn => spec.set_fg(Some(Color::Yellow)).set_bold(true),
            Level::Info => spec.set_fg(Some(Color::Cyan)),
            Level::Debug | Level::Trace => spec.set_fg(Some(Color::Magenta)),
        };

        spec
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = record.level();

        // Logging errors have nowhere to go.
        if let Ok(mut stderr) = self.stderr.lock() {
            let _ = stderr.set_color(&Self::color(level));
            let _ = write!(stderr, "[{level:<5}]");
            let _ = stderr.reset();
            let _ = writeln!(stderr, " {}", record.args());
        }

        if let Ok(mut file) = self.file.lock() {
            if let Some(file) = file.as_mut() {
                let _ = writeln!(file, "[{level:<5}] {}: {}", record.target(), record.args());
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut stderr) = self.stderr.lock() {
            let _ = stderr.flush();
        }

        if let Ok(mut file) = self.file.lock() {
            if let Some(file) = file.as_mut() {
                let _ = file.flush();
            }
        }
    }
}
